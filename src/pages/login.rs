//! Sign-in screen.
//!
//! Any non-blank email and password are accepted after a short simulated
//! delay; the session user is synthesized from the email.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::css;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DEMO_EMAIL, DEMO_PASSWORD, LOGIN_DELAY_MS};
use crate::core::validate_credentials;
use crate::models::{AppRoute, NewToast};
use crate::utils::TimerSlot;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let email = RwSignal::new(DEMO_EMAIL.to_string());
    let password = RwSignal::new(DEMO_PASSWORD.to_string());
    let loading = RwSignal::new(false);
    let submit_timer = TimerSlot::new();
    on_cleanup(move || submit_timer.cancel());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        loading.set(true);

        submit_timer.schedule(LOGIN_DELAY_MS, move || {
            loading.set(false);
            let email = email.get_untracked();
            match validate_credentials(&email, &password.get_untracked()) {
                Ok(()) => {
                    ctx.login(email.trim());
                    ctx.add_toast(NewToast::success("Success", "You have successfully logged in."));
                    ctx.navigate(&AppRoute::root());
                }
                Err(e) => {
                    tracing::debug!(error = %e, "sign-in rejected");
                    ctx.add_toast(NewToast::destructive("Error", e.to_string()));
                }
            }
        });
    };

    view! {
        <div class=css::loginScreen>
            <div class=format!("{} {}", css::card, css::loginCard)>
                <div class=format!("{} {}", css::cardHeader, css::loginHeader)>
                    <div class=css::lockBadge><Icon icon=ic::LOCK /></div>
                    <h3 class=css::cardTitle>"Welcome back"</h3>
                    <p class=css::cardDescription>"Enter your email to sign in to your account"</p>
                </div>
                <form on:submit=submit>
                    <div class=format!("{} {}", css::cardContent, css::loginForm)>
                        <label class=css::field>
                            <span class=css::label>"Email"</span>
                            <input
                                class=css::input
                                type="email"
                                placeholder="m@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class=css::field>
                            <span class=css::label>"Password"</span>
                            <input
                                class=css::input
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <button
                            class=format!("{} {}", css::button, css::fullWidth)
                            type="submit"
                            disabled=move || loading.get()
                        >
                            {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
