//! Account settings.

use leptos::{ev, prelude::*};

use super::css;
use crate::app::AppContext;
use crate::models::{NewToast, UserPatch};

#[component]
pub fn Settings() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let role = Memo::new(move |_| {
        ctx.store.with(|s| {
            s.session
                .current_user()
                .map(|u| u.role.clone())
                .unwrap_or_default()
        })
    });
    let name = RwSignal::new(ctx.store.with_untracked(|s| s.session.display_name()));

    let save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let value = name.get_untracked().trim().to_string();
        if value.is_empty() {
            ctx.add_toast(NewToast::destructive("Error", "Display name cannot be empty."));
            return;
        }
        ctx.update_user(UserPatch {
            name: Some(value),
            ..Default::default()
        });
        ctx.add_toast(NewToast::success("Saved", "Your profile has been updated."));
    };

    view! {
        <div class=css::page>
            <div>
                <h2 class=css::title>"Settings"</h2>
                <p class=css::subtitle>"Manage your account settings and preferences."</p>
            </div>

            <form class=css::card on:submit=save>
                <div class=css::cardHeader>
                    <h3 class=css::cardTitle>"Profile Information"</h3>
                    <p class=css::cardDescription>"Update your personal details here."</p>
                </div>
                <div class=css::cardContent>
                    <div class=css::formGrid>
                        <label class=css::field>
                            <span class=css::label>"Display Name"</span>
                            <input
                                class=css::input
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <div class=css::field>
                            <span class=css::label>"Role"</span>
                            <div class=format!("{} {}", css::input, css::readonly)>{move || role.get()}</div>
                        </div>
                    </div>
                </div>
                <div class=css::cardFooter>
                    <button class=css::button type="submit">"Save Changes"</button>
                </div>
            </form>
        </div>
    }
}
