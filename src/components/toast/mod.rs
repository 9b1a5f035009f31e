//! Toast stack.
//!
//! Fixed to the top-right corner. Each toast disappears on its own after a
//! few seconds or when its close button is clicked.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Toast, ToastVariant};

stylance::import_crate_style!(css, "src/components/toast/toast.module.css");

fn variant_class(variant: ToastVariant) -> String {
    match variant {
        ToastVariant::Default => css::toast.to_string(),
        ToastVariant::Destructive => format!("{} {}", css::toast, css::destructive),
        ToastVariant::Success => format!("{} {}", css::toast, css::success),
    }
}

/// Renders every queued toast, oldest first.
#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toasts = Memo::new(move |_| ctx.store.with(|s| s.toasts.entries().to_vec()));

    view! {
        <div class=css::viewport aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=variant_class(toast.variant) role="status">
                            <div class=css::body>
                                {toast.title.map(|title| view! { <div class=css::title>{title}</div> })}
                                <div class=css::description>{toast.description}</div>
                            </div>
                            <button
                                class=css::close
                                aria-label="Dismiss"
                                on:click=move |_| ctx.dismiss_toast(id)
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
