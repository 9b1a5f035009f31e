use leptos::prelude::*;

use super::css;
use crate::models::AppRoute;

/// Shown for any path without a page in the route table.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class=css::notFound>
            <h1 class=css::notFoundCode>"404"</h1>
            <p class=css::notFoundText>"Page not found."</p>
            <a class=css::button href=AppRoute::root().to_hash()>"Go Home"</a>
        </div>
    }
}
