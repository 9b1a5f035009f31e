//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native `hashchange`
//! events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route signal is derived from `#/path`
//! - **Guarded destinations**: guests only ever see the login screen, and
//!   signed-in users never do; redirects replace the history entry
//! - **Layout never re-renders on navigation**: only the page outlet swaps
//! - **Unmatched paths** render the NotFound page inside the layout

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::components::layout::DashboardLayout;
use crate::config::nav_routes;
use crate::core::breadcrumb::resolve;
use crate::core::{GuardDecision, guard};
use crate::models::{AppRoute, Page};
use crate::pages::{Dashboard, Login, NotFound, Orgs, Settings, Users};

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `#/login` → Login (guest only)
/// - `#/` and every other path → DashboardLayout with the matching page
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    let handle = window_event_listener(ev::hashchange, move |_| {
        route.set(AppRoute::current());
    });
    on_cleanup(move || handle.remove());

    // Guard every route change, including session changes on the same route.
    let decision = Memo::new(move |_| guard(&route.get(), ctx.is_authenticated()));
    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            ctx.redirect(&target);
        }
    });

    let is_login = Memo::new(move |_| route.with(|r| r.is_login()));
    let can_render = Memo::new(move |_| decision.get() == GuardDecision::Render);

    view! {
        <Show when=move || can_render.get()>
            <Show
                when=move || is_login.get()
                fallback=|| view! { <DashboardLayout><PageOutlet /></DashboardLayout> }
            >
                <Login />
            </Show>
        </Show>
    }
}

// ============================================================================
// Page Outlet
// ============================================================================

/// Page for the current path.
///
/// The decision depends only on whether the route table has a navigable
/// node for the path, never on the path's text.
#[component]
fn PageOutlet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let page = Memo::new(move |_| {
        ctx.route
            .with(|r| resolve(nav_routes(), r.path()).and_then(|node| node.page))
            .unwrap_or(Page::NotFound)
    });

    move || match page.get() {
        Page::Dashboard => view! { <Dashboard /> }.into_any(),
        Page::Users => view! { <Users /> }.into_any(),
        Page::Orgs => view! { <Orgs /> }.into_any(),
        Page::Settings => view! { <Settings /> }.into_any(),
        Page::NotFound => view! { <NotFound /> }.into_any(),
    }
}
