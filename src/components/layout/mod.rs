//! Dashboard layout.
//!
//! Sidebar on the left; on the right a header (sidebar toggle and
//! breadcrumb trail) above the scrollable page outlet. The command search
//! palette is mounted here so both the sidebar trigger and the global
//! shortcut reach the same state.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::search::{SearchContext, SearchPalette};
use crate::components::sidebar::Sidebar;
use crate::config::nav_routes;
use crate::core::derive_breadcrumbs;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Chrome shared by every signed-in page.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    provide_context(SearchContext::new());

    view! {
        <div class=css::shell>
            <Sidebar />
            <div class=css::content>
                <header class=css::header>
                    <button
                        class=css::toggle
                        title="Toggle sidebar"
                        on:click=move |_| ctx.toggle_sidebar()
                    >
                        <Icon icon=ic::PANEL_LEFT />
                    </button>
                    <div class=css::divider></div>
                    <Breadcrumbs />
                </header>
                <main class=css::main>{children()}</main>
            </div>
            <SearchPalette />
        </div>
    }
}

/// Breadcrumb trail for the current route.
#[component]
fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let crumbs = Memo::new(move |_| {
        ctx.route
            .with(|r| derive_breadcrumbs(nav_routes(), r.path()))
    });

    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumb">
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let separator = (i > 0).then(|| {
                            view! { <span class=css::separator><Icon icon=ic::CHEVRON_RIGHT /></span> }
                        });
                        let label = crumb.label;
                        let item = if crumb.is_link {
                            let href = AppRoute::app(&crumb.path).to_hash();
                            view! { <a class=css::crumbLink href=href>{label}</a> }.into_any()
                        } else {
                            let class = if i == last { css::crumbCurrent } else { css::crumbMuted };
                            view! { <span class=class>{label}</span> }.into_any()
                        };
                        view! {
                            {separator}
                            {item}
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
