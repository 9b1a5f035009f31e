//! Page controls for list pages.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::{PageItem, page_items};

stylance::import_crate_style!(css, "src/components/pager/pager.module.css");

/// Previous / numbered pages / Next.
///
/// `on_change` receives the requested page; the owner decides whether it
/// is in range. Previous is disabled on the first page, Next on the last
/// page or when there are no pages at all.
#[component]
pub fn Pager(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || page.get() <= 1;
    let at_end = move || {
        let total = total_pages.get();
        total == 0 || page.get() >= total
    };

    let items = move || {
        page_items(page.get(), total_pages.get())
            .into_iter()
            .map(|item| match item {
                PageItem::Page { number, active } => view! {
                    <button
                        class=if active { format!("{} {}", css::link, css::active) } else { css::link.to_string() }
                        aria-current=active.then_some("page")
                        on:click=move |_| on_change.run(number)
                    >
                        {number}
                    </button>
                }
                .into_any(),
                PageItem::Ellipsis => view! {
                    <span class=css::ellipsis aria-hidden="true">
                        <Icon icon=ic::ELLIPSIS />
                    </span>
                }
                .into_any(),
            })
            .collect_view()
    };

    view! {
        <nav class=css::pager role="navigation" aria-label="pagination">
            <button
                class=css::step
                disabled=at_start
                aria-label="Go to previous page"
                on:click=move |_| on_change.run(page.get_untracked().saturating_sub(1))
            >
                <Icon icon=ic::CHEVRON_LEFT />
                <span>"Previous"</span>
            </button>
            {items}
            <button
                class=css::step
                disabled=at_end
                aria-label="Go to next page"
                on:click=move |_| on_change.run(page.get_untracked() + 1)
            >
                <span>"Next"</span>
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </nav>
    }
}
