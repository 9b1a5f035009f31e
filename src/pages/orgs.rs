//! Organization directory with an advanced filter panel.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::css;
use super::users::status_badge;
use crate::app::AppContext;
use crate::components::Pager;
use crate::components::icons as ic;
use crate::config::mock_orgs;
use crate::config::paging::{DEFAULT_PAGE_SIZE, ORG_PAGE_SIZES};
use crate::core::{ListState, OrgFilter};
use crate::models::{NewToast, OrgRecord, OrgType, UserStatus};

const ALL: &str = "All";

fn org_row(org: &'static OrgRecord) -> impl IntoView {
    view! {
        <tr>
            <td class=css::strong>{org.name.as_str()}</td>
            <td><span class=css::tag>{org.org_type.label()}</span></td>
            <td>{org.location.as_str()}</td>
            <td>{org.head.as_str()}</td>
            <td>{status_badge(org.status)}</td>
            <td class=css::alignRight>
                <button class=format!("{} {} {}", css::button, css::ghost, css::iconButton) title="Actions">
                    <Icon icon=ic::ELLIPSIS />
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn Orgs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let list = RwSignal::new(ListState::new(OrgFilter::default(), DEFAULT_PAGE_SIZE));
    let show_filters = RwSignal::new(false);

    let total = Memo::new(move |_| list.with(|l| l.view(mock_orgs()).total));
    let page = Signal::derive(move || list.with(|l| l.pager().page()));
    let total_pages = Signal::derive(move || list.with(|l| l.pager().total_pages(total.get())));

    let go_to = move |page: usize| {
        list.update(|l| {
            if let Err(e) = l.go_to(page, mock_orgs()) {
                tracing::debug!(error = %e, "page change ignored");
            }
        });
    };

    let add_org = move |_: ev::MouseEvent| {
        let toast = NewToast::new("Opening registration form for new organization.");
        ctx.add_toast(toast.with_title("Org Management"));
    };

    let rows = move || {
        list.with(|l| {
            let view = l.view(mock_orgs());
            if view.page_rows.is_empty() {
                view! {
                    <tr>
                        <td colspan="6" class=css::emptyRow>"No organizations matching your criteria."</td>
                    </tr>
                }
                .into_any()
            } else {
                view.page_rows
                    .into_iter()
                    .map(org_row)
                    .collect_view()
                    .into_any()
            }
        })
    };

    let caption = move || {
        let (from, to, total) = list.with(|l| l.pager().showing(total.get()));
        format!("Showing {} - {} of {}", from, to, total)
    };

    let filter_panel = move || {
        view! {
            <div class=css::filterPanel>
                <label class=css::field>
                    <span class=css::smallLabel>"Type"</span>
                    <select
                        class=css::select
                        prop:value=move || list.with(|l| l.filter().org_type.map_or(ALL, |t| t.label()))
                        on:change=move |ev| {
                            let org_type = OrgType::from_label(&event_target_value(&ev));
                            list.update(|l| l.update_filter(|f| f.org_type = org_type));
                        }
                    >
                        <option value=ALL>"All Types"</option>
                        {OrgType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.label()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class=css::field>
                    <span class=css::smallLabel>"Status"</span>
                    <select
                        class=css::select
                        prop:value=move || list.with(|l| l.filter().status.map_or(ALL, |s| s.as_str()))
                        on:change=move |ev| {
                            let status = UserStatus::from_label(&event_target_value(&ev));
                            list.update(|l| l.update_filter(|f| f.status = status));
                        }
                    >
                        <option value=ALL>"All Status"</option>
                        {UserStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class=css::field>
                    <span class=css::smallLabel>"Location"</span>
                    <input
                        class=css::input
                        placeholder="Filter by city/state..."
                        prop:value=move || list.with(|l| l.filter().location.clone())
                        on:input=move |ev| {
                            let location = event_target_value(&ev);
                            list.update(|l| l.update_filter(|f| f.location = location));
                        }
                    />
                </label>
                <button
                    class=format!("{} {}", css::button, css::ghost)
                    on:click=move |_| list.update(|l| l.update_filter(OrgFilter::reset))
                >
                    <Icon icon=ic::CLOSE />
                    "Reset"
                </button>
            </div>
        }
    };

    view! {
        <div class=css::page>
            <div class=css::header>
                <div>
                    <h2 class=css::title>"Orgs"</h2>
                    <p class=css::subtitle>"Monitor and manage organizational partners and clients."</p>
                </div>
                <button class=css::button on:click=add_org>
                    <Icon icon=ic::PLUS />
                    "Add Org"
                </button>
            </div>

            <div class=css::card>
                <div class=css::cardHeader>
                    <div class=css::toolbar>
                        <div class=css::searchBox>
                            <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                            <input
                                class=css::input
                                placeholder="Quick search by name or head..."
                                prop:value=move || list.with(|l| l.filter().search.clone())
                                on:input=move |ev| {
                                    let search = event_target_value(&ev);
                                    list.update(|l| l.update_filter(|f| f.search = search));
                                }
                            />
                        </div>
                        <button
                            class=move || {
                                let base = format!("{} {}", css::button, css::outline);
                                if show_filters.get() { format!("{} {}", base, css::pressed) } else { base }
                            }
                            on:click=move |_| show_filters.update(|s| *s = !*s)
                        >
                            <Icon icon=ic::FILTERS />
                            <span>"Filters"</span>
                            {move || {
                                let chevron = if show_filters.get() { ic::CHEVRON_UP } else { ic::CHEVRON_DOWN };
                                view! { <Icon icon=chevron /> }
                            }}
                        </button>
                    </div>
                    <Show when=move || show_filters.get()>{filter_panel}</Show>
                </div>

                <div class=css::cardContent>
                    <table class=css::table>
                        <thead>
                            <tr>
                                <th>"Org Name"</th>
                                <th>"Type"</th>
                                <th>"Location"</th>
                                <th>"Head of Dept"</th>
                                <th>"Status"</th>
                                <th class=css::alignRight>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>

                <div class=css::cardFooter>
                    <div class=css::footerInfo>
                        <label class=css::inline>
                            <span>"Show"</span>
                            <select
                                class=format!("{} {}", css::select, css::compact)
                                prop:value=move || list.with(|l| l.pager().page_size().to_string())
                                on:change=move |ev| {
                                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                        list.update(|l| l.set_page_size(size));
                                    }
                                }
                            >
                                {ORG_PAGE_SIZES
                                    .iter()
                                    .map(|size| view! { <option value=size.to_string()>{*size}</option> })
                                    .collect_view()}
                            </select>
                            <span>"per page"</span>
                        </label>
                        <span class=css::muted>{caption}</span>
                    </div>
                    <Pager page=page total_pages=total_pages on_change=go_to />
                </div>
            </div>
        </div>
    }
}
