//! User directory: free-text search over a paginated table.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::css;
use crate::app::AppContext;
use crate::components::Pager;
use crate::components::icons as ic;
use crate::config::mock_users;
use crate::config::paging::{DEFAULT_PAGE_SIZE, USER_PAGE_SIZES};
use crate::core::{ListState, UserFilter};
use crate::models::{NewToast, UserRecord, UserStatus};

/// Active/Inactive pill.
pub(super) fn status_badge(status: UserStatus) -> impl IntoView {
    let class = match status {
        UserStatus::Active => format!("{} {}", css::badge, css::badgeActive),
        UserStatus::Inactive => format!("{} {}", css::badge, css::badgeInactive),
    };
    view! { <span class=class>{status.as_str()}</span> }
}

fn user_row(user: &'static UserRecord) -> impl IntoView {
    let initial: String = user.name.chars().take(1).collect();
    view! {
        <tr>
            <td><span class=css::avatar>{initial}</span></td>
            <td>
                <div class=css::stack>
                    <span class=css::strong>{user.name.as_str()}</span>
                    <span class=css::small>{user.email.as_str()}</span>
                </div>
            </td>
            <td>{user.role.as_str()}</td>
            <td>{status_badge(user.status)}</td>
            <td class=css::alignRight>
                <button class=format!("{} {} {}", css::button, css::ghost, css::iconButton) title="Actions">
                    <Icon icon=ic::ELLIPSIS />
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn Users() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let list = RwSignal::new(ListState::new(UserFilter::default(), DEFAULT_PAGE_SIZE));

    let total = Memo::new(move |_| list.with(|l| l.view(mock_users()).total));
    let page = Signal::derive(move || list.with(|l| l.pager().page()));
    let total_pages = Signal::derive(move || list.with(|l| l.pager().total_pages(total.get())));

    let go_to = move |page: usize| {
        list.update(|l| {
            if let Err(e) = l.go_to(page, mock_users()) {
                tracing::debug!(error = %e, "page change ignored");
            }
        });
    };

    let add_user = move |_: ev::MouseEvent| {
        let toast = NewToast::new("Add user modal would open here.");
        ctx.add_toast(toast.with_title("Action Simulated"));
    };

    let rows = move || {
        list.with(|l| {
            let view = l.view(mock_users());
            if view.page_rows.is_empty() {
                view! {
                    <tr><td colspan="5" class=css::emptyRow>"No results found."</td></tr>
                }
                .into_any()
            } else {
                view.page_rows
                    .into_iter()
                    .map(user_row)
                    .collect_view()
                    .into_any()
            }
        })
    };

    let caption = move || {
        let (from, to, total) = list.with(|l| l.pager().showing(total.get()));
        format!("Showing {} to {} of {} entries", from, to, total)
    };

    view! {
        <div class=css::page>
            <div class=css::header>
                <div>
                    <h2 class=css::title>"Users"</h2>
                    <p class=css::subtitle>"Manage user access and permissions."</p>
                </div>
                <button class=css::button on:click=add_user>
                    <Icon icon=ic::PLUS />
                    "Add User"
                </button>
            </div>

            <div class=css::card>
                <div class=css::cardHeader>
                    <h3 class=css::cardTitle>"All Users"</h3>
                    <p class=css::cardDescription>"A list of all users in your organization."</p>
                    <div class=css::searchBox>
                        <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                        <input
                            class=css::input
                            placeholder="Search users..."
                            prop:value=move || list.with(|l| l.filter().search.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                list.update(|l| l.update_filter(|f| f.search = value));
                            }
                        />
                    </div>
                </div>

                <div class=css::cardContent>
                    <table class=css::table>
                        <thead>
                            <tr>
                                <th>"Avatar"</th>
                                <th>"Name"</th>
                                <th>"Role"</th>
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
                            <span>"Rows per page:"</span>
                            <select
                                class=format!("{} {}", css::select, css::compact)
                                prop:value=move || list.with(|l| l.pager().page_size().to_string())
                                on:change=move |ev| {
                                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                        list.update(|l| l.set_page_size(size));
                                    }
                                }
                            >
                                {USER_PAGE_SIZES
                                    .iter()
                                    .map(|size| view! { <option value=size.to_string()>{*size}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <span>{caption}</span>
                    </div>
                    <Pager page=page total_pages=total_pages on_change=go_to />
                </div>
            </div>
        </div>
    }
}
