//! Sidebar navigation.
//!
//! Renders the route table as a menu. Groups expand inline while the
//! sidebar is wide; while it is collapsed to icons, hovering a group shows a
//! floating submenu that closes shortly after the pointer leaves. The bottom
//! of the sidebar holds the appearance picker and the user menu.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::search::SearchTrigger;
use crate::config::{APP_NAME, SUBMENU_CLOSE_DELAY_MS, nav_routes};
use crate::core::menu::{MenuState, is_active, is_active_group};
use crate::models::{AccentColor, AppRoute, RouteNode, ThemeMode};
use crate::utils::{TimerSlot, dom};

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

fn classes(base: &str, extra: &str, on: bool) -> String {
    if on {
        format!("{} {}", base, extra)
    } else {
        base.to_string()
    }
}

fn href(node: &RouteNode) -> String {
    AppRoute::app(node.path).to_hash()
}

/// Left-hand navigation column.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let collapsed = Memo::new(move |_| ctx.store.with(|s| s.sidebar_collapsed));
    let path = Memo::new(move |_| ctx.route.with(|r| r.path().to_string()));
    let menu = RwSignal::new(MenuState::new());
    let hovered = RwSignal::new(None::<&'static str>);
    let hover_timer = TimerSlot::new();
    on_cleanup(move || hover_timer.cancel());

    // Expand the group holding the current page.
    Effect::new(move || {
        let path = path.get();
        let collapsed = collapsed.get();
        let mut state = menu.get_untracked();
        if state.reveal_active(nav_routes(), &path, collapsed) {
            menu.set(state);
        }
    });

    let hover = HoverMenu {
        hovered,
        timer: hover_timer,
        collapsed,
    };

    view! {
        <aside class=move || classes(css::sidebar, css::collapsed, collapsed.get())>
            <div class=css::brand>
                <div class=css::logo><div class=css::logoDot></div></div>
                <Show when=move || !collapsed.get()>
                    <span class=css::brandName>{APP_NAME}</span>
                </Show>
            </div>

            <div class=css::search>
                <SearchTrigger collapsed=collapsed />
            </div>

            <nav class=css::nav>
                {nav_routes()
                    .iter()
                    .map(|node| {
                        if node.is_group() {
                            view! { <NavGroup node=node menu=menu hover=hover path=path /> }.into_any()
                        } else {
                            view! { <NavLink node=node collapsed=collapsed path=path /> }.into_any()
                        }
                    })
                    .collect_view()}
            </nav>

            <AppearanceMenu collapsed=collapsed />
            <UserMenu collapsed=collapsed />
        </aside>
    }
}

/// Hover state for floating submenus of the collapsed sidebar.
#[derive(Clone, Copy)]
struct HoverMenu {
    hovered: RwSignal<Option<&'static str>>,
    timer: TimerSlot,
    collapsed: Memo<bool>,
}

impl HoverMenu {
    fn enter(&self, label: &'static str) {
        self.timer.cancel();
        if self.collapsed.get_untracked() {
            self.hovered.set(Some(label));
        }
    }

    fn leave(&self) {
        let hovered = self.hovered;
        self.timer
            .schedule(SUBMENU_CLOSE_DELAY_MS, move || hovered.set(None));
    }

    fn close(&self) {
        self.timer.cancel();
        self.hovered.set(None);
    }

    fn is_open(&self, label: &'static str) -> bool {
        self.collapsed.get() && self.hovered.get() == Some(label)
    }
}

/// Top-level page link.
#[component]
fn NavLink(node: &'static RouteNode, collapsed: Memo<bool>, path: Memo<String>) -> impl IntoView {
    let active = Memo::new(move |_| is_active(node, &path.get()));
    let icon = ic::nav_icon(node.icon.unwrap_or_default());

    view! {
        <a
            href=href(node)
            class=move || classes(css::item, css::itemActive, active.get())
            title=move || collapsed.get().then_some(node.label)
        >
            <span class=css::itemIcon><Icon icon=icon /></span>
            <Show when=move || !collapsed.get()>
                <span class=css::itemLabel>{node.label}</span>
            </Show>
        </a>
    }
}

/// Group with an inline (wide) or floating (collapsed) submenu.
#[component]
fn NavGroup(
    node: &'static RouteNode,
    menu: RwSignal<MenuState>,
    hover: HoverMenu,
    path: Memo<String>,
) -> impl IntoView {
    let collapsed = hover.collapsed;
    let active = Memo::new(move |_| is_active_group(node, &path.get()));
    let expanded = Memo::new(move |_| menu.with(|m| m.is_expanded(node.label, collapsed.get())));
    let icon = ic::nav_icon(node.icon.unwrap_or_default());

    let children = move |floating: bool| {
        node.children
            .iter()
            .map(|child| {
                let child_active = Memo::new(move |_| is_active(child, &path.get()));
                let child_icon = ic::nav_icon(child.icon.unwrap_or_default());
                if floating {
                    view! {
                        <a
                            href=href(child)
                            class=move || classes(css::floatingItem, css::floatingItemActive, child_active.get())
                            on:click=move |_| hover.close()
                        >
                            <span class=css::itemLabel>{child.label}</span>
                            <Show when=move || child_active.get()>
                                <span class=css::check><Icon icon=ic::CHECK /></span>
                            </Show>
                        </a>
                    }
                    .into_any()
                } else {
                    view! {
                        <a
                            href=href(child)
                            class=move || classes(css::subItem, css::subItemActive, child_active.get())
                        >
                            <span class=css::subIcon><Icon icon=child_icon /></span>
                            {child.label}
                        </a>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <div
            class=css::group
            on:mouseenter=move |_| hover.enter(node.label)
            on:mouseleave=move |_| hover.leave()
        >
            <button
                class=move || classes(css::item, css::itemActive, active.get())
                title=move || collapsed.get().then_some(node.label)
                on:click=move |_| menu.update(|m| m.toggle(node.label, collapsed.get_untracked()))
            >
                <span class=css::itemIcon><Icon icon=icon /></span>
                <Show when=move || !collapsed.get()>
                    <span class=css::itemLabel>{node.label}</span>
                    <span class=css::chevron>
                        {move || {
                            let chevron = if expanded.get() { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT };
                            view! { <Icon icon=chevron /> }
                        }}
                    </span>
                </Show>
            </button>

            <Show when=move || expanded.get()>
                <div class=css::submenu>{children(false)}</div>
            </Show>

            <Show when=move || hover.is_open(node.label)>
                <div class=css::floating>
                    <div class=css::floatingTitle>{node.label}</div>
                    <div class=css::floatingList>{children(true)}</div>
                </div>
            </Show>
        </div>
    }
}

/// Closes `open` when a mousedown lands outside `container`.
fn close_on_outside_click(container: NodeRef<leptos::html::Div>, open: RwSignal<bool>) {
    let handle = window_event_listener(ev::mousedown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        if let Some(el) = container.get_untracked()
            && !dom::contains_target(&el, ev.target())
        {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());
}

/// Theme mode and accent colour picker.
#[component]
fn AppearanceMenu(collapsed: Memo<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let open = RwSignal::new(false);
    let container = NodeRef::<leptos::html::Div>::new();
    close_on_outside_click(container, open);

    let mode = Memo::new(move |_| ctx.store.with(|s| s.theme.mode));
    let accent = Memo::new(move |_| ctx.store.with(|s| s.theme.accent));

    let mode_buttons = move || {
        ThemeMode::ALL
            .into_iter()
            .map(|m| {
                let icon = match m {
                    ThemeMode::Light => ic::LIGHT,
                    ThemeMode::Dark => ic::DARK,
                    ThemeMode::System => ic::SYSTEM,
                };
                view! {
                    <button
                        class=move || classes(css::modeButton, css::modeButtonActive, mode.get() == m)
                        title=m.label()
                        on:click=move |_| ctx.set_theme(m)
                    >
                        <Icon icon=icon />
                    </button>
                }
            })
            .collect_view()
    };

    let swatches = move || {
        AccentColor::ALL
            .into_iter()
            .map(|c| {
                view! {
                    <button
                        class=move || classes(css::swatch, css::swatchActive, accent.get() == c)
                        title=c.name()
                        on:click=move |_| ctx.set_theme_color(c)
                    >
                        <span class=css::swatchFill style=format!("background-color: {}", c.swatch())></span>
                        <Show when=move || accent.get() == c>
                            <span class=css::swatchCheck><Icon icon=ic::CHECK /></span>
                        </Show>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class=css::footerSection node_ref=container>
            <div class=css::anchor>
                <Show when=move || open.get()>
                    <div class=move || classes(css::popover, css::popoverSide, collapsed.get())>
                        <label class=css::popoverLabel>"Theme"</label>
                        <div class=css::modeGroup>{mode_buttons()}</div>
                        <label class=css::popoverLabel>"Accent Color"</label>
                        <div class=css::swatches>{swatches()}</div>
                    </div>
                </Show>
                <button
                    class=move || classes(css::item, css::itemActive, open.get())
                    title=move || collapsed.get().then_some("Appearance")
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    <span class=css::itemIcon><Icon icon=ic::PALETTE /></span>
                    <Show when=move || !collapsed.get()>
                        <span class=css::itemLabel>"Appearance"</span>
                    </Show>
                </button>
            </div>
        </div>
    }
}

/// Current user with a log-out action.
#[component]
fn UserMenu(collapsed: Memo<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let open = RwSignal::new(false);
    let container = NodeRef::<leptos::html::Div>::new();
    close_on_outside_click(container, open);

    let name = Memo::new(move |_| ctx.store.with(|s| s.session.display_name()));
    let email = Memo::new(move |_| ctx.store.with(|s| s.session.display_email()));
    let initial = Memo::new(move |_| {
        ctx.store.with(|s| {
            s.session
                .current_user()
                .map(|u| u.initial())
                .unwrap_or_else(|| "U".to_string())
        })
    });

    let logout = move |_: ev::MouseEvent| {
        open.set(false);
        ctx.logout();
    };

    view! {
        <div class=css::userSection node_ref=container>
            <Show when=move || open.get()>
                <div class=move || classes(css::userPopover, css::popoverSide, collapsed.get())>
                    <button class=css::logout on:click=logout>
                        <Icon icon=ic::LOG_OUT />
                        <span>"Log out"</span>
                    </button>
                </div>
            </Show>
            <button
                class=move || classes(css::userButton, css::itemActive, open.get())
                title=move || collapsed.get().then(|| name.get())
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class=css::avatar>{move || initial.get()}</span>
                <Show when=move || !collapsed.get()>
                    <span class=css::userText>
                        <span class=css::userName>{move || name.get()}</span>
                        <span class=css::userEmail>{move || email.get()}</span>
                    </span>
                    <span class=css::chevron><Icon icon=ic::CHEVRONS_UP_DOWN /></span>
                </Show>
            </button>
        </div>
    }
}
