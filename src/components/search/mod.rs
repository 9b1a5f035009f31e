//! Command search palette.
//!
//! Opened from the sidebar trigger or with Ctrl/Cmd+K anywhere in the
//! dashboard. Arrow keys move the selection (wrapping at both ends), Enter
//! navigates to the selected page and Escape or a backdrop click closes it.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{SEARCH_FOCUS_DELAY_MS, nav_routes};
use crate::core::search::{SearchKey, SearchOutcome, SearchPanel, is_toggle_shortcut};
use crate::models::AppRoute;
use crate::utils::{TimerSlot, dom};

stylance::import_crate_style!(css, "src/components/search/search.module.css");

/// Palette state shared by the trigger and the palette.
#[derive(Clone, Copy)]
pub struct SearchContext(pub RwSignal<SearchPanel>);

impl SearchContext {
    pub fn new() -> Self {
        Self(RwSignal::new(SearchPanel::from_routes(nav_routes())))
    }

    pub fn open(&self) {
        self.0.update(|p| p.open());
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

fn use_search() -> SearchContext {
    use_context::<SearchContext>().expect("SearchContext must be provided by DashboardLayout")
}

fn follow(ctx: AppContext, outcome: SearchOutcome) {
    if let SearchOutcome::Navigate(path) = outcome {
        ctx.navigate(&AppRoute::app(path));
    }
}

/// Sidebar button opening the palette.
#[component]
pub fn SearchTrigger(#[prop(into)] collapsed: Signal<bool>) -> impl IntoView {
    let search = use_search();

    move || {
        if collapsed.get() {
            view! {
                <button
                    class=css::triggerIcon
                    title="Search (Ctrl+K)"
                    on:click=move |_| search.open()
                >
                    <Icon icon=ic::SEARCH />
                </button>
            }
            .into_any()
        } else {
            view! {
                <button class=css::trigger on:click=move |_| search.open()>
                    <Icon icon=ic::SEARCH />
                    <span class=css::triggerLabel>"Quick search..."</span>
                    <kbd class=css::kbd>"⌘K"</kbd>
                </button>
            }
            .into_any()
        }
    }
}

/// Modal palette listing the pages that match the query.
#[component]
pub fn SearchPalette() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let panel = use_search().0;

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let list_ref = NodeRef::<leptos::html::Div>::new();
    let focus_timer = TimerSlot::new();

    // Global shortcut: Ctrl/Cmd+K toggles, Escape closes.
    let handle = window_event_listener(ev::keydown, move |ev| {
        if is_toggle_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
            panel.update(|p| p.toggle());
        } else if ev.key() == "Escape" && panel.with_untracked(|p| p.is_open()) {
            panel.update(|p| p.close());
        }
    });
    on_cleanup(move || {
        handle.remove();
        focus_timer.cancel();
    });

    let is_open = Memo::new(move |_| panel.with(|p| p.is_open()));
    let cursor = Memo::new(move |_| panel.with(|p| p.cursor()));
    let query = Memo::new(move |_| panel.with(|p| p.query().to_string()));
    let results = Memo::new(move |_| {
        panel.with(|p| p.results().into_iter().cloned().collect::<Vec<_>>())
    });

    // Focus the input once the palette has started to open.
    Effect::new(move || {
        if is_open.get() {
            focus_timer.schedule(SEARCH_FOCUS_DELAY_MS, move || {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        } else {
            focus_timer.cancel();
        }
    });

    // Keep the selected row visible.
    Effect::new(move || {
        cursor.track();
        if let Some(list) = list_ref.get()
            && let Ok(Some(selected)) = list.query_selector("[data-selected='true']")
        {
            dom::scroll_into_view_nearest(&selected);
        }
    });

    let on_input = move |ev: ev::Event| {
        let query = event_target_value(&ev);
        panel.update(|p| p.set_query(query));
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let Some(key) = SearchKey::from_key(&ev.key()) else {
            return;
        };
        // Escape is handled by the window listener.
        if key == SearchKey::Escape {
            return;
        }
        ev.prevent_default();
        if let Some(outcome) = panel.try_update(|p| p.handle_key(key)) {
            follow(ctx, outcome);
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class=css::overlay>
                <div class=css::backdrop on:click=move |_| panel.update(|p| p.close())></div>
                <div class=css::modal role="dialog" aria-label="Search">
                    <div class=css::inputRow>
                        <span class=css::inputIcon><Icon icon=ic::SEARCH /></span>
                        <input
                            node_ref=input_ref
                            class=css::input
                            placeholder="Search products, pages and features..."
                            prop:value=move || query.get()
                            on:input=on_input
                            on:keydown=on_keydown
                        />
                        <span class=css::esc>"ESC"</span>
                    </div>

                    <div class=css::results node_ref=list_ref>
                        <Show when=move || query.with(|q| q.is_empty())>
                            <div class=css::sectionLabel>"Recent & Suggestions"</div>
                        </Show>
                        <Show
                            when=move || results.with(|r| !r.is_empty())
                            fallback=move || view! {
                                <div class=css::empty>
                                    <span class=css::emptyIcon><Icon icon=ic::COMMAND /></span>
                                    <p>"No results found for \"" {move || query.get()} "\""</p>
                                </div>
                            }
                        >
                            {move || {
                                results
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, item)| {
                                        let selected = move || cursor.get() == index;
                                        let last = item.breadcrumbs.len().saturating_sub(1);
                                        let trail = item
                                            .breadcrumbs
                                            .iter()
                                            .enumerate()
                                            .map(|(i, label)| {
                                                let sep = (i > 0).then(|| view! { <span class=css::trailSep>"›"</span> });
                                                let class = if i == last { css::trailCurrent } else { css::trailAncestor };
                                                view! { {sep} <span class=class>{*label}</span> }
                                            })
                                            .collect_view();
                                        view! {
                                            <div
                                                class=css::row
                                                data-selected=move || selected().to_string()
                                                on:mouseenter=move |_| panel.update(|p| p.hover(index))
                                                on:click=move |_| {
                                                    if let Some(outcome) = panel.try_update(|p| p.activate(index)) {
                                                        follow(ctx, outcome);
                                                    }
                                                }
                                            >
                                                <span class=css::rowIcon><Icon icon=ic::nav_icon(item.icon) /></span>
                                                <div class=css::rowText>
                                                    <div class=css::trail>{trail}</div>
                                                    {item.description.map(|d| view! { <span class=css::description>{d}</span> })}
                                                </div>
                                                <span class=css::rowEnter><Icon icon=ic::ENTER /></span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </Show>
                    </div>

                    <div class=css::footer>
                        <div class=css::hints>
                            <span class=css::hint>
                                <Icon icon=ic::ARROW_UP />
                                <Icon icon=ic::ARROW_DOWN />
                                "to navigate"
                            </span>
                            <span class=css::hint>
                                <Icon icon=ic::ENTER />
                                "to select"
                            </span>
                        </div>
                        <span class=css::brand>"Acme Search"</span>
                    </div>
                </div>
            </div>
        </Show>
    }
}
