//! Dashboard: headline metrics and the shared counter.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::app::AppContext;
use crate::components::icons as ic;

struct Stat {
    title: &'static str,
    value: &'static str,
    change: &'static str,
    icon: icondata::Icon,
}

const STATS: [Stat; 3] = [
    Stat {
        title: "Total Revenue",
        value: "$45,231.89",
        change: "+20.1% from last month",
        icon: ic::REVENUE,
    },
    Stat {
        title: "Active Users",
        value: "+2350",
        change: "+180.1% from last month",
        icon: ic::USERS,
    },
    Stat {
        title: "Active Sessions",
        value: "+12,234",
        change: "+19% from last month",
        icon: ic::ACTIVITY,
    },
];

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let count = Memo::new(move |_| ctx.store.with(|s| s.counter));

    view! {
        <div class=css::page>
            <div>
                <h2 class=css::title>"Dashboard"</h2>
                <p class=css::subtitle>"Overview of your application state and metrics."</p>
            </div>

            <div class=css::stats>
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class=css::card>
                                <div class=css::statHeader>
                                    <span>{stat.title}</span>
                                    <Icon icon=stat.icon />
                                </div>
                                <div class=css::cardContent>
                                    <div class=css::statValue>{stat.value}</div>
                                    <p class=css::small>{stat.change}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class=format!("{} {}", css::card, css::counterCard)>
                <div class=css::cardHeader>
                    <h3 class=css::cardTitle>"Shared State Demo"</h3>
                    <p class=css::cardDescription>
                        "Manage global state effortlessly. Current count is shared across the app."
                    </p>
                </div>
                <div class=css::counter>{move || count.get()}</div>
                <div class=css::cardFooter>
                    <button
                        class=format!("{} {}", css::button, css::outline)
                        on:click=move |_| ctx.reset_counter()
                    >
                        <Icon icon=ic::RESET />
                        "Reset"
                    </button>
                    <div class=css::inline>
                        <button
                            class=format!("{} {}", css::button, css::secondary)
                            disabled=move || count.get() == 0
                            on:click=move |_| ctx.decrement()
                        >
                            <Icon icon=ic::MINUS />
                            "Decrease"
                        </button>
                        <button class=css::button on:click=move |_| ctx.increment()>
                            <Icon icon=ic::PLUS />
                            "Increase"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
