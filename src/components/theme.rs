//! Theme controller.
//!
//! Applies the stored preference to the `<html>` element: the `light` /
//! `dark` class and the accent colour custom properties. `System` follows
//! `prefers-color-scheme` and updates live when the OS setting changes.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::models::{AccentColor, Appearance};
use crate::utils::dom;

const ACCENT_PROPERTIES: [&str; 3] = ["--primary", "--primary-foreground", "--ring"];

/// Renders nothing; keeps the document root in sync with the theme.
#[component]
pub fn ThemeController() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let prefers_dark = use_media_query("(prefers-color-scheme: dark)");
    let mode = Memo::new(move |_| ctx.store.with(|s| s.theme.mode));
    let accent = Memo::new(move |_| ctx.store.with(|s| s.theme.accent));

    Effect::new(move || {
        let appearance = mode.get().resolve(prefers_dark.get());
        let all = [
            Appearance::Light.class_name(),
            Appearance::Dark.class_name(),
        ];
        dom::set_root_appearance(appearance.class_name(), &all);
    });

    Effect::new(move || apply_accent(accent.get()));
}

fn apply_accent(accent: AccentColor) {
    match accent.css_overrides() {
        Some(overrides) => {
            for (name, value) in overrides {
                dom::set_root_property(name, Some(value));
            }
        }
        // Zinc is the stylesheet default.
        None => {
            for name in ACCENT_PROPERTIES {
                dom::set_root_property(name, None);
            }
        }
    }
}
