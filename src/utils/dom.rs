//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper degrades
//! to a no-op (or `None`) outside a browser.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// The `<html>` element, target of theme classes and CSS variables.
pub fn document_root() -> Option<HtmlElement> {
    document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Smoothly scroll `element` into view, moving as little as possible.
pub fn scroll_into_view_nearest(element: &Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Replace the root element's appearance class (`light` / `dark`).
pub fn set_root_appearance(class_name: &str, all: &[&str]) {
    let Some(root) = document_root() else {
        return;
    };
    let classes = root.class_list();
    for name in all {
        let _ = classes.remove_1(name);
    }
    if let Err(e) = classes.add_1(class_name) {
        tracing::warn!(?e, class_name, "failed to set root class");
    }
}

/// Set (or with `None`, clear) a CSS custom property on the root element.
pub fn set_root_property(name: &str, value: Option<&str>) {
    let Some(root) = document_root() else {
        return;
    };
    let style = root.style();
    let result = match value {
        Some(value) => style.set_property(name, value),
        None => style.remove_property(name).map(|_| ()),
    };
    if let Err(e) = result {
        tracing::warn!(?e, name, "failed to update root style");
    }
}

/// Whether `target` lies inside `container` (or is it).
pub fn contains_target(container: &Element, target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window()
        && let Err(e) = window.location().set_hash(hash)
    {
        tracing::warn!(?e, hash, "failed to set location hash");
    }
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix. `replaceState` does not fire
/// `hashchange`, so callers update their route signal themselves.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
        && let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash))
    {
        tracing::warn!(?e, hash, "failed to replace history state");
    }
}

/// Reload the page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
