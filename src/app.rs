//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! application-level setup following Leptos conventions.

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::{AppRouter, ThemeController, Toaster};
use crate::config::TOAST_DURATION_MS;
use crate::models::{AccentColor, AppRoute, AppState, NewToast, ThemeMode, ToastId, UserPatch};
use crate::utils::{dom, storage};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
///
/// # Architecture
///
/// All global state lives in one [`AppState`] signal. Components never
/// mutate it directly; they call the named transitions below, each of which
/// is a single signal update. The current route is kept beside the store so
/// the chrome (breadcrumbs, sidebar, search) can follow navigation.
///
/// # Note
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session, sidebar, toasts, theme and counter.
    pub store: RwSignal<AppState>,

    /// Route derived from the URL hash.
    pub route: RwSignal<AppRoute>,

    /// One auto-dismiss timer per live toast.
    toast_timers: StoredValue<HashMap<ToastId, Timeout>, LocalStorage>,
}

impl AppContext {
    /// Guest session, expanded sidebar, default theme, route from the URL.
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(AppState::new()),
            route: RwSignal::new(AppRoute::current()),
            toast_timers: StoredValue::new_local(HashMap::new()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(|s| s.session.is_authenticated())
    }

    // --- Session ------------------------------------------------------------

    pub fn login(&self, email: &str) {
        self.store.update(|s| s.login(email));
        tracing::info!(email, "signed in");
    }

    /// Sign out and return to the login screen.
    pub fn logout(&self) {
        self.store.update(|s| s.logout());
        if let Err(e) = storage::clear_auth_token() {
            tracing::warn!(error = %e, "could not clear auth token");
        }
        tracing::info!("signed out");
        self.navigate(&AppRoute::Login);
    }

    pub fn update_user(&self, patch: UserPatch) {
        self.store.update(|s| s.update_user(patch));
    }

    // --- Toasts -------------------------------------------------------------

    /// Queue a toast and schedule its removal after [`TOAST_DURATION_MS`].
    pub fn add_toast(&self, toast: NewToast) -> Option<ToastId> {
        let now = js_sys::Date::now();
        let id = self
            .store
            .try_update(|s| s.add_toast(toast, now, TOAST_DURATION_MS))?;

        let ctx = *self;
        let timer = Timeout::new(TOAST_DURATION_MS, move || ctx.expire_toast(id));
        self.toast_timers.update_value(|timers| {
            timers.insert(id, timer);
        });
        Some(id)
    }

    /// Remove a toast and cancel its timer. Unknown ids are ignored.
    pub fn dismiss_toast(&self, id: ToastId) {
        self.store.update(|s| {
            s.dismiss_toast(id);
        });
        self.toast_timers.update_value(|timers| {
            timers.remove(&id);
        });
    }

    fn expire_toast(&self, id: ToastId) {
        let now = js_sys::Date::now();
        let Some(expired) = self.store.try_update(|s| {
            let mut expired = s.expire_toasts(now);
            if s.dismiss_toast(id) {
                expired.push(id);
            }
            expired
        }) else {
            return;
        };
        self.toast_timers.try_update_value(|timers| {
            for id in &expired {
                timers.remove(id);
            }
        });
    }

    // --- Chrome & theme -----------------------------------------------------

    pub fn toggle_sidebar(&self) {
        self.store.update(|s| s.toggle_sidebar());
    }

    pub fn set_theme(&self, mode: ThemeMode) {
        self.store.update(|s| s.set_theme(mode));
    }

    pub fn set_theme_color(&self, accent: AccentColor) {
        self.store.update(|s| s.set_theme_color(accent));
    }

    // --- Counter ------------------------------------------------------------

    pub fn increment(&self) {
        self.store.update(|s| s.increment());
    }

    pub fn decrement(&self) {
        self.store.update(|s| s.decrement());
    }

    pub fn reset_counter(&self) {
        self.store.update(|s| s.reset_counter());
    }

    // --- Navigation ---------------------------------------------------------

    /// Navigate with a new history entry.
    pub fn navigate(&self, route: &AppRoute) {
        route.push();
        self.route.set(route.clone());
    }

    /// Navigate in place, leaving no history entry behind.
    pub fn redirect(&self, route: &AppRoute) {
        tracing::debug!(
            from = %self.route.with_untracked(|r| r.to_hash()),
            to = %route.to_hash(),
            "redirect"
        );
        route.replace();
        self.route.set(route.clone());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Applies the theme to the document root
/// - Wraps the router in an ErrorBoundary for graceful error handling
/// - Renders the toast viewport above everything else
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ThemeController />
        <ErrorBoundary fallback=|errors| view! {
            <div class=css::errorScreen>
                <div class=css::errorBox>
                    <h1 class=css::errorTitle>"Something went wrong"</h1>
                    <p class=css::errorText>
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <details class=css::details>
                        <summary>"Error details"</summary>
                        <ul class=css::errorList>
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </details>
                    <button class=css::reload on:click=move |_| dom::reload()>
                        "Reload Page"
                    </button>
                </div>
            </div>
        }>
            <AppRouter />
        </ErrorBoundary>
        <Toaster />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn toast_count(ctx: &AppContext) -> usize {
        ctx.store.with_untracked(|s| s.toasts.len())
    }

    fn has_timer(ctx: &AppContext, id: ToastId) -> bool {
        ctx.toast_timers.with_value(|t| t.contains_key(&id))
    }

    #[wasm_bindgen_test]
    async fn test_toast_timer_removes_toast() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new();

        let id = ctx.add_toast(NewToast::new("Saved")).expect("store alive");
        assert_eq!(toast_count(&ctx), 1);
        assert!(has_timer(&ctx, id));

        TimeoutFuture::new(TOAST_DURATION_MS + 200).await;
        assert_eq!(toast_count(&ctx), 0);
        assert!(!has_timer(&ctx, id));
    }

    #[wasm_bindgen_test]
    fn test_dismiss_cancels_expiry_timer() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppContext::new();

        let first = ctx.add_toast(NewToast::new("first")).expect("store alive");
        ctx.dismiss_toast(first);
        assert_eq!(toast_count(&ctx), 0);
        assert!(!has_timer(&ctx, first));

        let second = ctx.add_toast(NewToast::new("second")).expect("store alive");
        // Stale id: ignored, the live toast and its timer stay.
        ctx.dismiss_toast(first);
        assert_eq!(toast_count(&ctx), 1);
        assert!(has_timer(&ctx, second));
    }

    #[wasm_bindgen_test]
    fn test_error_fallback_classes_are_scoped() {
        assert!(css::errorScreen.starts_with("errorScreen-"));
        assert!(css::reload.starts_with("reload-"));
        assert_ne!(css::errorBox, css::errorList);
    }
}
