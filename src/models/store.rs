//! Global application state and its transitions.
//!
//! [`AppState`] is the single owner of session, chrome flags, toasts and
//! theme. Every mutation goes through a named method so that one reactive
//! update always moves the state from one consistent value to the next.

use super::session::{Session, User, UserPatch};
use super::theme::{AccentColor, ThemeMode, ThemePreference};
use super::toast::{NewToast, ToastId, ToastQueue};

/// Global application state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: Session,
    pub sidebar_collapsed: bool,
    pub toasts: ToastQueue,
    pub theme: ThemePreference,
    /// Shared counter shown on the dashboard.
    pub counter: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Auth ---------------------------------------------------------------

    /// Sign in with a synthesized user. No credential verification occurs.
    pub fn login(&mut self, email: &str) {
        self.session = Session::Authenticated {
            user: User::from_email(email),
        };
    }

    /// Sign out, dropping the user record with the flag.
    pub fn logout(&mut self) {
        self.session = Session::Guest;
    }

    /// Merge `patch` into the current user. No-op for guests.
    pub fn update_user(&mut self, patch: UserPatch) {
        if let Session::Authenticated { user } = &mut self.session {
            user.apply(patch);
        }
    }

    // --- Toasts -------------------------------------------------------------

    pub fn add_toast(&mut self, toast: NewToast, now_ms: f64, ttl_ms: u32) -> ToastId {
        self.toasts.push(toast, now_ms, ttl_ms)
    }

    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    pub fn expire_toasts(&mut self, now_ms: f64) -> Vec<ToastId> {
        self.toasts.expire(now_ms)
    }

    // --- Chrome & theme -----------------------------------------------------

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme.mode = mode;
    }

    pub fn set_theme_color(&mut self, accent: AccentColor) {
        self.theme.accent = accent;
    }

    // --- Counter ------------------------------------------------------------

    pub fn increment(&mut self) {
        self.counter = self.counter.saturating_add(1);
    }

    /// Decrease the counter; it never goes below zero.
    pub fn decrement(&mut self) {
        self.counter = self.counter.saturating_sub(1);
    }

    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::UserStatus;

    const TTL: u32 = 3000;

    #[test]
    fn test_login_logout() {
        let mut state = AppState::new();
        assert!(!state.session.is_authenticated());

        state.login("admin@example.com");
        assert!(state.session.is_authenticated());
        assert_eq!(
            state.session.current_user().map(|u| u.email.as_str()),
            Some("admin@example.com")
        );

        state.logout();
        assert!(!state.session.is_authenticated());
        assert!(state.session.current_user().is_none());
    }

    #[test]
    fn test_logout_is_single_transition() {
        let mut state = AppState::new();
        state.login("a@b.c");
        let before = state.clone();
        state.logout();
        // Only the session changed, and it changed as a whole.
        assert_eq!(state.session, Session::Guest);
        assert_eq!(state.toasts, before.toasts);
        assert_eq!(state.theme, before.theme);
    }

    #[test]
    fn test_update_user() {
        let mut state = AppState::new();
        state.update_user(UserPatch {
            name: Some("Nobody".to_string()),
            ..Default::default()
        });
        assert_eq!(state.session, Session::Guest);

        state.login("a@b.c");
        state.update_user(UserPatch {
            name: Some("Ada".to_string()),
            status: Some(UserStatus::Inactive),
            ..Default::default()
        });
        let user = state.session.current_user().unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "a@b.c");
        assert_eq!(user.status, UserStatus::Inactive);
    }

    #[test]
    fn test_toast_dismissed_before_expiry() {
        let mut state = AppState::new();
        let id = state.add_toast(NewToast::new("x"), 0.0, TTL);
        assert!(state.dismiss_toast(id));
        assert!(state.toasts.is_empty());
        // The expiry firing later is a no-op.
        assert!(state.expire_toasts(3000.0).is_empty());
        assert!(!state.dismiss_toast(id));
    }

    #[test]
    fn test_toast_expires_without_dismissal() {
        let mut state = AppState::new();
        let id = state.add_toast(NewToast::new("x"), 100.0, TTL);
        assert!(state.expire_toasts(3099.0).is_empty());
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.expire_toasts(3100.0), vec![id]);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_chrome_and_theme() {
        let mut state = AppState::new();
        state.toggle_sidebar();
        assert!(state.sidebar_collapsed);
        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed);

        state.set_theme(ThemeMode::Dark);
        state.set_theme_color(AccentColor::Green);
        assert_eq!(state.theme.mode, ThemeMode::Dark);
        assert_eq!(state.theme.accent, AccentColor::Green);
    }

    #[test]
    fn test_counter_floor() {
        let mut state = AppState::new();
        state.decrement();
        assert_eq!(state.counter, 0);
        state.increment();
        state.increment();
        state.decrement();
        assert_eq!(state.counter, 1);
        state.reset_counter();
        assert_eq!(state.counter, 0);
    }
}
