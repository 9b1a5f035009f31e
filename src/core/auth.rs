//! Route protection and login form checks.
//!
//! Two session states exist, Guest and Authenticated. Every dashboard route
//! requires Authenticated; the login route is guest-only.

use crate::core::error::LoginError;
use crate::models::AppRoute;

/// What the router should do with a requested route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(AppRoute),
}

/// Decide whether `route` may render for the current session.
pub fn guard(route: &AppRoute, authenticated: bool) -> GuardDecision {
    match (route, authenticated) {
        (AppRoute::Login, true) => GuardDecision::Redirect(AppRoute::root()),
        (AppRoute::App { .. }, false) => GuardDecision::Redirect(AppRoute::Login),
        _ => GuardDecision::Render,
    }
}

/// Trivial form check: both fields must be non-blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), LoginError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_is_sent_to_login() {
        let route = AppRoute::app("/management/users");
        assert_eq!(
            guard(&route, false),
            GuardDecision::Redirect(AppRoute::Login)
        );
        assert_eq!(
            guard(&AppRoute::root(), false),
            GuardDecision::Redirect(AppRoute::Login)
        );
        assert_eq!(guard(&AppRoute::Login, false), GuardDecision::Render);
    }

    #[test]
    fn test_authenticated_skips_login() {
        assert_eq!(
            guard(&AppRoute::Login, true),
            GuardDecision::Redirect(AppRoute::root())
        );
        assert_eq!(
            guard(&AppRoute::app("/anything"), true),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("admin@example.com", "password").is_ok());
        assert_eq!(
            validate_credentials("", "password"),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(
            validate_credentials("   ", "password"),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(
            validate_credentials("admin@example.com", ""),
            Err(LoginError::MissingCredentials)
        );
    }
}
