//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Mock directory data is loaded at compile time using `include_str!`.

use std::sync::LazyLock;

use crate::models::{IconId, OrgRecord, Page, RouteNode, UserRecord};

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Mock user directory (JSON array of [`UserRecord`]).
const USERS_JSON: &str = include_str!("../assets/data/users.json");

/// Mock organization directory (JSON array of [`OrgRecord`]).
const ORGS_JSON: &str = include_str!("../assets/data/orgs.json");

static MOCK_USERS: LazyLock<Vec<UserRecord>> = LazyLock::new(|| parse_asset("users", USERS_JSON));

static MOCK_ORGS: LazyLock<Vec<OrgRecord>> = LazyLock::new(|| parse_asset("orgs", ORGS_JSON));

fn parse_asset<T: serde::de::DeserializeOwned>(name: &str, json: &str) -> Vec<T> {
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::error!(asset = name, error = %e, "failed to parse bundled data");
        Vec::new()
    })
}

/// Users listed on the user management page.
pub fn mock_users() -> &'static [UserRecord] {
    &MOCK_USERS
}

/// Organizations listed on the organization page.
pub fn mock_orgs() -> &'static [OrgRecord] {
    &MOCK_ORGS
}

// =============================================================================
// Application Metadata
// =============================================================================

/// Product name shown in the sidebar header.
pub const APP_NAME: &str = "Acme Corp";

/// Credentials prefilled on the login form.
pub const DEMO_EMAIL: &str = "admin@example.com";
pub const DEMO_PASSWORD: &str = "password";

// =============================================================================
// Timing (milliseconds)
// =============================================================================

/// Lifetime of a toast before it is removed automatically.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Simulated latency of the login request.
pub const LOGIN_DELAY_MS: u32 = 800;

/// Delay before focusing the search input, so the open transition starts first.
pub const SEARCH_FOCUS_DELAY_MS: u32 = 50;

/// Delay before a hover-revealed submenu closes after the pointer leaves.
pub const SUBMENU_CLOSE_DELAY_MS: u32 = 300;

// =============================================================================
// Network Configuration
// =============================================================================

/// Base path prepended to every API request.
pub const API_BASE_URL: &str = "/api";

/// API request timeout.
pub const API_TIMEOUT_MS: u32 = 10000;

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "token";

// =============================================================================
// List Pages
// =============================================================================

/// Pagination defaults.
pub mod paging {
    /// Initial rows per page.
    pub const DEFAULT_PAGE_SIZE: usize = 10;
    /// Page-size choices on the user list.
    pub const USER_PAGE_SIZES: &[usize] = &[10, 20, 50, 100];
    /// Page-size choices on the organization list.
    pub const ORG_PAGE_SIZES: &[usize] = &[10, 25, 50, 100];
    /// Above this many pages the pager collapses gaps into ellipses.
    pub const MAX_VISIBLE_PAGES: usize = 5;
}

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: tracing::Level = if cfg!(debug_assertions) {
    tracing::Level::DEBUG
} else {
    tracing::Level::INFO
};

// =============================================================================
// Navigation
// =============================================================================

static NAV_ROUTES: LazyLock<Vec<RouteNode>> = LazyLock::new(build_nav_routes);

/// Navigation tree shared by the sidebar, router, breadcrumbs and search.
///
/// Built once on first access and immutable afterwards.
pub fn nav_routes() -> &'static [RouteNode] {
    &NAV_ROUTES
}

fn build_nav_routes() -> Vec<RouteNode> {
    vec![
        RouteNode::page("/", "Dashboard", Page::Dashboard)
            .with_icon(IconId::Dashboard)
            .with_description("Overview of your application state and metrics."),
        RouteNode::group(
            "/management",
            "Management",
            vec![
                RouteNode::page("/management/users", "User List", Page::Users)
                    .with_icon(IconId::Circle)
                    .with_description("Manage user access and permissions."),
                RouteNode::page("/management/orgs", "Organizations", Page::Orgs)
                    .with_icon(IconId::Building)
                    .with_description("Search and filter registered organizations."),
                RouteNode::page("/management/groups", "User Groups", Page::NotFound)
                    .with_icon(IconId::Circle),
            ],
        )
        .with_icon(IconId::Users),
        RouteNode::group(
            "/system",
            "System",
            vec![
                RouteNode::page("/system/settings", "General Settings", Page::Settings)
                    .with_icon(IconId::Circle)
                    .with_description("Manage your account settings and preferences."),
                RouteNode::page("/system/security", "Security", Page::NotFound)
                    .with_icon(IconId::Circle),
            ],
        )
        .with_icon(IconId::Settings),
    ]
}
