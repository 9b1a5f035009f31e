//! Hash-based application routes.
//!
//! URL format: `#/path/to/page` (e.g. `#/management/users`). The login
//! screen lives at `#/login`; every other hash is an in-app path that is
//! resolved against the navigation tree.

/// Login destination path.
pub const LOGIN_PATH: &str = "/login";

/// Application routes for hash-based navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Guest-only sign-in screen: `#/login`
    Login,
    /// Any path rendered inside the dashboard layout: `#/`, `#/system/settings`, ...
    App {
        /// Absolute path, always starting with `/`, no trailing slash except root.
        path: String,
    },
}

impl AppRoute {
    /// Dashboard root (`#/`).
    pub fn root() -> Self {
        Self::App {
            path: "/".to_string(),
        }
    }

    /// Route for an absolute in-app path.
    pub fn app(path: &str) -> Self {
        let path = normalize_path(path);
        if path == LOGIN_PATH {
            Self::Login
        } else {
            Self::App { path }
        }
    }

    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        Self::app(hash.trim_start_matches('#'))
    }

    /// Convert route to URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Path without the hash prefix.
    pub fn path(&self) -> &str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::App { path } => path,
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route, adding a history entry.
    ///
    /// Fires `hashchange`, which the router listens to.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }

    /// Navigate to this route without a new history entry.
    ///
    /// `replaceState` does not fire `hashchange`, so callers must also
    /// update the router signal themselves.
    pub fn replace(&self) {
        crate::utils::dom::replace_hash(&self.to_hash());
    }
}

/// Normalize a raw path: leading `/`, no trailing `/`, no empty segments.
pub fn normalize_path(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
