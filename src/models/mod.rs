//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`RouteNode`], [`Page`], [`IconId`] - Static navigation tree
//! - [`AppRoute`] - Hash-based navigation
//! - [`AppState`] - Global store and its transitions
//! - [`Session`], [`User`] - Prototype authentication session
//! - [`ToastQueue`] - Notification queue
//! - [`ThemePreference`] - Colour scheme and accent
//! - [`UserRecord`], [`OrgRecord`] - Directory list rows

mod directory;
mod nav;
mod route;
mod session;
mod store;
mod theme;
mod toast;

pub use directory::{OrgRecord, OrgType, UserRecord};
pub use nav::{IconId, Page, RouteNode};
pub use route::{AppRoute, LOGIN_PATH, normalize_path};
pub use session::{Session, User, UserPatch, UserStatus};
pub use store::AppState;
pub use theme::{AccentColor, Appearance, ThemeMode, ThemePreference};
pub use toast::{NewToast, Toast, ToastId, ToastQueue, ToastVariant};
