//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and the authentication gate (main entry point)
//! - [`layout`] - Dashboard chrome: sidebar, header, breadcrumbs
//! - [`sidebar`] - Navigation menu, appearance picker and user menu
//! - [`search`] - Command palette
//! - [`pager`] - Page controls for list pages
//! - [`toast`] - Toast stack
//! - [`theme`] - Applies the theme preference to the document root
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod layout;
pub mod pager;
pub mod router;
pub mod search;
pub mod sidebar;
pub mod theme;
pub mod toast;

pub use pager::Pager;
pub use router::AppRouter;
pub use theme::ThemeController;
pub use toast::Toaster;
