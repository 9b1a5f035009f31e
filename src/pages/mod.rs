//! Routed pages.
//!
//! Each page is a component rendered by the router's page outlet, except
//! [`Login`] which replaces the whole dashboard while signed out.

mod dashboard;
mod login;
mod not_found;
mod orgs;
mod settings;
mod users;

pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use orgs::Orgs;
pub use settings::Settings;
pub use users::Users;

// Shared by every page; each page uses a subset of the classes.
stylance::import_crate_style!(#[allow(dead_code)] css, "src/pages/page.module.css");
