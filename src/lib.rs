//! Acme admin dashboard.
//!
//! A client-side rendered Leptos application: authentication gate,
//! collapsible sidebar navigation with command-palette search, theme
//! switching and paginated list pages over bundled mock data.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod pages;
pub mod utils;

pub use app::{App, AppContext};
