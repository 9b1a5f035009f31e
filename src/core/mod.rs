//! Core business logic for the admin dashboard.
//!
//! Everything here is plain data and pure functions so it can be tested
//! without a browser:
//! - [`breadcrumb`] trail derivation from the route table
//! - [`search`] command palette filtering and keyboard navigation
//! - [`menu`] sidebar expansion and active-item detection
//! - [`auth`] route guarding and login form checks
//! - [`pagination`] and [`filters`] for the list pages

pub mod auth;
pub mod breadcrumb;
pub mod error;
pub mod filters;
pub mod menu;
pub mod pagination;
pub mod search;

pub use auth::{GuardDecision, guard, validate_credentials};
pub use breadcrumb::{Breadcrumb, derive_breadcrumbs};
pub use filters::{ListState, ListView, OrgFilter, RecordFilter, UserFilter};
pub use menu::MenuState;
pub use pagination::{PageItem, Pagination, page_items};
pub use search::{MatchPolicy, SearchItem, SearchKey, SearchOutcome, SearchPanel};
