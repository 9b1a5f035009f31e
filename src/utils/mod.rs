//! Utility modules for browser, timer and network operations.
//!
//! Provides:
//! - [`dom`] - Window, document, hash navigation and root-element helpers
//! - [`TimerSlot`] - Cancellable one-shot timer for components
//! - [`logging`] - `tracing` subscriber writing to the browser console
//! - [`ApiClient`] - JSON requests with bearer auth and timeout
//! - [`storage`] - Auth token in localStorage

pub mod api;
pub mod dom;
pub mod logging;
pub mod storage;
mod timer;

pub use api::ApiClient;
pub use timer::TimerSlot;
