//! Browser-only checks for the localStorage, hash, timer and API helpers.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use acme_admin::core::error::ApiError;
use acme_admin::models::AppRoute;
use acme_admin::utils::api::check_response;
use acme_admin::utils::{TimerSlot, dom, storage};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_auth_token_round_trip() {
    storage::clear_auth_token().expect("clear");
    assert_eq!(storage::auth_token(), None);

    storage::set_auth_token("abc123").expect("save");
    assert_eq!(storage::auth_token().as_deref(), Some("abc123"));

    storage::clear_auth_token().expect("clear");
    assert_eq!(storage::auth_token(), None);
}

#[wasm_bindgen_test]
fn test_replace_hash_is_read_back_as_route() {
    AppRoute::app("/system/settings").replace();
    assert_eq!(dom::get_hash(), "/system/settings");
    assert_eq!(AppRoute::current(), AppRoute::app("/system/settings"));

    AppRoute::Login.replace();
    assert!(AppRoute::current().is_login());
}

#[wasm_bindgen_test]
fn test_unauthorized_response_returns_to_login() {
    AppRoute::app("/management/users").replace();
    assert_eq!(check_response(200, "/api/users"), Ok(()));
    assert_eq!(
        check_response(500, "/api/users"),
        Err(ApiError::HttpError(500))
    );
    assert_eq!(dom::get_hash(), "/management/users");

    assert_eq!(
        check_response(401, "/api/users"),
        Err(ApiError::Unauthorized)
    );
    assert!(AppRoute::current().is_login());
}

#[wasm_bindgen_test]
async fn test_timer_slot_fires_once() {
    let fired = Rc::new(Cell::new(0));
    let slot = TimerSlot::new();

    let counter = fired.clone();
    slot.schedule(10, move || counter.set(counter.get() + 1));
    TimeoutFuture::new(50).await;
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
async fn test_timer_slot_reschedule_and_cancel() {
    let fired = Rc::new(Cell::new(0));
    let slot = TimerSlot::new();

    let first = fired.clone();
    slot.schedule(10, move || first.set(first.get() + 1));
    let second = fired.clone();
    slot.schedule(10, move || second.set(second.get() + 10));
    TimeoutFuture::new(50).await;
    // Rescheduling dropped the first callback.
    assert_eq!(fired.get(), 10);

    let third = fired.clone();
    slot.schedule(10, move || third.set(third.get() + 100));
    slot.cancel();
    TimeoutFuture::new(50).await;
    assert_eq!(fired.get(), 10);
}
