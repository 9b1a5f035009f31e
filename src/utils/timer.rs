//! Cancellable one-shot timers owned by components.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Slot holding at most one pending [`Timeout`].
///
/// Scheduling replaces (and thereby cancels) the previous timeout. The slot
/// is `Copy` so it can be moved into event handlers and `on_cleanup`.
#[derive(Clone, Copy)]
pub struct TimerSlot {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self {
            pending: StoredValue::new_local(None),
        }
    }

    /// Run `callback` after `millis`, cancelling anything already pending.
    pub fn schedule(&self, millis: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(millis, callback);
        self.pending.try_update_value(|slot| *slot = Some(timeout));
    }

    /// Drop the pending timeout, if any, without running it.
    pub fn cancel(&self) {
        self.pending.try_update_value(|slot| *slot = None);
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}
