// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` timer host.
//!
//! [`WindowTimers`] implements [`TimerHost`] with the browser's
//! `setInterval` / `clearInterval` pair and reads the clock from
//! [`performance.now()`][mdn]. Each armed interval owns its JS closure; the
//! closure is freed as soon as the interval is cleared.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/Performance/now

use alloc::boxed::Box;
use alloc::vec::Vec;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use carousel_core::time::{Duration, HostTime};
use carousel_core::timer::{TimerHost, TimerId};

use crate::dispatch::Dispatcher;

// Direct global bindings instead of `web_sys::Window` methods, so ticks and
// clock reads don't have to fetch (and unwrap) the Window every time.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(handle: i32);
}

type IntervalClosure = Closure<dyn FnMut()>;

struct ActiveInterval {
    id: TimerId,
    /// Handle returned by `setInterval`.
    handle: i32,
    /// Kept alive for as long as the interval is armed.
    _closure: IntervalClosure,
}

/// Browser timers delivering expiries to a mounted slider.
///
/// Created by [`DomSlider::mount`](crate::DomSlider::mount); there is no
/// public constructor because expiries are routed through the mount's
/// dispatcher.
pub struct WindowTimers {
    dispatcher: Dispatcher,
    next_id: u32,
    active: Vec<ActiveInterval>,
}

impl core::fmt::Debug for WindowTimers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowTimers")
            .field("next_id", &self.next_id)
            .field("active", &self.active.len())
            .finish()
    }
}

impl WindowTimers {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            next_id: 0,
            active: Vec::new(),
        }
    }

    /// Returns the number of armed intervals.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active.len()
    }
}

impl TimerHost for WindowTimers {
    fn now(&self) -> HostTime {
        crate::now()
    }

    fn set_interval(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let dispatcher = self.dispatcher.clone();
        let closure = Closure::wrap(Box::new(move || {
            dispatcher.with_slider(|slider| slider.on_timer(id));
        }) as Box<dyn FnMut()>);

        let handle = set_interval(closure.as_ref().unchecked_ref(), timeout_millis(period));
        self.active.push(ActiveInterval {
            id,
            handle,
            _closure: closure,
        });
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        if let Some(slot) = self.active.iter().position(|i| i.id == id) {
            let interval = self.active.swap_remove(slot);
            clear_interval(interval.handle);
        }
    }
}

impl Drop for WindowTimers {
    fn drop(&mut self) {
        for interval in self.active.drain(..) {
            clear_interval(interval.handle);
        }
    }
}

/// Converts a period to a `setInterval` timeout, saturating at `i32::MAX`.
fn timeout_millis(period: Duration) -> i32 {
    i32::try_from(period.millis()).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_saturates() {
        assert_eq!(timeout_millis(Duration::from_millis(5_000)), 5_000);
        assert_eq!(timeout_millis(Duration::from_millis(u64::MAX)), i32::MAX);
        assert_eq!(timeout_millis(Duration::ZERO), 0);
    }
}
