// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for carousel.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomSlider`]: a slider mounted on a [`web_sys::Document`], with click
//!   listeners on the triggers and generated indicators
//! - [`DomDocument`] / [`DomView`]: DOM element lookup and class toggling
//! - [`WindowTimers`]: `setInterval` timer host
//! - [`ConsoleSink`]: trace output to the devtools console
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `carousel_core/trace`, so
//!   tracers passed to [`DomSlider::mount_with_tracer`] receive events.

#![no_std]

extern crate alloc;

mod console;
mod dispatch;
mod dom;
mod interval;
mod mount;

pub use console::ConsoleSink;
pub use dom::{DomDocument, DomView};
pub use interval::WindowTimers;
pub use mount::{DomSlider, mount};

use carousel_core::time::HostTime;

/// Returns the current host time from `performance.now()`, in whole
/// milliseconds.
#[must_use]
pub fn now() -> HostTime {
    let ms = interval::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns a small positive f64; whole ms fit in u64"
    )]
    let ms = ms as u64;
    HostTime(ms)
}
