// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: an auto-advancing slider mounted on static page markup.
//!
//! `index.html` carries a `#slider` container with `.slide` children, `.prev`
//! and `.next` buttons, and an empty `#dots` container. On load the slider
//! marks the first slide active, generates one dot per slide, and advances
//! every five seconds. Trace events go to the devtools console through a
//! [`ConsoleSink`].
//!
//! Build with: `wasm-pack build --target web demos/web_slider`
//!
//! Then serve `demos/web_slider/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;

use wasm_bindgen::prelude::*;

use carousel_backend_web::{ConsoleSink, DomSlider};
use carousel_core::config::SliderConfig;
use carousel_core::trace::Tracer;

/// Entry point: called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Ok(());
    };

    let tracer = Tracer::new(Box::new(ConsoleSink::new("web_slider")));
    // A page without the markup gets no slider; the console sink has
    // already reported why.
    if let Ok(slider) = DomSlider::mount_with_tracer(&document, SliderConfig::new(), tracer) {
        // Keep the slider alive for the lifetime of the page.
        core::mem::forget(slider);
    }
    Ok(())
}
