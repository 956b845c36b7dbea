// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types and controller for rotating content sliders.
//!
//! `carousel_core` holds everything about a carousel that does not depend on
//! a concrete element tree or clock. It is `no_std` compatible (with
//! `alloc`); platform glue lives in backend crates.
//!
//! # Architecture
//!
//! A [`Slider`](slider::Slider) is wired to two injected capabilities:
//!
//! ```text
//!   SliderDocument::locate() ──► SliderView ◄─── set_active / bind
//!                                    │                  ▲
//!                                 Action                │
//!                                    ▼                  │
//!                              Slider::handle() ── Cursor ── render_active
//!                                    ▲                  │
//!                                 TimerId               ▼
//!                                    │           reset_timer
//!                               TimerHost ◄───── set_interval / clear_interval
//! ```
//!
//! **[`cursor`]**: Cyclic index arithmetic over a non-empty slide count.
//!
//! **[`view`]**: [`SliderDocument`](view::SliderDocument) and
//! [`SliderView`](view::SliderView), the element-level contract backends
//! implement, plus the [`Action`](view::Action) user requests.
//!
//! **[`timer`]**: [`TimerHost`](timer::TimerHost), the repeating-timer
//! contract, and [`VirtualTimers`](timer::VirtualTimers), a manual clock.
//!
//! **[`slider`]**: The controller: mounting, navigation, and auto-advance
//! with restart on manual interaction.
//!
//! **[`headless`]**: An in-memory document for tests and simulations.
//!
//! **[`config`]**: Interval, autoplay, and element selectors.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! slider instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod cursor;
pub mod error;
pub mod headless;
pub mod slider;
pub mod time;
pub mod timer;
pub mod trace;
pub mod view;
