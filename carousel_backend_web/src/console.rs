// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.
//!
//! [`ConsoleSink`] implements [`TraceSink`] by writing one line per event to
//! the devtools console. Events only reach it when the `trace` feature is
//! enabled.

use alloc::format;
use alloc::string::String;

use carousel_core::trace::{
    MountEvent, MountSkippedEvent, NavigateEvent, PartMissingEvent, StaleTickEvent, TimerAction,
    TimerEvent, TraceSink,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes slider trace events to the browser console.
#[derive(Clone, Debug, Default)]
pub struct ConsoleSink {
    label: String,
}

impl ConsoleSink {
    /// Creates a sink that prefixes every line with `[label]`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    fn prefix(&self) -> &str {
        if self.label.is_empty() {
            "carousel"
        } else {
            &self.label
        }
    }
}

impl TraceSink for ConsoleSink {
    fn on_mount(&mut self, e: &MountEvent) {
        console::info_1(&JsValue::from_str(&format!(
            "[{}] mounted slides={} indicators={} prev={} next={} at={}ms",
            self.prefix(),
            e.slides,
            e.indicators,
            e.previous_bound,
            e.next_bound,
            e.at.millis(),
        )));
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        console::debug_1(&JsValue::from_str(&format!(
            "[{}] not mounted: {}",
            self.prefix(),
            e.reason,
        )));
    }

    fn on_part_missing(&mut self, e: &PartMissingEvent) {
        let line = match e.index {
            Some(index) => format!("[{}] missing {} #{index}", self.prefix(), e.part.as_str()),
            None => format!("[{}] missing {}", self.prefix(), e.part.as_str()),
        };
        console::warn_1(&JsValue::from_str(&line));
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        console::debug_1(&JsValue::from_str(&format!(
            "[{}] {} {} -> {} at={}ms",
            self.prefix(),
            e.cause.as_str(),
            e.from,
            e.to,
            e.at.millis(),
        )));
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        let verb = match e.action {
            TimerAction::Armed => "armed",
            TimerAction::Cleared => "cleared",
        };
        console::debug_1(&JsValue::from_str(&format!(
            "[{}] timer {verb} id={} at={}ms",
            self.prefix(),
            e.id.0,
            e.at.millis(),
        )));
    }

    fn on_stale_tick(&mut self, e: &StaleTickEvent) {
        console::debug_1(&JsValue::from_str(&format!(
            "[{}] stale tick id={} at={}ms",
            self.prefix(),
            e.id.0,
            e.at.millis(),
        )));
    }
}
