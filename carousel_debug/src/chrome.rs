// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] takes events recorded by a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes
//! [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use carousel_core::time::HostTime;
use carousel_core::trace::TimerAction;

use crate::recorder::RecordedEvent;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Navigations and stale ticks become instant events. Each armed interval
/// opens an async span keyed by timer id that closes when the interval is
/// cleared. Setup diagnostics carry no timestamp and are placed at zero.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::new();

    for recorded in events {
        match recorded {
            RecordedEvent::Mount(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Mount",
                    "cat": "Setup",
                    "ts": to_us(e.at),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "slides": e.slides,
                        "indicators": e.indicators,
                        "previous_bound": e.previous_bound,
                        "next_bound": e.next_bound,
                    }
                }));
            }
            RecordedEvent::MountSkipped(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "MountSkipped",
                    "cat": "Setup",
                    "ts": 0,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "reason": e.reason.to_string(),
                    }
                }));
            }
            RecordedEvent::PartMissing(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "PartMissing",
                    "cat": "Setup",
                    "ts": 0,
                    "pid": 0,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "part": e.part.as_str(),
                        "index": e.index,
                    }
                }));
            }
            RecordedEvent::Navigate(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Navigate",
                    "cat": "Navigation",
                    "ts": to_us(e.at),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "cause": e.cause.as_str(),
                        "from": e.from,
                        "to": e.to,
                    }
                }));
            }
            RecordedEvent::Timer(e) => {
                let ph = match e.action {
                    TimerAction::Armed => "b",
                    TimerAction::Cleared => "e",
                };
                out.push(json!({
                    "ph": ph,
                    "name": "Interval",
                    "cat": "Timer",
                    "id": e.id.0,
                    "ts": to_us(e.at),
                    "pid": 0,
                    "tid": 1,
                }));
            }
            RecordedEvent::StaleTick(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "StaleTick",
                    "cat": "Timer",
                    "ts": to_us(e.at),
                    "pid": 0,
                    "tid": 1,
                    "s": "t",
                    "args": {
                        "id": e.id.0,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

fn to_us(at: HostTime) -> f64 {
    at.millis() as f64 * 1000.0
}
