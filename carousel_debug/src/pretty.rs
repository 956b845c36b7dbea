// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in host milliseconds.

use std::io::Write;

use carousel_core::trace::{
    MountEvent, MountSkippedEvent, NavigateEvent, PartMissingEvent, StaleTickEvent, TimerAction,
    TimerEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_mount(&mut self, e: &MountEvent) {
        let _ = writeln!(
            self.writer,
            "[mount] at={}ms slides={} indicators={} prev={} next={}",
            e.at.millis(),
            e.slides,
            e.indicators,
            e.previous_bound,
            e.next_bound,
        );
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        let _ = writeln!(self.writer, "[mount:skipped] {}", e.reason);
    }

    fn on_part_missing(&mut self, e: &PartMissingEvent) {
        let _ = match e.index {
            Some(index) => writeln!(self.writer, "[missing] {} #{index}", e.part.as_str()),
            None => writeln!(self.writer, "[missing] {}", e.part.as_str()),
        };
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        let _ = writeln!(
            self.writer,
            "[navigate] at={}ms {} {} -> {}",
            e.at.millis(),
            e.cause.as_str(),
            e.from,
            e.to,
        );
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        let verb = match e.action {
            TimerAction::Armed => "armed",
            TimerAction::Cleared => "cleared",
        };
        let _ = writeln!(
            self.writer,
            "[timer:{verb}] at={}ms id={}",
            e.at.millis(),
            e.id.0,
        );
    }

    fn on_stale_tick(&mut self, e: &StaleTickEvent) {
        let _ = writeln!(
            self.writer,
            "[timer:stale] at={}ms id={}",
            e.at.millis(),
            e.id.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::error::MountError;
    use carousel_core::time::HostTime;
    use carousel_core::trace::{NavigationCause, Part};

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_navigate() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_navigate(&NavigateEvent {
            at: HostTime(5_000),
            cause: NavigationCause::Auto,
            from: 2,
            to: 0,
        });
        let output = output(sink);
        assert_eq!(output, "[navigate] at=5000ms auto 2 -> 0\n");
    }

    #[test]
    fn pretty_print_setup_problems() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_mount_skipped(&MountSkippedEvent {
            reason: MountError::ContainerMissing,
        });
        sink.on_part_missing(&PartMissingEvent {
            part: Part::Indicator,
            index: Some(3),
        });
        let output = output(sink);
        assert!(output.contains("[mount:skipped] slider container not found"), "got: {output}");
        assert!(output.contains("[missing] indicator #3"), "got: {output}");
    }
}
