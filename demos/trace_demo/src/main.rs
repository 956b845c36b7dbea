// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated slider session that exercises the tracing and diagnostics
//! pipeline.
//!
//! Mounts a four-slide headless slider on virtual timers, drives it with a
//! scripted mix of clicks and elapsed time, and records every event to both a
//! [`PrettyPrintSink`] and a [`RecorderSink`]. The recording is then exported
//! as a Chrome trace JSON file (default `trace.json`, or the first argument).

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::rc::Rc;

use carousel_core::config::SliderConfig;
use carousel_core::headless::{HeadlessDocument, HeadlessElement, HeadlessLayout};
use carousel_core::slider::Slider;
use carousel_core::time::Duration;
use carousel_core::timer::{TimerId, VirtualTimers};
use carousel_core::trace::{NavigationCause, Tracer};

use carousel_debug::pretty::PrettyPrintSink;
use carousel_debug::recorder::RecorderSink;

const SLIDES: usize = 4;

/// One scripted step of the session.
#[derive(Clone, Copy, Debug)]
enum Step {
    Wait(Duration),
    Click(HeadlessElement),
    Stop,
    Start,
    /// Deliver an expiry for an interval the slider never armed.
    Stray(TimerId),
}

const SCRIPT: &[Step] = &[
    Step::Wait(Duration::from_millis(12_000)),
    Step::Click(HeadlessElement::Next),
    Step::Wait(Duration::from_millis(3_000)),
    Step::Click(HeadlessElement::Indicator(0)),
    Step::Wait(Duration::from_millis(6_000)),
    Step::Click(HeadlessElement::Previous),
    Step::Stray(TimerId(u32::MAX)),
    Step::Stop,
    Step::Wait(Duration::from_millis(10_000)),
    Step::Start,
    Step::Wait(Duration::from_millis(5_000)),
];

fn main() -> io::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "trace.json".into());

    // -- sinks -------------------------------------------------------------
    let pretty = PrettyPrintSink::new(Box::new(io::stdout()));
    let recorder = Rc::new(RefCell::new(RecorderSink::new()));
    let tracer = Tracer::new(Box::new((pretty, Rc::clone(&recorder))));

    // -- slider ------------------------------------------------------------
    let document = HeadlessDocument::new(HeadlessLayout::complete(SLIDES));
    let mut slider =
        Slider::mount_with_tracer(&document, VirtualTimers::new(), SliderConfig::new(), tracer)
            .map_err(io::Error::other)?;

    // -- scripted session --------------------------------------------------
    for step in SCRIPT {
        match *step {
            Step::Wait(elapsed) => {
                slider.advance(elapsed);
            }
            Step::Click(element) => {
                slider.click(element);
            }
            Step::Stop => slider.stop(),
            Step::Start => slider.start(),
            Step::Stray(id) => slider.on_timer(id),
        }
    }

    // Dropping the slider clears its interval, which is recorded too.
    let final_index = slider.index();
    drop(slider);

    // -- export Chrome trace -----------------------------------------------
    let recorder = recorder.borrow();
    let mut writer = BufWriter::new(File::create(&path)?);
    carousel_debug::chrome::export(recorder.events(), &mut writer)?;
    writer.flush()?;

    println!(
        "Wrote {path} ({} events, {} auto / {} manual slide changes, ended on slide {final_index})",
        recorder.events().len(),
        recorder.count_cause(NavigationCause::Auto),
        recorder.visited().len() - recorder.count_cause(NavigationCause::Auto),
    );
    Ok(())
}
