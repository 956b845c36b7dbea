// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounting a slider on a live page.

use alloc::rc::Rc;

use carousel_core::config::SliderConfig;
use carousel_core::error::{MountError, NavigationError};
use carousel_core::slider::Slider;
use carousel_core::trace::Tracer;
use carousel_core::view::Action;
use web_sys::Document;

use crate::dispatch::{Dispatcher, SharedSlider};
use crate::dom::DomDocument;
use crate::interval::WindowTimers;

/// A slider mounted on a browser document.
///
/// Clicks and interval expiries reach the slider for as long as this handle
/// lives. Dropping it clears the interval, removes the click listeners, and
/// removes the generated indicators. To keep a slider for the lifetime of
/// the page, leak the handle with [`core::mem::forget`].
pub struct DomSlider {
    inner: Rc<SharedSlider>,
}

impl core::fmt::Debug for DomSlider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner.try_borrow() {
            Ok(slider) => f.debug_tuple("DomSlider").field(&*slider).finish(),
            Err(_) => f.debug_tuple("DomSlider").field(&"<borrowed>").finish(),
        }
    }
}

impl DomSlider {
    /// Mounts a slider on `document`.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] if the container named by
    /// `config.selectors.container_id` is missing or holds no slides.
    /// Nothing on the page is changed in that case.
    pub fn mount(document: &Document, config: SliderConfig) -> Result<Self, MountError> {
        Self::mount_with_tracer(document, config, Tracer::none())
    }

    /// Like [`mount`](Self::mount), reporting setup and navigation to
    /// `tracer`.
    ///
    /// # Errors
    ///
    /// See [`mount`](Self::mount).
    pub fn mount_with_tracer(
        document: &Document,
        config: SliderConfig,
        tracer: Tracer,
    ) -> Result<Self, MountError> {
        let dispatcher = Dispatcher::default();
        let dom = DomDocument::new(document.clone(), dispatcher.clone());
        let timers = WindowTimers::new(dispatcher.clone());
        let slider = Slider::mount_with_tracer(&dom, timers, config, tracer)?;

        // Nothing can fire before this point: listeners and intervals only
        // run once control returns to the event loop.
        let inner = Rc::new(SharedSlider::new(slider));
        dispatcher.attach(&inner);
        Ok(Self { inner })
    }

    /// Returns the index of the active slide.
    #[must_use]
    pub fn index(&self) -> usize {
        self.inner.borrow().index()
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Always `false`: a mounted slider has at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Performs a navigation request as if the user had clicked, restarting
    /// the auto-advance interval.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] for an out-of-range [`Action::Select`].
    pub fn handle(&self, action: Action) -> Result<(), NavigationError> {
        self.inner.borrow_mut().handle(action)
    }

    /// Stops auto-advance.
    pub fn stop(&self) {
        self.inner.borrow_mut().stop();
    }

    /// Resumes auto-advance with a full period.
    pub fn start(&self) {
        self.inner.borrow_mut().start();
    }

    /// Replaces the tracer, returning the previous one.
    pub fn set_tracer(&self, tracer: Tracer) -> Tracer {
        self.inner.borrow_mut().set_tracer(tracer)
    }
}

/// Mounts a slider on the window's document, silently doing nothing if
/// there is no document or the markup is absent.
///
/// This is the fail-silent entry point for decorative sliders: a page
/// without the slider markup simply gets no slider.
#[must_use]
pub fn mount(config: SliderConfig) -> Option<DomSlider> {
    let document = web_sys::window()?.document()?;
    DomSlider::mount(&document, config).ok()
}
