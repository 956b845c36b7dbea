// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing from JS callbacks back into the controller.
//!
//! Listener and interval closures are created while the slider is still
//! being mounted, before it is placed behind its `Rc`. They share a
//! [`Dispatcher`] whose target is filled in once mounting succeeds and holds
//! only a `Weak` reference, so closures never keep a slider alive.

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use carousel_core::slider::Slider;

use crate::dom::DomView;
use crate::interval::WindowTimers;

/// The controller as mounted on the web.
pub(crate) type SharedSlider = RefCell<Slider<DomView, WindowTimers>>;

#[derive(Clone, Default)]
pub(crate) struct Dispatcher {
    target: Rc<RefCell<Weak<SharedSlider>>>,
}

impl core::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("attached", &(self.target.borrow().strong_count() > 0))
            .finish()
    }
}

impl Dispatcher {
    /// Points every clone of this dispatcher at `slider`.
    pub(crate) fn attach(&self, slider: &Rc<SharedSlider>) {
        *self.target.borrow_mut() = Rc::downgrade(slider);
    }

    /// Runs `f` on the slider.
    ///
    /// Does nothing if the slider is gone, not yet attached, or already
    /// borrowed further up the stack.
    pub(crate) fn with_slider(&self, f: impl FnOnce(&mut Slider<DomView, WindowTimers>)) {
        let Some(shared) = self.target.borrow().upgrade() else {
            return;
        };
        let Ok(mut slider) = shared.try_borrow_mut() else {
            return;
        };
        f(&mut slider);
    }
}
