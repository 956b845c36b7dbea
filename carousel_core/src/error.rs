// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

/// Reasons [`Slider::mount`](crate::slider::Slider::mount) declines to set
/// up a slider.
///
/// Both variants abort before any side effect: no indicators are created, no
/// handlers are bound and no timer is armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MountError {
    /// The slider container could not be found in the document.
    ContainerMissing,
    /// The container was found but holds no slides.
    NoSlides,
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainerMissing => f.write_str("slider container not found"),
            Self::NoSlides => f.write_str("slider container holds no slides"),
        }
    }
}

impl core::error::Error for MountError {}

/// Errors from direct navigation requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationError {
    /// The requested slide index does not exist.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of slides.
        len: usize,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "slide index {index} out of range for {len} slides")
            }
        }
    }
}

impl core::error::Error for NavigationError {}
