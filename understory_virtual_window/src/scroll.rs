// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll position delivered by the host.

use crate::Scalar;

/// The current scroll position, in the same coordinate space as item extents.
///
/// This is a plain value: hosts build a new one for every scroll notification
/// and pass it into the window computation. Nothing here is shared or cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState<S: Scalar> {
    offset: S,
}

impl<S: Scalar> ScrollState<S> {
    /// Creates a scroll state at `offset`, stored as given.
    #[must_use]
    pub const fn new(offset: S) -> Self {
        Self { offset }
    }

    /// Creates a scroll state from a raw host offset.
    ///
    /// Some hosts report negative offsets while rubber-banding; those, and NaN,
    /// are clamped to zero.
    #[must_use]
    pub fn from_host(offset: S) -> Self {
        Self {
            offset: offset.clamp_non_negative(),
        }
    }

    /// Scroll state at the top of the strip.
    #[must_use]
    pub fn top() -> Self {
        Self { offset: S::zero() }
    }

    /// Returns the scroll offset.
    #[must_use]
    pub const fn offset(&self) -> S {
        self.offset
    }

    /// Returns this state moved by `delta`, never above the top of the strip.
    #[must_use]
    pub fn scroll_by(self, delta: S) -> Self {
        Self::from_host(self.offset + delta)
    }

    /// Returns this state with the offset capped at `max_offset`.
    #[must_use]
    pub fn clamped_to(self, max_offset: S) -> Self {
        if self.offset > max_offset {
            Self {
                offset: max_offset.clamp_non_negative(),
            }
        } else {
            self
        }
    }
}

impl<S: Scalar> Default for ScrollState<S> {
    fn default() -> Self {
        Self::top()
    }
}
