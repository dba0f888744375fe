// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `kurbo` helpers for hosts that lay rows out as rectangles.

use kurbo::Rect;

use crate::{Scalar, VisibleWindow};

impl<S: Scalar> VisibleWindow<S> {
    /// Rectangles for the visible rows, each `width` wide and positioned at its
    /// absolute offset from the top of the strip.
    pub fn item_rects(&self, width: f64) -> impl Iterator<Item = (usize, Rect)> + use<S> {
        let extent = self.item_extent.to_f64();
        let window = *self;
        self.range.indices().map(move |index| {
            let top = window.item_offset(index).to_f64();
            (index, Rect::new(0.0, top, width, top + extent))
        })
    }

    /// The placeholder rectangle sized to the whole strip.
    #[must_use]
    pub fn spacer_rect(&self, width: f64) -> Rect {
        Rect::new(0.0, 0.0, width, self.total_extent.to_f64())
    }
}
