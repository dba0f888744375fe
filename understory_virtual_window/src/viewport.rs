// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated viewport geometry.

use crate::window::{clamp_index, validate_item_extent, validate_viewport_extent, window_for};
use crate::{Scalar, ScrollState, VisibleWindow, WindowError};

/// Item and viewport extents for one render session.
///
/// Construction validates the geometry once, so windowing through a
/// [`ViewportSpec`] cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSpec<S: Scalar> {
    item_extent: S,
    viewport_extent: S,
}

impl<S: Scalar> ViewportSpec<S> {
    /// Creates a viewport with uniform `item_extent` and visible `viewport_extent`.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidItemExtent`] unless `item_extent` is finite
    /// and positive, and [`WindowError::InvalidViewportExtent`] if
    /// `viewport_extent` is negative or NaN.
    pub fn new(item_extent: S, viewport_extent: S) -> Result<Self, WindowError> {
        Ok(Self {
            item_extent: validate_item_extent(item_extent)?,
            viewport_extent: validate_viewport_extent(viewport_extent)?,
        })
    }

    /// Returns the extent shared by every item.
    #[must_use]
    pub const fn item_extent(&self) -> S {
        self.item_extent
    }

    /// Returns the visible extent.
    #[must_use]
    pub const fn viewport_extent(&self) -> S {
        self.viewport_extent
    }

    /// Returns a copy with a different item extent.
    ///
    /// # Errors
    ///
    /// Same as [`ViewportSpec::new`] for the item extent.
    pub fn with_item_extent(self, item_extent: S) -> Result<Self, WindowError> {
        Ok(Self {
            item_extent: validate_item_extent(item_extent)?,
            ..self
        })
    }

    /// Returns a copy with a different viewport extent.
    ///
    /// # Errors
    ///
    /// Same as [`ViewportSpec::new`] for the viewport extent.
    pub fn with_viewport_extent(self, viewport_extent: S) -> Result<Self, WindowError> {
        Ok(Self {
            viewport_extent: validate_viewport_extent(viewport_extent)?,
            ..self
        })
    }

    /// Computes the visible window for `item_count` items at `scroll`.
    ///
    /// See [`compute_visible_range`](crate::compute_visible_range) for the
    /// clamping rules.
    #[must_use]
    pub fn visible_window(&self, scroll: ScrollState<S>, item_count: usize) -> VisibleWindow<S> {
        window_for(
            scroll.offset(),
            self.item_extent,
            self.viewport_extent,
            item_count,
        )
    }

    /// Extent of `item_count` items laid end to end.
    #[must_use]
    pub fn total_extent(&self, item_count: usize) -> S {
        self.item_extent * S::from_usize(item_count)
    }

    /// Largest scroll offset that keeps the viewport inside the content.
    ///
    /// Zero when the content fits inside the viewport.
    #[must_use]
    pub fn max_scroll_offset(&self, item_count: usize) -> S {
        (self.total_extent(item_count) - self.viewport_extent).clamp_non_negative()
    }

    /// Index of the item under `offset`, clamped to the collection.
    ///
    /// Returns `None` when there are no items.
    #[must_use]
    pub fn index_at_offset(&self, offset: S, item_count: usize) -> Option<usize> {
        let last = item_count.checked_sub(1)?;
        let index = (offset / self.item_extent).floor_to_isize();
        Some(clamp_index(index, last))
    }
}

#[cfg(test)]
mod tests {
    use super::ViewportSpec;
    use crate::{ScrollState, VisibleRange, WindowError, compute_visible_range};

    #[test]
    fn construction_validates_geometry() {
        assert!(ViewportSpec::new(50.0_f32, 0.0).is_ok());
        assert_eq!(
            ViewportSpec::new(0.0_f32, 200.0),
            Err(WindowError::InvalidItemExtent(0.0))
        );
        assert_eq!(
            ViewportSpec::new(50.0_f64, -1.0),
            Err(WindowError::InvalidViewportExtent(-1.0))
        );

        let spec = ViewportSpec::new(50.0_f64, 200.0).unwrap();
        assert!(spec.with_item_extent(-2.0).is_err());
        assert!(spec.with_viewport_extent(f64::NAN).is_err());
        let taller = spec.with_viewport_extent(400.0).unwrap();
        assert_eq!(taller.viewport_extent(), 400.0);
        assert_eq!(taller.item_extent(), 50.0);
    }

    #[test]
    fn visible_window_matches_the_free_function() {
        let spec = ViewportSpec::new(50.0_f64, 200.0).unwrap();
        for offset in [0.0, 49.0, 125.0, 4_999_800.0, 9.0e9] {
            for count in [0, 3, 100_000] {
                assert_eq!(
                    spec.visible_window(ScrollState::new(offset), count),
                    compute_visible_range(offset, 50.0, 200.0, count).unwrap()
                );
            }
        }
    }

    #[test]
    fn extents_and_scroll_limits() {
        let spec = ViewportSpec::new(50.0_f64, 200.0).unwrap();
        assert_eq!(spec.total_extent(100_000), 5_000_000.0);
        assert_eq!(spec.max_scroll_offset(100_000), 4_999_800.0);
        assert_eq!(spec.max_scroll_offset(3), 0.0);

        let bottom = ScrollState::new(spec.max_scroll_offset(100_000));
        let window = spec.visible_window(bottom, 100_000);
        assert_eq!(
            window.range,
            VisibleRange::Span {
                start: 99_996,
                end: 99_999
            }
        );
    }

    #[test]
    fn index_at_offset_floors_and_clamps() {
        let spec = ViewportSpec::new(10.0_f32, 30.0).unwrap();
        assert_eq!(spec.index_at_offset(0.0, 0), None);
        assert_eq!(spec.index_at_offset(0.0, 5), Some(0));
        assert_eq!(spec.index_at_offset(9.9, 5), Some(0));
        assert_eq!(spec.index_at_offset(10.0, 5), Some(1));
        assert_eq!(spec.index_at_offset(49.9, 5), Some(4));
        assert_eq!(spec.index_at_offset(100.0, 5), Some(4));
        assert_eq!(spec.index_at_offset(-15.0, 5), Some(0));
    }
}
