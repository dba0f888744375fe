// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-extent windowing: which indices intersect the viewport.

use crate::{Scalar, VisibleRange, WindowError};

/// Result of a windowing query over a strip of uniformly sized items.
///
/// `range` says which items to render; `total_extent` sizes the spacer that
/// keeps the host's scrollbar proportional to the whole collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleWindow<S: Scalar> {
    /// Items intersecting the viewport.
    pub range: VisibleRange,
    /// Number of items in the collection the window was computed for.
    pub item_count: usize,
    /// Extent shared by every item.
    pub item_extent: S,
    /// Extent of the entire strip: `item_extent * item_count`.
    pub total_extent: S,
}

impl<S: Scalar> VisibleWindow<S> {
    /// Returns `true` if there are no items to render.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Offset of the start of item `index` from the start of the strip.
    #[must_use]
    pub fn item_offset(&self, index: usize) -> S {
        S::from_usize(index) * self.item_extent
    }

    /// Total extent of items before the visible range.
    #[must_use]
    pub fn before_extent(&self) -> S {
        match self.range {
            VisibleRange::Empty => S::zero(),
            VisibleRange::Span { start, .. } => self.item_offset(start),
        }
    }

    /// Total extent of items after the visible range.
    ///
    /// Zero if `range` reaches past `item_count`.
    #[must_use]
    pub fn after_extent(&self) -> S {
        match self.range {
            VisibleRange::Empty => S::zero(),
            VisibleRange::Span { end, .. } => {
                let after = self.item_count.saturating_sub(end.saturating_add(1));
                S::from_usize(after) * self.item_extent
            }
        }
    }
}

/// Computes the visible range and total extent of a fixed-extent strip.
///
/// - `offset`: top of the viewport in strip coordinates. Callers clamp negative
///   host scroll positions; this function does not, but the returned range
///   stays in bounds regardless.
/// - `item_extent`: extent of every item; must be finite and `> 0`.
/// - `viewport_extent`: visible extent; must be `>= 0`.
/// - `item_count`: number of items in the collection.
///
/// The start index is `floor(offset / item_extent)` and the end index is
/// `floor((offset + viewport_extent) / item_extent)`, both inclusive and clamped
/// to `0..item_count`. An offset past the end of the content (for example after
/// the collection shrank) resolves to the last item. A zero viewport still
/// yields a single row. Cost is constant in `item_count`.
///
/// `total_extent` is computed in `S`. An `f32` represents integers exactly
/// only up to 2^24, so beyond roughly 16.7 million items (less for fractional
/// extents) the `f32` product rounds; use `f64` when exact extents matter for
/// large collections.
///
/// # Errors
///
/// Returns [`WindowError::InvalidItemExtent`] if `item_extent` is not finite and
/// positive, or [`WindowError::InvalidViewportExtent`] if `viewport_extent` is
/// negative or NaN. Nothing is computed in that case.
pub fn compute_visible_range<S: Scalar>(
    offset: S,
    item_extent: S,
    viewport_extent: S,
    item_count: usize,
) -> Result<VisibleWindow<S>, WindowError> {
    let item_extent = validate_item_extent(item_extent)?;
    let viewport_extent = validate_viewport_extent(viewport_extent)?;
    Ok(window_for(offset, item_extent, viewport_extent, item_count))
}

pub(crate) fn validate_item_extent<S: Scalar>(extent: S) -> Result<S, WindowError> {
    if extent.is_finite() && extent > S::zero() {
        Ok(extent)
    } else {
        log::debug!("rejecting item extent {extent:?}: must be finite and positive");
        Err(WindowError::InvalidItemExtent(extent.to_f64()))
    }
}

pub(crate) fn validate_viewport_extent<S: Scalar>(extent: S) -> Result<S, WindowError> {
    if extent.is_nan() || extent < S::zero() {
        log::debug!("rejecting viewport extent {extent:?}: must not be negative");
        Err(WindowError::InvalidViewportExtent(extent.to_f64()))
    } else {
        Ok(extent)
    }
}

/// Windowing over already validated geometry.
pub(crate) fn window_for<S: Scalar>(
    offset: S,
    item_extent: S,
    viewport_extent: S,
    item_count: usize,
) -> VisibleWindow<S> {
    let total_extent = item_extent * S::from_usize(item_count);
    let Some(last) = item_count.checked_sub(1) else {
        return VisibleWindow {
            range: VisibleRange::Empty,
            item_count,
            item_extent,
            total_extent: S::zero(),
        };
    };

    let start = clamp_index((offset / item_extent).floor_to_isize(), last);
    // A negative offset can floor the end below the clamped start.
    let end = clamp_index(
        ((offset + viewport_extent) / item_extent).floor_to_isize(),
        last,
    )
    .max(start);

    VisibleWindow {
        range: VisibleRange::Span { start, end },
        item_count,
        item_extent,
        total_extent,
    }
}

pub(crate) fn clamp_index(index: isize, last: usize) -> usize {
    usize::try_from(index).map_or(0, |index| index.min(last))
}
