// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns viewport geometry and scroll state.

use crate::{Scalar, ScrollState, ViewportSpec, VisibleRange, VisibleWindow, WindowError};

/// Alignment mode when scrolling a specific index into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the start (top/leading edge) of the item with the viewport.
    Start,
    /// Center the item within the viewport.
    Center,
    /// Align the end (bottom/trailing edge) of the item with the viewport.
    End,
    /// Move just enough to make the item fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// Controller for a fixed-extent virtualized list.
///
/// This type:
/// - stores a validated [`ViewportSpec`], the current [`ScrollState`], and the item count,
/// - caches the last computed [`VisibleWindow`] until one of those changes,
/// - exposes helpers for visibility queries and index-aligned scrolling.
///
/// It does *not* know about any widget/view system or own item data. Hosts
/// forward scroll notifications (ideally at most once per frame), then render
/// the items in [`VisibleWindow::range`] after a spacer of
/// [`VisibleWindow::before_extent`].
#[derive(Debug)]
pub struct VirtualWindow<S: Scalar> {
    spec: ViewportSpec<S>,
    scroll: ScrollState<S>,
    item_count: usize,

    dirty: bool,
    last_window: VisibleWindow<S>,
}

impl<S: Scalar> VirtualWindow<S> {
    /// Creates a controller for `item_count` items scrolled to the top.
    #[must_use]
    pub fn new(spec: ViewportSpec<S>, item_count: usize) -> Self {
        let scroll = ScrollState::top();
        Self {
            spec,
            scroll,
            item_count,
            dirty: false,
            last_window: spec.visible_window(scroll, item_count),
        }
    }

    /// Creates a controller directly from raw extents.
    ///
    /// # Errors
    ///
    /// Returns the [`WindowError`] from [`ViewportSpec::new`] if the geometry is invalid.
    pub fn with_extents(
        item_extent: S,
        viewport_extent: S,
        item_count: usize,
    ) -> Result<Self, WindowError> {
        Ok(Self::new(
            ViewportSpec::new(item_extent, viewport_extent)?,
            item_count,
        ))
    }

    /// Returns the viewport geometry.
    #[must_use]
    pub const fn spec(&self) -> &ViewportSpec<S> {
        &self.spec
    }

    /// Returns the current scroll state.
    #[must_use]
    pub const fn scroll(&self) -> ScrollState<S> {
        self.scroll
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> S {
        self.scroll.offset()
    }

    /// Sets the scroll offset. Negative and NaN offsets are clamped to zero.
    pub fn set_scroll_offset(&mut self, offset: S) {
        let scroll = ScrollState::from_host(offset);
        if scroll != self.scroll {
            self.scroll = scroll;
            self.dirty = true;
        }
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: S) {
        self.set_scroll_offset(self.scroll.offset() + delta);
    }

    /// Returns the number of items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Sets the number of items.
    ///
    /// The scroll offset is left alone; if the collection shrank below it, the
    /// visible window resolves to the last item until the host scrolls or calls
    /// [`VirtualWindow::clamp_scroll_to_content`].
    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count != self.item_count {
            self.item_count = item_count;
            self.dirty = true;
        }
    }

    /// Sets the viewport extent.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidViewportExtent`] and leaves the controller
    /// unchanged if `extent` is negative or NaN.
    pub fn set_viewport_extent(&mut self, extent: S) -> Result<(), WindowError> {
        let spec = self.spec.with_viewport_extent(extent)?;
        self.replace_spec(spec);
        Ok(())
    }

    /// Sets the extent shared by every item.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidItemExtent`] and leaves the controller
    /// unchanged unless `extent` is finite and positive.
    pub fn set_item_extent(&mut self, extent: S) -> Result<(), WindowError> {
        let spec = self.spec.with_item_extent(extent)?;
        self.replace_spec(spec);
        Ok(())
    }

    fn replace_spec(&mut self, spec: ViewportSpec<S>) {
        if spec != self.spec {
            self.spec = spec;
            self.dirty = true;
        }
    }

    /// Computes or returns the cached visible window.
    #[must_use]
    pub fn visible_window(&mut self) -> VisibleWindow<S> {
        if self.dirty {
            self.last_window = self.spec.visible_window(self.scroll, self.item_count);
            self.dirty = false;
            log::trace!(
                "recomputed window {:?} at offset {:?} over {} items",
                self.last_window.range,
                self.scroll.offset(),
                self.item_count
            );
        }
        self.last_window
    }

    /// Returns the visible range.
    #[must_use]
    pub fn visible_range(&mut self) -> VisibleRange {
        self.visible_window().range
    }

    /// Convenience iterator over visible indices.
    pub fn visible_indices(&mut self) -> impl Iterator<Item = usize> + use<S> {
        self.visible_range().indices()
    }

    /// Returns the first visible index, if any.
    #[must_use]
    pub fn first_visible_index(&mut self) -> Option<usize> {
        self.visible_range().start()
    }

    /// Returns the last visible index, if any.
    #[must_use]
    pub fn last_visible_index(&mut self) -> Option<usize> {
        self.visible_range().end()
    }

    /// Start and end offsets of item `index`, or `None` if it does not exist.
    fn item_bounds(&self, index: usize) -> Option<(S, S)> {
        if index >= self.item_count {
            return None;
        }
        let extent = self.spec.item_extent();
        let start = S::from_usize(index) * extent;
        Some((start, start + extent))
    }

    /// Returns `true` if the given index is fully visible within the viewport.
    #[must_use]
    pub fn is_index_fully_visible(&self, index: usize) -> bool {
        let Some((item_start, item_end)) = self.item_bounds(index) else {
            return false;
        };
        let view_start = self.scroll.offset();
        let view_end = view_start + self.spec.viewport_extent();
        item_start >= view_start && item_end <= view_end
    }

    /// Returns `true` if the given index overlaps the viewport at all.
    #[must_use]
    pub fn is_index_partially_visible(&self, index: usize) -> bool {
        let Some((item_start, item_end)) = self.item_bounds(index) else {
            return false;
        };
        let view_start = self.scroll.offset();
        let view_end = view_start + self.spec.viewport_extent();
        item_end > view_start && item_start < view_end
    }

    /// Clamps the current scroll offset so that the viewport stays within the content.
    ///
    /// This is useful for hosts that want to hard-cap scrolling at the start/end
    /// of content, for example right after the collection shrank.
    pub fn clamp_scroll_to_content(&mut self) {
        let max_offset = self.spec.max_scroll_offset(self.item_count);
        let clamped = self.scroll.clamped_to(max_offset);
        self.set_scroll_offset(clamped.offset());
    }

    /// Scrolls so that item `index` is brought into view using the given alignment.
    ///
    /// Indices past the end are treated as the last item; with no items the
    /// offset resets to zero.
    ///
    /// - [`ScrollAlign::Start`] aligns the start of the item with the start of the viewport.
    /// - [`ScrollAlign::End`] aligns the end of the item with the end of the viewport.
    /// - [`ScrollAlign::Center`] centers the item within the viewport.
    /// - [`ScrollAlign::Nearest`] moves just enough to make the item fully visible, preferring
    ///   the smallest change from the current scroll offset.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) {
        let Some(last) = self.item_count.checked_sub(1) else {
            self.set_scroll_offset(S::zero());
            return;
        };
        let Some((item_start, item_end)) = self.item_bounds(index.min(last)) else {
            return;
        };
        let viewport = self.spec.viewport_extent();

        let new_offset = match align {
            ScrollAlign::Start => item_start,
            ScrollAlign::End => (item_end - viewport).clamp_non_negative(),
            ScrollAlign::Center => {
                let half = S::from_usize(2);
                ((item_start + item_end) / half - viewport / half).clamp_non_negative()
            }
            ScrollAlign::Nearest => {
                let current = self.scroll.offset();
                if item_start >= current && item_end <= current + viewport {
                    current
                } else if item_start < current {
                    item_start
                } else {
                    (item_end - viewport).clamp_non_negative()
                }
            }
        };

        self.set_scroll_offset(new_offset);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{ScrollAlign, VirtualWindow};
    use crate::{ViewportSpec, VisibleRange, WindowError};

    #[test]
    fn visible_window_tracks_scroll_and_viewport() {
        let mut list = VirtualWindow::with_extents(10.0_f32, 50.0, 100).unwrap();

        // At top: items 0..=5 (the row starting at the viewport's bottom edge is included).
        assert_eq!(
            list.visible_range(),
            VisibleRange::Span { start: 0, end: 5 }
        );

        list.scroll_by(10.0);
        assert_eq!(list.first_visible_index(), Some(1));
        assert_eq!(list.last_visible_index(), Some(6));
        assert_eq!(list.visible_indices().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);

        list.set_viewport_extent(25.0).unwrap();
        assert_eq!(list.last_visible_index(), Some(3));

        // Scrolling up is allowed; the top is a hard floor.
        list.scroll_by(-100.0);
        assert_eq!(list.scroll_offset(), 0.0);
        assert_eq!(list.first_visible_index(), Some(0));
    }

    #[test]
    fn rejected_geometry_leaves_the_controller_unchanged() {
        let spec = ViewportSpec::new(50.0_f64, 200.0).unwrap();
        let mut list = VirtualWindow::new(spec, 10);
        let before = list.visible_window();

        assert_eq!(
            list.set_item_extent(0.0),
            Err(WindowError::InvalidItemExtent(0.0))
        );
        assert_eq!(
            list.set_viewport_extent(-3.0),
            Err(WindowError::InvalidViewportExtent(-3.0))
        );
        assert_eq!(list.spec(), &spec);
        assert_eq!(list.visible_window(), before);

        assert!(VirtualWindow::with_extents(-1.0_f64, 10.0, 5).is_err());
    }

    #[test]
    fn shrinking_the_collection_keeps_the_range_valid() {
        let mut list = VirtualWindow::with_extents(50.0_f64, 200.0, 100_000).unwrap();
        list.set_scroll_offset(125_000.0);
        assert_eq!(list.first_visible_index(), Some(2_500));

        list.set_item_count(3);
        assert_eq!(
            list.visible_range(),
            VisibleRange::Span { start: 2, end: 2 }
        );

        list.clamp_scroll_to_content();
        assert_eq!(list.scroll_offset(), 0.0);
        assert_eq!(
            list.visible_range(),
            VisibleRange::Span { start: 0, end: 2 }
        );

        list.set_item_count(0);
        let window = list.visible_window();
        assert!(window.is_empty());
        assert_eq!(window.total_extent, 0.0);
    }

    #[test]
    fn scroll_to_index_alignment_behaves_as_expected() {
        let mut list = VirtualWindow::with_extents(10.0_f32, 30.0, 10).unwrap();

        // Start alignment: item 3 at top → offset 30.
        list.scroll_to_index(3, ScrollAlign::Start);
        assert!((list.scroll_offset() - 30.0_f32).abs() < f32::EPSILON);

        // End alignment: item 3 end at viewport end → offset 10 (viewport covers items 1–3).
        list.scroll_to_index(3, ScrollAlign::End);
        assert!((list.scroll_offset() - 10.0_f32).abs() < f32::EPSILON);

        // Center alignment: item 3 centered in viewport → offset 20.
        list.scroll_to_index(3, ScrollAlign::Center);
        assert!((list.scroll_offset() - 20.0_f32).abs() < f32::EPSILON);

        // Nearest alignment: if already fully visible, should not move.
        let before = list.scroll_offset();
        list.scroll_to_index(3, ScrollAlign::Nearest);
        assert!((list.scroll_offset() - before).abs() < f32::EPSILON);

        // Nearest from below and above.
        list.scroll_to_index(8, ScrollAlign::Nearest);
        assert!((list.scroll_offset() - 60.0_f32).abs() < f32::EPSILON);
        list.scroll_to_index(1, ScrollAlign::Nearest);
        assert!((list.scroll_offset() - 10.0_f32).abs() < f32::EPSILON);

        // Past-the-end indices target the last item.
        list.scroll_to_index(500, ScrollAlign::Start);
        assert!((list.scroll_offset() - 90.0_f32).abs() < f32::EPSILON);

        list.set_item_count(0);
        list.scroll_to_index(4, ScrollAlign::Center);
        assert_eq!(list.scroll_offset(), 0.0);
    }

    #[test]
    fn visibility_queries_for_indices() {
        // 10 items * 10, viewport = 30 → three items visible at a time.
        let mut list = VirtualWindow::with_extents(10.0_f32, 30.0, 10).unwrap();

        assert!(list.is_index_fully_visible(0));
        assert!(list.is_index_fully_visible(2));
        assert!(!list.is_index_fully_visible(3));
        assert!(list.is_index_partially_visible(2));
        assert!(!list.is_index_partially_visible(5));
        assert!(!list.is_index_partially_visible(10));

        // Scroll down by 5: item 0 and item 3 are both cut.
        list.scroll_by(5.0_f32);
        assert!(list.is_index_partially_visible(0));
        assert!(!list.is_index_fully_visible(0));
        assert!(list.is_index_partially_visible(3));
    }

    #[test]
    fn cached_window_only_changes_with_inputs() {
        let mut list = VirtualWindow::with_extents(50.0_f64, 200.0, 100).unwrap();
        let first = list.visible_window();
        list.set_scroll_offset(0.0);
        assert_eq!(list.visible_window(), first);

        list.set_scroll_offset(125.0);
        let scrolled = list.visible_window();
        assert_eq!(scrolled.range, VisibleRange::Span { start: 2, end: 6 });
        assert_eq!(list.visible_window(), scrolled);
    }
}
