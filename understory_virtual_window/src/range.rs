// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inclusive index ranges over a dense item strip.

use core::ops::{Range, RangeInclusive};

/// The items that intersect the viewport.
///
/// Both bounds of a [`VisibleRange::Span`] are inclusive and always index
/// existing items of the collection the range was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisibleRange {
    /// There are no items to render.
    #[default]
    Empty,
    /// Items `start..=end` should be rendered.
    Span {
        /// First visible index (inclusive).
        start: usize,
        /// Last visible index (inclusive).
        end: usize,
    },
}

impl VisibleRange {
    /// Returns `true` if no items are visible.
    ///
    /// A hand-built span with `start > end` is treated as empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Span { start, end } => *start > *end,
        }
    }

    /// First visible index, if any.
    #[must_use]
    pub const fn start(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Span { start, .. } => Some(*start),
        }
    }

    /// Last visible index, if any.
    #[must_use]
    pub const fn end(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Span { end, .. } => Some(*end),
        }
    }

    /// Number of visible items.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Span { start, end } if *start <= *end => {
                end.saturating_sub(*start).saturating_add(1)
            }
            Self::Span { .. } => 0,
        }
    }

    /// Returns `true` if `index` falls inside the range.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        match self {
            Self::Empty => false,
            Self::Span { start, end } => *start <= index && index <= *end,
        }
    }

    /// Visible indices as a half-open range, suitable for iteration.
    ///
    /// Returns `0..0` when empty. A span ending at `usize::MAX` stops one short.
    #[must_use]
    pub const fn indices(&self) -> Range<usize> {
        match self {
            Self::Empty => 0..0,
            Self::Span { start, end } => *start..end.saturating_add(1),
        }
    }

    /// Visible indices as an inclusive range, or `None` when empty.
    #[must_use]
    pub const fn as_range_inclusive(&self) -> Option<RangeInclusive<usize>> {
        match self {
            Self::Span { start, end } if *start <= *end => Some(*start..=*end),
            _ => None,
        }
    }

    /// Returns the visible part of `items`.
    ///
    /// If `items` is shorter than the collection this range was computed for,
    /// the result is truncated rather than panicking.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.indices();
        let end = end.min(items.len());
        items.get(start..end).unwrap_or(&[])
    }

    /// Iterates the visible part of `items`, pairing each item with its
    /// absolute index in the collection.
    pub fn enumerate<'a, T>(
        &self,
        items: &'a [T],
    ) -> impl Iterator<Item = (usize, &'a T)> + use<'a, T> {
        let first = self.start().unwrap_or(0);
        self.slice(items)
            .iter()
            .enumerate()
            .map(move |(i, item)| (first + i, item))
    }
}
