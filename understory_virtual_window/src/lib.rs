// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_window --heading-base-level=0

//! Understory Virtual Window: fixed-extent windowing for long lists.
//!
//! This crate answers one question for a scrolling host: given where the user
//! has scrolled, which rows of a uniformly sized list actually need to exist?
//! Rendering only those rows, plus a spacer sized to the full list, makes a
//! list of 100,000 rows cost the same as a list of 10.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for extents, offsets,
//!   and scroll positions.
//! - [`compute_visible_range`]: a pure, constant-time function from
//!   `(offset, item_extent, viewport_extent, item_count)` to a [`VisibleWindow`].
//! - [`VisibleWindow`]: the inclusive [`VisibleRange`] of rows to render plus
//!   the total extent for the spacer, and helpers to place rows around it.
//! - [`ViewportSpec`] and [`ScrollState`]: validated geometry and an explicit
//!   scroll position, passed in on every computation.
//! - [`VirtualWindow`]: a small controller that caches the most recent window
//!   and provides index-based scrolling via [`ScrollAlign`].
//!
//! The computation holds no state, so it can be called from any number of
//! rendering contexts. It does not throttle scroll events; hosts should call it
//! at most once per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_virtual_window::{VisibleRange, compute_visible_range};
//!
//! // 100,000 rows of 50 logical pixels in a 200 pixel viewport, scrolled to 125.
//! let window = compute_visible_range(125.0, 50.0, 200.0, 100_000)?;
//! assert_eq!(window.range, VisibleRange::Span { start: 2, end: 6 });
//! assert_eq!(window.total_extent, 5_000_000.0);
//!
//! // Host frameworks would now size a spacer to `total_extent` and render
//! // rows `2..=6` at `window.item_offset(index)`.
//! # Ok::<(), understory_virtual_window::WindowError>(())
//! ```
//!
//! ## Driving a controller
//!
//! ```rust
//! use understory_virtual_window::{ScrollAlign, VirtualWindow};
//!
//! let items: Vec<String> = (0..1_000).map(|i| format!("row {i}")).collect();
//! let mut list = VirtualWindow::with_extents(20.0_f32, 100.0, items.len())?;
//!
//! list.scroll_to_index(500, ScrollAlign::Start);
//! let window = list.visible_window();
//! let rendered: Vec<_> = window.range.enumerate(&items).collect();
//! assert_eq!(rendered.first().map(|(i, _)| *i), Some(500));
//! assert_eq!(rendered.len(), 6);
//! # Ok::<(), understory_virtual_window::WindowError>(())
//! ```
//!
//! Invalid geometry (a non-positive item extent, a negative viewport) is
//! rejected up front with a [`WindowError`]. Everything else, including an
//! empty collection or a scroll offset left over from a longer list, is
//! resolved by clamping.
//!
//! With the `kurbo` feature, [`VisibleWindow`] can also produce row and spacer
//! rectangles.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod error;
#[cfg(feature = "kurbo")]
mod geometry;
mod range;
mod scalar;
mod scroll;
mod viewport;
mod virtual_window;
mod window;

pub use error::WindowError;
pub use range::VisibleRange;
pub use scalar::Scalar;
pub use scroll::ScrollState;
pub use viewport::ViewportSpec;
pub use virtual_window::{ScrollAlign, VirtualWindow};
pub use window::{VisibleWindow, compute_visible_range};
