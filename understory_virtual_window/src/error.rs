// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised when viewport geometry is unusable.

use core::fmt;

/// Error returned when window geometry is rejected.
///
/// The rejected value is carried as `f64` regardless of the scalar type the
/// caller used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowError {
    /// The per-item extent was zero, negative, NaN, or infinite.
    ///
    /// It is used as a divisor, so it must be finite and strictly positive.
    InvalidItemExtent(f64),
    /// The viewport extent was negative or NaN.
    InvalidViewportExtent(f64),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidItemExtent(extent) => write!(
                f,
                "item extent must be finite and greater than zero; got {extent}"
            ),
            Self::InvalidViewportExtent(extent) => write!(
                f,
                "viewport extent must be zero or greater; got {extent}"
            ),
        }
    }
}

impl core::error::Error for WindowError {}
