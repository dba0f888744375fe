// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for extents, offsets, and scroll positions.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for extents, offsets, and scroll positions.
///
/// This is currently implemented for `f32` and `f64`. The trait is deliberately
/// minimal, geared toward floating-point coordinates, and usable without `std`.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the minimum of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Returns `true` if the value is NaN.
    fn is_nan(self) -> bool;

    /// Returns `true` if the value is negative, including `-0.0`.
    fn is_sign_negative(self) -> bool;

    /// Constructs from a `usize` lossily.
    ///
    /// `f32` holds integers exactly only up to 2^24 and `f64` up to 2^53, so
    /// extents derived from larger counts are rounded.
    fn from_usize(value: usize) -> Self;

    /// Widens to `f64`, used for error reporting and geometry adapters.
    fn to_f64(self) -> f64;

    /// Clamps negative values and NaN to zero.
    fn clamp_non_negative(self) -> Self {
        if self.is_nan() || self.is_sign_negative() {
            Self::zero()
        } else {
            self
        }
    }

    /// Rounds toward negative infinity and converts to `isize`.
    ///
    /// Values outside the `isize` range saturate; NaN maps to `0`.
    fn floor_to_isize(self) -> isize;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            fn zero() -> Self {
                0.0
            }

            fn max(self, other: Self) -> Self {
                Self::max(self, other)
            }

            fn min(self, other: Self) -> Self {
                Self::min(self, other)
            }

            fn is_finite(self) -> bool {
                Self::is_finite(self)
            }

            fn is_nan(self) -> bool {
                Self::is_nan(self)
            }

            fn is_sign_negative(self) -> bool {
                Self::is_sign_negative(self)
            }

            fn from_usize(value: usize) -> Self {
                value as Self
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn floor_to_isize(self) -> isize {
                if self.is_nan() {
                    return 0;
                }
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "Float to int casts saturate; callers clamp the index afterwards"
                )]
                let truncated = self as isize;
                // Truncation rounds toward zero, so negative fractions land one too high.
                if (truncated as Self) > self {
                    truncated.saturating_sub(1)
                } else {
                    truncated
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(2.5_f64.floor_to_isize(), 2);
        assert_eq!(2.0_f64.floor_to_isize(), 2);
        assert_eq!(0.0_f64.floor_to_isize(), 0);
        assert_eq!((-0.5_f64).floor_to_isize(), -1);
        assert_eq!((-2.0_f32).floor_to_isize(), -2);
        assert_eq!((-2.25_f32).floor_to_isize(), -3);
    }

    #[test]
    fn floor_saturates_and_maps_nan_to_zero() {
        assert_eq!(f64::INFINITY.floor_to_isize(), isize::MAX);
        assert_eq!(f64::NEG_INFINITY.floor_to_isize(), isize::MIN);
        assert_eq!(f32::NAN.floor_to_isize(), 0);
    }

    #[test]
    fn clamp_non_negative_handles_negatives_and_nan() {
        assert_eq!((-3.0_f32).clamp_non_negative(), 0.0);
        assert_eq!(f64::NAN.clamp_non_negative(), 0.0);
        assert_eq!(7.5_f64.clamp_non_negative(), 7.5);
    }
}
