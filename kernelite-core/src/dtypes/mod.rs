//! Module for data type related traits and enums. Contains things like [Unit], [Dtype], and [DType].
//!
//! Kernels are written once, generic over [Dtype], and registered once per
//! concrete element type. The set of element types is closed: `f32`, `f64`,
//! and `f16` when the `f16` feature is enabled.
//!
//! When the `f16` feature is enabled, this exports the [f16] type.

#[cfg(feature = "f16")]
pub use half::f16;

use crate::{registry::Precision, tensor::Buffer};

/// Represents a unit type, but no arithmetic.
pub trait Unit:
    'static
    + Copy
    + Clone
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + std::marker::Unpin
{
    const ONE: Self;
}

macro_rules! unit {
    ($type:ty, $one:expr) => {
        impl Unit for $type {
            const ONE: Self = $one;
        }
    };
}

unit!(f32, 1.0);
unit!(f64, 1.0);
#[cfg(feature = "f16")]
unit!(f16, f16::ONE);

/// Runtime tag naming the element type stored in a [Buffer].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    F32,
    F64,
    #[cfg(feature = "f16")]
    F16,
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            #[cfg(feature = "f16")]
            Self::F16 => f.write_str("f16"),
        }
    }
}

/// Represents a data type or element of an array that can have
/// arithmatic operations applied to it, and that a [Buffer] can hold.
pub trait Dtype:
    Unit
    + std::ops::Add<Self, Output = Self>
    + std::ops::Sub<Self, Output = Self>
    + std::ops::Mul<Self, Output = Self>
    + std::ops::Div<Self, Output = Self>
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::MulAssign
    + std::ops::DivAssign
    + num_traits::FromPrimitive
    + num_traits::ToPrimitive
{
    /// The tag stored alongside a buffer of this type.
    const DTYPE: DType;

    /// The precision kernels over this type are registered under.
    const PRECISION: Precision;

    /// Borrows `buf` as a slice of `Self`, or `None` if it holds another type.
    fn buffer_ref(buf: &Buffer) -> Option<&[Self]>;

    /// Mutably borrows `buf` as a slice of `Self`, or `None` if it holds another type.
    fn buffer_mut(buf: &mut Buffer) -> Option<&mut [Self]>;

    fn into_buffer(data: std::vec::Vec<Self>) -> Buffer;
}

macro_rules! dtype {
    ($type:ty, $variant:ident, $precision:ident) => {
        impl Dtype for $type {
            const DTYPE: DType = DType::$variant;
            const PRECISION: Precision = Precision::$precision;

            #[inline]
            fn buffer_ref(buf: &Buffer) -> Option<&[Self]> {
                match buf {
                    Buffer::$variant(data) => Some(data.as_slice()),
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }

            #[inline]
            fn buffer_mut(buf: &mut Buffer) -> Option<&mut [Self]> {
                match buf {
                    Buffer::$variant(data) => Some(data.as_mut_slice()),
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }

            #[inline]
            fn into_buffer(data: std::vec::Vec<Self>) -> Buffer {
                Buffer::$variant(data)
            }
        }
    };
}

dtype!(f32, F32, Float);
dtype!(f64, F64, Double);
#[cfg(feature = "f16")]
dtype!(f16, F16, Half);
