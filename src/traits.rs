use core::fmt::Debug;
use num_traits::Float;

/// Trait for the real element types the algorithms operate on.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`.
pub trait FloatScalar: Copy + PartialEq + PartialOrd + Debug + Float {}

impl<T: Copy + PartialEq + PartialOrd + Debug + Float> FloatScalar for T {}

/// Convert a count into `T`.
///
/// Every `usize` is representable (possibly rounded) in `f32`/`f64`; a
/// failed cast would only come from an exotic `Float` impl and maps to NaN.
#[inline]
pub(crate) fn cast<T: FloatScalar>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// `2` in the element type.
#[inline]
pub(crate) fn two<T: FloatScalar>() -> T {
    T::one() + T::one()
}
