//! The numeric bound shared by every mite value type.

use std::fmt::Debug;

use num_traits::{Num, NumCast, Zero};

/// A primitive integer or floating-point number usable as a coordinate.
///
/// The bound is checked at compile time: `Point<String>` or `Size<bool>`
/// simply do not type-check. Implemented for every primitive integer and
/// float. The trait is sealed: other crates cannot implement it.
pub trait Scalar:
    sealed::Sealed + Num + NumCast + Copy + PartialOrd + Default + Debug + Send + Sync + 'static
{
    /// `true` for integer types, where `/` truncates.
    const INTEGRAL: bool;

    /// Square root computed in this type's domain.
    ///
    /// Integer types go through `f64` and truncate the result toward zero.
    fn sqrt(self) -> Self;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns whether `self / divisor` is exact.
    ///
    /// Always `true` for floats. `divisor` must be nonzero.
    #[inline]
    fn divides_exactly(self, divisor: Self) -> bool {
        !Self::INTEGRAL || Zero::is_zero(&(self % divisor))
    }
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_scalar_int {
    ($($ty:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const INTEGRAL: bool = true;

                #[inline]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $ty
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($ty:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const INTEGRAL: bool = false;

                #[inline]
                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(i32: Scalar);
    assert_impl_all!(u8: Scalar);
    assert_impl_all!(f64: Scalar);
    assert_not_impl_any!(bool: Scalar);
    assert_not_impl_any!(char: Scalar);
    assert_impl_all!(u128: sealed::Sealed);
    assert_not_impl_any!(bool: sealed::Sealed);

    #[test]
    fn test_integral_flag() {
        assert!(i64::INTEGRAL);
        assert!(usize::INTEGRAL);
        assert!(!f32::INTEGRAL);
    }

    #[test]
    fn test_integer_sqrt_truncates() {
        assert_eq!(Scalar::sqrt(25_i32), 5);
        assert_eq!(Scalar::sqrt(26_i32), 5);
        assert_eq!(Scalar::sqrt(0_u16), 0);
    }

    #[test]
    fn test_float_sqrt() {
        assert_eq!(Scalar::sqrt(2.25_f64), 1.5);
    }

    #[test]
    fn test_divides_exactly() {
        assert!(9_i32.divides_exactly(3));
        assert!(!9_i32.divides_exactly(2));
        assert!(9.0_f64.divides_exactly(2.0));
    }

    #[test]
    fn test_two() {
        assert_eq!(<u8 as Scalar>::two(), 2);
        assert_eq!(<f32 as Scalar>::two(), 2.0);
    }
}
