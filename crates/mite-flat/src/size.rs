//! 2D magnitudes.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use mite_core::{GeometryError, GeometryResult, HasHeight, HasScalar, HasWidth, Scalar, SizeLike};
use num_traits::AsPrimitive;

/// A (height, width) pair.
///
/// Negative dimensions are representable. Division is checked, see
/// [`Size::divide`]. Sizes have no `PartialOrd` of their own; compare them by
/// capacity with [`Size::area_cmp`] or [`Size::by_area`].
///
/// ```
/// use mite_flat::Size;
///
/// let wide = Size::new(2, 10);
/// assert_ne!(wide, Size::new(4, 5));
/// assert!(wide.by_area() == Size::new(4, 5).by_area());
/// assert!(wide.by_area() > Size::new(3, 5).by_area());
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T: Scalar> {
    pub height: T,
    pub width: T,
}

impl<T: Scalar> Size<T> {
    #[inline]
    pub const fn new(height: T, width: T) -> Self {
        Size { height, width }
    }

    /// A size with equal height and width.
    #[inline]
    pub const fn square(len: T) -> Self {
        Size {
            height: len,
            width: len,
        }
    }

    #[inline]
    pub fn height(&self) -> T {
        self.height
    }

    #[inline]
    pub fn width(&self) -> T {
        self.width
    }

    /// Sets the height in place, returning the same instance for chaining.
    #[inline]
    pub fn of_height(&mut self, height: T) -> &mut Self {
        self.height = height;
        self
    }

    /// Sets the width in place, returning the same instance for chaining.
    #[inline]
    pub fn of_width(&mut self, width: T) -> &mut Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn area(&self) -> T {
        self.height * self.width
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height.is_zero() || self.width.is_zero()
    }

    /// Returns `true` if `other` fits inside this size, checking each
    /// dimension independently.
    pub fn can_fit<S>(&self, other: &S) -> bool
    where
        S: SizeLike<Scalar = T>,
    {
        self.height >= other.height() && self.width >= other.width()
    }

    /// Divides both dimensions by `divisor`.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::DivisionByZero`] if `divisor` is zero.
    /// - [`GeometryError::InexactDivision`] if `T` is an integer type and
    ///   either dimension is not a multiple of `divisor`. Magnitudes are never
    ///   silently truncated.
    ///
    /// ```
    /// use mite_flat::{GeometryError, Size};
    ///
    /// assert_eq!(Size::new(6, 9).divide(3), Ok(Size::new(2, 3)));
    /// assert!(Size::new(5, 9).divide(2).is_err());
    /// assert_eq!(Size::new(6, 9).divide(0), Err(GeometryError::DivisionByZero));
    /// assert_eq!(Size::new(5.0, 9.0).divide(2.0), Ok(Size::new(2.5, 4.5)));
    /// ```
    pub fn divide(self, divisor: T) -> GeometryResult<Self> {
        if divisor.is_zero() {
            tracing::debug!(
                height = ?self.height,
                width = ?self.width,
                "rejected size division by zero"
            );
            return Err(GeometryError::DivisionByZero);
        }

        if !self.height.divides_exactly(divisor) || !self.width.divides_exactly(divisor) {
            tracing::debug!(
                height = ?self.height,
                width = ?self.width,
                divisor = ?divisor,
                "rejected inexact size division"
            );
            return Err(GeometryError::inexact_division(
                self.height,
                self.width,
                divisor,
            ));
        }

        Ok(Size::new(self.height / divisor, self.width / divisor))
    }

    /// In-place [`Size::divide`]. On error `self` is left unchanged.
    pub fn divide_assign(&mut self, divisor: T) -> GeometryResult<&mut Self> {
        *self = self.divide(divisor)?;
        Ok(self)
    }

    /// Compares two sizes by area.
    ///
    /// Differently shaped sizes with the same area compare as `Equal`.
    #[inline]
    pub fn area_cmp(&self, other: &Self) -> Option<Ordering> {
        self.area().partial_cmp(&other.area())
    }

    /// Wraps this size in a view whose comparison operators work on area.
    ///
    /// ```
    /// use mite_flat::Size;
    ///
    /// // 2x10 holds more than 3x5, even though it is shorter.
    /// assert!(Size::new(2, 10).by_area() > Size::new(3, 5).by_area());
    /// assert!(Size::new(2, 10).by_area() == Size::new(4, 5).by_area());
    /// ```
    #[inline]
    pub fn by_area(self) -> ByArea<T> {
        ByArea(self)
    }

    /// Converts both dimensions with `as` semantics.
    #[inline]
    pub fn cast<U>(self) -> Size<U>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        Size::new(self.height.as_(), self.width.as_())
    }
}

/// A [`Size`] ordered and compared by area.
///
/// Equality through this view is also by area, which keeps `==` consistent
/// with `<`/`>`. Use plain `Size` equality for structural comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByArea<T: Scalar>(pub Size<T>);

impl<T: Scalar> PartialEq for ByArea<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.area() == other.0.area()
    }
}

impl<T: Scalar> PartialOrd for ByArea<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.area_cmp(&other.0)
    }
}

impl<T: Scalar + Eq> Eq for ByArea<T> {}

impl<T: Scalar + Ord> Ord for ByArea<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.area().cmp(&other.0.area())
    }
}

impl<T: Scalar> HasScalar for Size<T> {
    type Scalar = T;
}

impl<T: Scalar> HasWidth for Size<T> {
    #[inline]
    fn width(&self) -> T {
        self.width
    }
}

impl<T: Scalar> HasHeight for Size<T> {
    #[inline]
    fn height(&self) -> T {
        self.height
    }
}

/// Builds a size from a `(height, width)` tuple.
impl<T: Scalar> From<(T, T)> for Size<T> {
    fn from((height, width): (T, T)) -> Self {
        Size::new(height, width)
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl<T: Scalar> Add for Size<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Size::new(self.height + rhs.height, self.width + rhs.width)
    }
}

impl<T: Scalar> Sub for Size<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Size::new(self.height - rhs.height, self.width - rhs.width)
    }
}

impl<T: Scalar> AddAssign for Size<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Size<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Mul<T> for Size<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Size::new(self.height * rhs, self.width * rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Size<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}
