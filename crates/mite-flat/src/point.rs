//! 2D points.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use mite_core::{HasScalar, HasX, HasY, PointLike, Scalar};
use num_traits::AsPrimitive;

/// A 2D coordinate pair.
///
/// Arithmetic is componentwise. Scaling by a scalar does not check for a zero
/// divisor: floats produce infinities or NaN, integers panic, exactly as the
/// underlying type does. Equality is exact, including for floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// A point with both coordinates set to `v`.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Point { x: v, y: v }
    }

    /// The origin.
    #[inline]
    pub fn zero() -> Self {
        Point::splat(T::zero())
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Sets the x-coordinate in place.
    ///
    /// Returns the same instance so calls can be chained:
    ///
    /// ```
    /// use mite_flat::Point;
    ///
    /// let mut p = Point::new(0, 0);
    /// p.at_x(5).at_y(10);
    /// assert_eq!(p, Point::new(5, 10));
    /// ```
    #[inline]
    pub fn at_x(&mut self, x: T) -> &mut Self {
        self.x = x;
        self
    }

    /// Sets the y-coordinate in place. See [`Point::at_x`].
    #[inline]
    pub fn at_y(&mut self, y: T) -> &mut Self {
        self.y = y;
        self
    }

    /// Signed distance along the x axis from this point to `other`
    /// (`other.x - self.x`), computed in `other`'s scalar type.
    #[inline]
    pub fn x_from<P>(&self, other: &P) -> P::Scalar
    where
        P: PointLike,
        T: AsPrimitive<P::Scalar>,
    {
        let x: P::Scalar = self.x.as_();
        other.x() - x
    }

    /// Signed distance along the y axis from this point to `other`
    /// (`other.y - self.y`), computed in `other`'s scalar type.
    #[inline]
    pub fn y_from<P>(&self, other: &P) -> P::Scalar
    where
        P: PointLike,
        T: AsPrimitive<P::Scalar>,
    {
        let y: P::Scalar = self.y.as_();
        other.y() - y
    }

    /// Euclidean distance to any point-like value.
    ///
    /// This point is first converted into `other`'s scalar type, so the result
    /// is expressed in that type. Distances into an integer type truncate.
    /// Axis deltas are taken as absolute differences, so unsigned scalars
    /// never underflow.
    pub fn distance_from<P>(&self, other: &P) -> P::Scalar
    where
        P: PointLike,
        T: AsPrimitive<P::Scalar>,
    {
        let x: P::Scalar = self.x.as_();
        let y: P::Scalar = self.y.as_();
        let dx = abs_diff(x, other.x());
        let dy = abs_diff(y, other.y());
        Scalar::sqrt(dx * dx + dy * dy)
    }

    /// Converts both coordinates with `as` semantics.
    ///
    /// Float to integer conversions truncate toward zero and saturate at the
    /// target's bounds.
    #[inline]
    pub fn cast<U>(self) -> Point<U>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        Point::new(self.x.as_(), self.y.as_())
    }
}

impl<T: Scalar> HasScalar for Point<T> {
    type Scalar = T;
}

impl<T: Scalar> HasX for Point<T> {
    #[inline]
    fn x(&self) -> T {
        self.x
    }
}

impl<T: Scalar> HasY for Point<T> {
    #[inline]
    fn y(&self) -> T {
        self.y
    }
}

impl<T: Scalar> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point::new(x, y)
    }
}

impl<T: Scalar> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Scalar> Add for Point<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Point<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> AddAssign for Point<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Point<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Mul<T> for Point<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Div<T> for Point<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Point<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Point<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Point<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point::new(-self.x, -self.y)
    }
}

#[inline]
fn abs_diff<S: Scalar>(a: S, b: S) -> S {
    if a > b { a - b } else { b - a }
}
