//! Axis-aligned squares.

use mite_core::{HasPoint, HasScalar, HasSize, PointLike, RectLike, Scalar, SizeLike};
use num_traits::AsPrimitive;

use crate::{Point, Rect, Size};

/// An axis-aligned square anchored at its lower-left corner.
///
/// Behaves like a [`Rect`] whose width and height are both `len`, and is
/// [`RectLike`] so the two can be tested against each other.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Square<T: Scalar> {
    pub origin: Point<T>,
    pub len: T,
}

impl<T: Scalar> Square<T> {
    #[inline]
    pub const fn new(origin: Point<T>, len: T) -> Self {
        Square { origin, len }
    }

    #[inline]
    pub const fn from_xy(x: T, y: T, len: T) -> Self {
        Square::new(Point::new(x, y), len)
    }

    #[inline]
    pub fn origin(&self) -> Point<T> {
        self.origin
    }

    #[inline]
    pub fn x(&self) -> T {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.origin.y
    }

    /// The side length.
    #[inline]
    pub fn length(&self) -> T {
        self.len
    }

    /// Sets the side length, returning the same instance.
    #[inline]
    pub fn set_length(&mut self, len: T) -> &mut Self {
        self.len = len;
        self
    }

    /// Moves the origin's x-coordinate, returning the same instance.
    #[inline]
    pub fn at_x(&mut self, x: T) -> &mut Self {
        self.origin.at_x(x);
        self
    }

    /// Moves the origin's y-coordinate, returning the same instance.
    #[inline]
    pub fn at_y(&mut self, y: T) -> &mut Self {
        self.origin.at_y(y);
        self
    }

    /// Moves the origin, returning the same instance.
    #[inline]
    pub fn at(&mut self, origin: Point<T>) -> &mut Self {
        self.origin = origin;
        self
    }

    /// A size with height and width both equal to the side length.
    #[inline]
    pub fn size(&self) -> Size<T> {
        Size::square(self.len)
    }

    #[inline]
    pub fn area(&self) -> T {
        self.len * self.len
    }

    #[inline]
    pub fn perimeter(&self) -> T {
        T::two() * T::two() * self.len
    }

    #[inline]
    pub fn center(&self) -> Point<T> {
        self.to_rect().center()
    }

    /// The equivalent rectangle.
    #[inline]
    pub fn to_rect(&self) -> Rect<T> {
        Rect::new(self.origin, self.size())
    }

    /// Returns `true` if `point` lies inside the square or on its boundary.
    #[inline]
    pub fn contains<P>(&self, point: &P) -> bool
    where
        P: PointLike<Scalar = T>,
    {
        self.to_rect().contains(point)
    }

    /// Returns `true` unless the two boxes are strictly separated on an axis.
    #[inline]
    pub fn intersects<R>(&self, other: &R) -> bool
    where
        R: RectLike<Scalar = T>,
    {
        self.to_rect().intersects(other)
    }

    /// Returns `true` if `other` lies entirely within this square.
    #[inline]
    pub fn can_fit<R>(&self, other: &R) -> bool
    where
        R: RectLike<Scalar = T>,
    {
        self.to_rect().can_fit(other)
    }

    /// Returns `true` if a box of `size` would fit, ignoring position.
    #[inline]
    pub fn can_fit_size<S>(&self, size: &S) -> bool
    where
        S: SizeLike<Scalar = T>,
    {
        self.size().can_fit(size)
    }

    /// Converts origin and side length with `as` semantics.
    #[inline]
    pub fn cast<U>(self) -> Square<U>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        Square::new(self.origin.cast(), self.len.as_())
    }
}

impl<T: Scalar> HasScalar for Square<T> {
    type Scalar = T;
}

impl<T: Scalar> HasPoint for Square<T> {
    type Point = Point<T>;

    #[inline]
    fn point(&self) -> Point<T> {
        self.origin
    }
}

impl<T: Scalar> HasSize for Square<T> {
    type Size = Size<T>;

    #[inline]
    fn size(&self) -> Size<T> {
        Size::square(self.len)
    }
}

impl<T: Scalar> From<Square<T>> for Rect<T> {
    fn from(square: Square<T>) -> Self {
        square.to_rect()
    }
}
