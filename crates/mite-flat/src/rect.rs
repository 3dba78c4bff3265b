//! Axis-aligned rectangles.

use std::fmt;

use mite_core::{HasPoint, HasScalar, HasSize, PointLike, RectLike, Scalar, SizeLike};
use num_traits::AsPrimitive;

use crate::{Point, Size};

/// An axis-aligned rectangle.
///
/// `origin` is the lower-left corner; the rectangle spans from `origin` to
/// `origin + (width, height)`, with y growing upwards. Predicates assume
/// non-negative dimensions.
///
/// Containment, overlap and fit tests accept anything [`RectLike`] or
/// [`PointLike`] with the same scalar, so a [`Rect`] can be tested directly
/// against a [`crate::Square`] or a foreign point type.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T: Scalar> {
    pub origin: Point<T>,
    pub size: Size<T>,
}

impl<T: Scalar> Rect<T> {
    /// Creates a rectangle from an origin and a size.
    #[inline]
    pub const fn new(origin: Point<T>, size: Size<T>) -> Self {
        Rect { origin, size }
    }

    /// Creates a rectangle from an origin and separate dimensions.
    #[inline]
    pub const fn from_origin_wh(origin: Point<T>, width: T, height: T) -> Self {
        Rect::new(origin, Size::new(height, width))
    }

    /// Creates a rectangle from origin coordinates and a size.
    #[inline]
    pub const fn from_xy_size(x: T, y: T, size: Size<T>) -> Self {
        Rect::new(Point::new(x, y), size)
    }

    /// Creates a rectangle from origin coordinates and separate dimensions.
    #[inline]
    pub const fn from_xywh(x: T, y: T, width: T, height: T) -> Self {
        Rect::new(Point::new(x, y), Size::new(height, width))
    }

    #[inline]
    pub fn origin(&self) -> Point<T> {
        self.origin
    }

    #[inline]
    pub fn size(&self) -> Size<T> {
        self.size
    }

    #[inline]
    pub fn x(&self) -> T {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> T {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> T {
        self.size.height
    }

    #[inline]
    pub fn left(&self) -> T {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> T {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.origin.y
    }

    #[inline]
    pub fn top(&self) -> T {
        self.origin.y + self.size.height
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

    /// Replaces the size, returning the same instance.
    #[inline]
    pub fn resize(&mut self, size: Size<T>) -> &mut Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn area(&self) -> T {
        self.size.area()
    }

    #[inline]
    pub fn perimeter(&self) -> T {
        T::two() * (self.size.width + self.size.height)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.size.width == self.size.height
    }

    /// Returns `true` if `point` lies inside the rectangle or on its boundary.
    pub fn contains<P>(&self, point: &P) -> bool
    where
        P: PointLike<Scalar = T>,
    {
        let (x, y) = (point.x(), point.y());
        x >= self.left() && x <= self.right() && y >= self.bottom() && y <= self.top()
    }

    /// Returns `true` unless the two boxes are strictly separated on an axis.
    ///
    /// Rectangles that only share an edge or a corner intersect.
    pub fn intersects<R>(&self, other: &R) -> bool
    where
        R: RectLike<Scalar = T>,
    {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.bottom() <= other.top()
            && other.bottom() <= self.top()
    }

    /// Returns `true` if `other` lies entirely within this rectangle.
    pub fn can_fit<R>(&self, other: &R) -> bool
    where
        R: RectLike<Scalar = T>,
    {
        other.left() >= self.left()
            && other.bottom() >= self.bottom()
            && other.right() <= self.right()
            && other.top() <= self.top()
    }

    /// Returns `true` if a box of `size` would fit, ignoring position.
    #[inline]
    pub fn can_fit_size<S>(&self, size: &S) -> bool
    where
        S: SizeLike<Scalar = T>,
    {
        self.size.can_fit(size)
    }

    /// The overlapping region, if the rectangles intersect.
    ///
    /// Rectangles that only touch produce a zero-width or zero-height result.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let left = partial_max(self.left(), other.left());
        let bottom = partial_max(self.bottom(), other.bottom());
        let right = partial_min(self.right(), other.right());
        let top = partial_min(self.top(), other.top());
        Some(Rect::from_xywh(left, bottom, right - left, top - bottom))
    }

    /// The smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Self) -> Self {
        let left = partial_min(self.left(), other.left());
        let bottom = partial_min(self.bottom(), other.bottom());
        let right = partial_max(self.right(), other.right());
        let top = partial_max(self.top(), other.top());
        Rect::from_xywh(left, bottom, right - left, top - bottom)
    }

    /// Same as [`Rect::origin`].
    #[inline]
    pub fn bottom_left(&self) -> Point<T> {
        self.origin
    }

    #[inline]
    pub fn bottom_right(&self) -> Point<T> {
        Point::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn top_left(&self) -> Point<T> {
        Point::new(self.left(), self.top())
    }

    #[inline]
    pub fn top_right(&self) -> Point<T> {
        Point::new(self.right(), self.top())
    }

    /// The midpoint. Integer rectangles round toward the origin.
    #[inline]
    pub fn center(&self) -> Point<T> {
        let two = T::two();
        Point::new(
            self.origin.x + self.size.width / two,
            self.origin.y + self.size.height / two,
        )
    }

    /// Multiplies the size by `factor`, keeping the origin.
    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        Rect::new(self.origin, self.size * factor)
    }

    /// Shifts the origin by `offset`, keeping the size.
    #[inline]
    pub fn translate(&self, offset: Point<T>) -> Self {
        Rect::new(self.origin + offset, self.size)
    }

    /// Grows the rectangle by `amount` in all four directions.
    ///
    /// The origin moves by `-amount` on both axes and each dimension grows by
    /// `2 * amount`. A negative `amount` shrinks the rectangle.
    pub fn expand(&self, amount: T) -> Self {
        let grown = Rect::new(
            self.origin - Point::splat(amount),
            self.size + Size::square(T::two() * amount),
        );
        grown.trace_if_inverted("expand")
    }

    /// Shrinks the rectangle by `amount` in all four directions.
    ///
    /// Equivalent to `expand(-amount)`, but also usable with unsigned scalars.
    pub fn contract(&self, amount: T) -> Self {
        let shrunk = Rect::new(
            self.origin + Point::splat(amount),
            self.size - Size::square(T::two() * amount),
        );
        shrunk.trace_if_inverted("contract")
    }

    /// Converts origin and size with `as` semantics.
    #[inline]
    pub fn cast<U>(self) -> Rect<U>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        Rect::new(self.origin.cast(), self.size.cast())
    }

    fn trace_if_inverted(self, op: &'static str) -> Self {
        let zero = T::zero();
        if self.size.width < zero || self.size.height < zero {
            tracing::trace!(
                op,
                width = ?self.size.width,
                height = ?self.size.height,
                "rectangle has a negative dimension"
            );
        }
        self
    }
}

#[inline]
fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl<T: Scalar> HasScalar for Rect<T> {
    type Scalar = T;
}

impl<T: Scalar> HasPoint for Rect<T> {
    type Point = Point<T>;

    #[inline]
    fn point(&self) -> Point<T> {
        self.origin
    }
}

impl<T: Scalar> HasSize for Rect<T> {
    type Size = Size<T>;

    #[inline]
    fn size(&self) -> Size<T> {
        self.size
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.origin, self.size)
    }
}
