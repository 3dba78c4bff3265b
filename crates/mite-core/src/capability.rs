//! Structural capability traits.
//!
//! Generic mite operations do not ask for a `mite_flat::Point`; they ask for
//! "something with an x and a y". Any type can satisfy that by exposing the
//! right accessors, without depending on the mite value types at all:
//!
//! ```
//! use mite_core::{impl_point_like, PointLike};
//!
//! struct Cursor {
//!     col: i32,
//!     row: i32,
//! }
//!
//! impl_point_like!(Cursor, i32, x => col, y => row);
//!
//! fn manhattan<P: PointLike<Scalar = i32>>(p: &P) -> i32 {
//!     p.x().abs() + p.y().abs()
//! }
//!
//! assert_eq!(manhattan(&Cursor { col: -3, row: 4 }), 7);
//! ```
//!
//! The composite traits ([`PointLike`], [`SizeLike`], [`RectLike`]) have
//! blanket implementations; nothing ever implements them by hand.

use crate::numeric::Scalar;

/// The coordinate type shared by every accessor of a shape.
pub trait HasScalar {
    type Scalar: Scalar;
}

/// Exposes an x-coordinate.
pub trait HasX: HasScalar {
    fn x(&self) -> Self::Scalar;
}

/// Exposes a y-coordinate.
pub trait HasY: HasScalar {
    fn y(&self) -> Self::Scalar;
}

/// Exposes a width.
pub trait HasWidth: HasScalar {
    fn width(&self) -> Self::Scalar;
}

/// Exposes a height.
pub trait HasHeight: HasScalar {
    fn height(&self) -> Self::Scalar;
}

/// Exposes a nested point, typically an origin.
pub trait HasPoint: HasScalar {
    type Point: PointLike<Scalar = Self::Scalar>;

    fn point(&self) -> Self::Point;
}

/// Exposes a nested size.
pub trait HasSize: HasScalar {
    type Size: SizeLike<Scalar = Self::Scalar>;

    fn size(&self) -> Self::Size;
}

/// Anything with both an x and a y coordinate.
pub trait PointLike: HasX + HasY {}

impl<P: HasX + HasY + ?Sized> PointLike for P {}

/// Anything with both a width and a height.
pub trait SizeLike: HasWidth + HasHeight {
    /// `height * width`.
    fn area(&self) -> Self::Scalar {
        self.height() * self.width()
    }
}

impl<S: HasWidth + HasHeight + ?Sized> SizeLike for S {}

/// An axis-aligned box described by a lower-left point and a size.
///
/// The edge accessors are derived from [`HasPoint`] and [`HasSize`], so
/// generic containment and overlap tests can be written once for every
/// rectangle-shaped type.
pub trait RectLike: HasPoint + HasSize {
    fn left(&self) -> Self::Scalar {
        self.point().x()
    }

    fn bottom(&self) -> Self::Scalar {
        self.point().y()
    }

    fn right(&self) -> Self::Scalar {
        self.point().x() + self.size().width()
    }

    fn top(&self) -> Self::Scalar {
        self.point().y() + self.size().height()
    }
}

impl<R: HasPoint + HasSize + ?Sized> RectLike for R {}

/// Adopts a struct as [`PointLike`] by naming its coordinate fields.
///
/// Fields default to `x` and `y`:
///
/// ```
/// use mite_core::{impl_point_like, HasX, HasY};
///
/// struct Vertex {
///     x: f32,
///     y: f32,
/// }
///
/// struct GeoFix {
///     lon: f64,
///     lat: f64,
/// }
///
/// impl_point_like!(Vertex, f32);
/// impl_point_like!(GeoFix, f64, x => lon, y => lat);
///
/// let fix = GeoFix { lon: 4.9, lat: 52.4 };
/// assert_eq!(fix.x(), 4.9);
/// assert_eq!(Vertex { x: 1.0, y: 2.0 }.y(), 2.0);
/// ```
#[macro_export]
macro_rules! impl_point_like {
    ($ty:ty, $scalar:ty) => {
        $crate::impl_point_like!($ty, $scalar, x => x, y => y);
    };
    ($ty:ty, $scalar:ty, x => $x:ident, y => $y:ident) => {
        impl $crate::HasScalar for $ty {
            type Scalar = $scalar;
        }

        impl $crate::HasX for $ty {
            #[inline]
            fn x(&self) -> $scalar {
                self.$x
            }
        }

        impl $crate::HasY for $ty {
            #[inline]
            fn y(&self) -> $scalar {
                self.$y
            }
        }
    };
}

/// Adopts a struct as [`SizeLike`] by naming its dimension fields.
///
/// Fields default to `width` and `height`.
#[macro_export]
macro_rules! impl_size_like {
    ($ty:ty, $scalar:ty) => {
        $crate::impl_size_like!($ty, $scalar, width => width, height => height);
    };
    ($ty:ty, $scalar:ty, width => $w:ident, height => $h:ident) => {
        impl $crate::HasScalar for $ty {
            type Scalar = $scalar;
        }

        impl $crate::HasWidth for $ty {
            #[inline]
            fn width(&self) -> $scalar {
                self.$w
            }
        }

        impl $crate::HasHeight for $ty {
            #[inline]
            fn height(&self) -> $scalar {
                self.$h
            }
        }
    };
}

#[cfg(feature = "mint")]
mod mint_impls {
    use super::*;

    impl<T: Scalar> HasScalar for mint::Point2<T> {
        type Scalar = T;
    }

    impl<T: Scalar> HasX for mint::Point2<T> {
        #[inline]
        fn x(&self) -> T {
            self.x
        }
    }

    impl<T: Scalar> HasY for mint::Point2<T> {
        #[inline]
        fn y(&self) -> T {
            self.y
        }
    }

    impl<T: Scalar> HasScalar for mint::Vector2<T> {
        type Scalar = T;
    }

    impl<T: Scalar> HasX for mint::Vector2<T> {
        #[inline]
        fn x(&self) -> T {
            self.x
        }
    }

    impl<T: Scalar> HasY for mint::Vector2<T> {
        #[inline]
        fn y(&self) -> T {
            self.y
        }
    }
}

#[cfg(feature = "glam")]
mod glam_impls {
    crate::impl_point_like!(glam::Vec2, f32);
    crate::impl_point_like!(glam::DVec2, f64);
    crate::impl_point_like!(glam::IVec2, i32);
    crate::impl_point_like!(glam::UVec2, u32);
}
