//! Mite - strongly-typed 2D geometry primitives
//!
//! Mite provides small `Copy` value types for 2D coordinates and
//! dimensions, generic over any primitive integer or float:
//!
//! - **`flat::Point`**: coordinate pairs with componentwise arithmetic and
//!   cross-type distance
//! - **`flat::Size`**: (height, width) magnitudes with checked division and
//!   area ordering
//! - **`flat::Rect`** / **`flat::Square`**: axis-aligned boxes with inclusive
//!   containment, overlap and fit tests
//!
//! Generic operations accept anything exposing the right shape through the
//! capability traits in [`core::capability`], so point and size types from
//! other crates plug in without wrappers.
//!
//! # Quick Start
//!
//! ```
//! use mite::prelude::*;
//!
//! let mut p = Point::new(0, 0);
//! p.at_x(3).at_y(4);
//! assert_eq!(p.distance_from(&Point::new(0.0, 0.0)), 5.0);
//!
//! let screen = Rect::from_xywh(0, 0, 10, 10);
//! assert!(screen.contains(&Point::new(10, 10)));
//! assert!(screen.intersects(&Rect::from_xywh(10, 0, 10, 10)));
//! assert_eq!(Square::new(Point::new(0, 0), 4).area(), 16);
//!
//! assert!(Size::new(5, 9).divide(2).is_err());
//! ```
//!
//! # Features
//!
//! - `glam` (default): `glam` vectors are point-like and convert to and from
//!   `f32` points and sizes
//! - `mint` (default): `mint` points and vectors are point-like and convert
//!   losslessly
//! - `bytemuck` (default): every value type is `Pod`

// Re-export sub-crates
pub use mite_core as core;
pub use mite_flat as flat;

pub use mite_core::logging;
pub use mite_core::{GeometryError, GeometryResult, Scalar};

/// Commonly used types and traits.
pub mod prelude {
    pub use mite_core::{
        GeometryError, GeometryResult, HasHeight, HasPoint, HasScalar, HasSize, HasWidth, HasX,
        HasY, PointLike, RectLike, Scalar, SizeLike, impl_point_like, impl_size_like,
    };
    pub use mite_flat::{ByArea, Point, Rect, Size, Square};
}
