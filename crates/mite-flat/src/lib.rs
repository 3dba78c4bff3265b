//! Mite Flat - generic 2D value types
//!
//! This crate provides:
//! - [`Point`]: a coordinate pair
//! - [`Size`]: a (height, width) magnitude, ordered by area
//! - [`Rect`]: an axis-aligned rectangle anchored at its lower-left corner
//! - [`Square`]: an axis-aligned square with a single side length
//!
//! Every type is generic over a [`Scalar`] and works with any integer or
//! float. Cross-type and cross-crate operations go through the capability
//! traits re-exported from `mite-core`, so foreign point types can be passed
//! wherever a point is expected.
//!
//! # Example
//!
//! ```
//! use mite_flat::{Point, Rect, Size};
//!
//! let mut cursor = Point::new(0, 0);
//! cursor.at_x(3).at_y(4);
//!
//! let target = Point::new(0.0_f64, 0.0);
//! assert_eq!(cursor.distance_from(&target), 5.0);
//!
//! let viewport = Rect::from_xywh(0, 0, 10, 10);
//! assert!(viewport.contains(&Point::new(10, 10)));
//! assert_eq!(Size::new(6, 9).divide(3), Ok(Size::new(2, 3)));
//! ```

// Value types
mod point;
mod rect;
mod size;
mod square;

// Conversions to and from other math crates
mod interop;

pub use point::*;
pub use rect::*;
pub use size::*;
pub use square::*;

pub use mite_core::{
    GeometryError, GeometryResult, HasHeight, HasPoint, HasScalar, HasSize, HasWidth, HasX, HasY,
    PointLike, RectLike, Scalar, SizeLike,
};
