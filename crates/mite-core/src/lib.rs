//! Mite Core
//!
//! This crate contains the pieces shared by every mite geometry crate:
//!
//! - [`Scalar`]: the numeric bound every coordinate type must satisfy
//! - [`capability`]: structural "has x / has width / has point" traits
//! - [`GeometryError`]: the domain error raised by checked operations
//! - [`logging`]: an opt-in `tracing` subscriber for applications and tests

pub mod capability;
pub mod config;
pub mod error;
pub mod logging;
pub mod numeric;

pub use capability::{
    HasHeight, HasPoint, HasScalar, HasSize, HasWidth, HasX, HasY, PointLike, RectLike, SizeLike,
};
pub use error::{GeometryError, GeometryResult};
pub use numeric::Scalar;
