//! Structural capability tests.
//!
//! Foreign types that never mention the mite value types are adopted with
//! the capability macros and passed straight into generic operations.

use mite_core::{HasPoint, HasScalar, HasSize, impl_point_like, impl_size_like};
use mite_flat::{Point, PointLike, Rect, RectLike, Size, SizeLike, Square};
use static_assertions::assert_impl_all;

assert_impl_all!(Point<f64>: Send, Sync, Copy, PointLike);
assert_impl_all!(Size<u32>: Send, Sync, Copy, SizeLike);
assert_impl_all!(Rect<i64>: Send, Sync, Copy, RectLike);
assert_impl_all!(Square<f32>: Send, Sync, Copy, RectLike);

#[derive(Debug, Clone, Copy)]
struct Waypoint {
    lon: f64,
    lat: f64,
}

impl_point_like!(Waypoint, f64, x => lon, y => lat);

#[derive(Debug, Clone, Copy)]
struct Pixel {
    x: i32,
    y: i32,
}

impl_point_like!(Pixel, i32);

#[derive(Debug, Clone, Copy)]
struct Viewport {
    width: i32,
    height: i32,
}

impl_size_like!(Viewport, i32);

/// A window frame that stores its corner and extent in its own types.
struct Frame {
    corner: Pixel,
    extent: Viewport,
}

impl HasScalar for Frame {
    type Scalar = i32;
}

impl HasPoint for Frame {
    type Point = Pixel;

    fn point(&self) -> Pixel {
        self.corner
    }
}

impl HasSize for Frame {
    type Size = Viewport;

    fn size(&self) -> Viewport {
        self.extent
    }
}

#[test]
fn test_distance_to_foreign_point() {
    let origin = Point::new(0_i32, 0);
    let waypoint = Waypoint { lon: 3.0, lat: 4.0 };
    assert_eq!(origin.distance_from(&waypoint), 5.0);
}

#[test]
fn test_axis_delta_to_foreign_point() {
    let p = Point::new(1.5_f32, 2.5);
    let pixel = Pixel { x: 10, y: -10 };
    assert_eq!(p.x_from(&pixel), 9);
    assert_eq!(p.y_from(&pixel), -12);
}

#[test]
fn test_rect_contains_foreign_point() {
    let rect = Rect::from_xywh(0, 0, 640, 480);
    assert!(rect.contains(&Pixel { x: 640, y: 0 }));
    assert!(!rect.contains(&Pixel { x: 641, y: 0 }));
}

#[test]
fn test_can_fit_foreign_size() {
    let size = Size::new(480, 640);
    assert!(size.can_fit(&Viewport {
        width: 640,
        height: 480
    }));
    assert!(!Rect::from_xywh(0, 0, 320, 240).can_fit_size(&Viewport {
        width: 640,
        height: 480
    }));
}

#[test]
fn test_foreign_rect_like() {
    let frame = Frame {
        corner: Pixel { x: 10, y: 10 },
        extent: Viewport {
            width: 20,
            height: 5,
        },
    };
    assert_eq!(frame.right(), 30);
    assert_eq!(frame.top(), 15);

    let screen = Rect::from_xywh(0, 0, 100, 100);
    assert!(screen.can_fit(&frame));
    assert!(Square::from_xy(25, 12, 50).intersects(&frame));
    assert!(!Square::from_xy(31, 0, 50).intersects(&frame));
}
