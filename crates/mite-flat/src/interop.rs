//! Conversions to and from the math and buffer crates used alongside mite.
//!
//! - `mint`: lossless `From` conversions for points.
//! - `glam`: `Vec2` for `f32` points and sizes (a size maps `width` to `x`).
//! - `bytemuck`: `Pod`/`Zeroable` for every value type, so slices of them can
//!   be handed to byte-oriented APIs.

#[cfg(feature = "mint")]
mod mint_conv {
    use mite_core::Scalar;

    use crate::Point;

    impl<T: Scalar> From<mint::Point2<T>> for Point<T> {
        fn from(p: mint::Point2<T>) -> Self {
            Point::new(p.x, p.y)
        }
    }

    impl<T: Scalar> From<Point<T>> for mint::Point2<T> {
        fn from(p: Point<T>) -> Self {
            mint::Point2 { x: p.x, y: p.y }
        }
    }

    impl<T: Scalar> From<mint::Vector2<T>> for Point<T> {
        fn from(v: mint::Vector2<T>) -> Self {
            Point::new(v.x, v.y)
        }
    }

    impl<T: Scalar> From<Point<T>> for mint::Vector2<T> {
        fn from(p: Point<T>) -> Self {
            mint::Vector2 { x: p.x, y: p.y }
        }
    }
}

#[cfg(feature = "glam")]
mod glam_conv {
    use glam::Vec2;

    use crate::{Point, Size};

    impl From<Vec2> for Point<f32> {
        fn from(v: Vec2) -> Self {
            Point::new(v.x, v.y)
        }
    }

    impl From<Point<f32>> for Vec2 {
        fn from(p: Point<f32>) -> Self {
            Vec2::new(p.x, p.y)
        }
    }

    impl From<Vec2> for Size<f32> {
        fn from(v: Vec2) -> Self {
            Size::new(v.y, v.x)
        }
    }

    impl From<Size<f32>> for Vec2 {
        fn from(s: Size<f32>) -> Self {
            Vec2::new(s.width, s.height)
        }
    }
}

#[cfg(feature = "bytemuck")]
mod pod {
    use bytemuck::{Pod, Zeroable};
    use mite_core::Scalar;

    use crate::{Point, Rect, Size, Square};

    // SAFETY: every type below is `#[repr(C)]` and built solely from fields of
    // the same `T`, so there is no padding and any bit pattern valid for `T`
    // is valid for the whole struct.
    unsafe impl<T: Scalar + Zeroable> Zeroable for Point<T> {}
    unsafe impl<T: Scalar + Pod> Pod for Point<T> {}

    unsafe impl<T: Scalar + Zeroable> Zeroable for Size<T> {}
    unsafe impl<T: Scalar + Pod> Pod for Size<T> {}

    unsafe impl<T: Scalar + Zeroable> Zeroable for Rect<T> {}
    unsafe impl<T: Scalar + Pod> Pod for Rect<T> {}

    unsafe impl<T: Scalar + Zeroable> Zeroable for Square<T> {}
    unsafe impl<T: Scalar + Pod> Pod for Square<T> {}
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use crate::{Point, Rect, Size};

    #[cfg(feature = "mint")]
    #[test]
    fn test_mint_round_trip() {
        let p = Point::new(3_i64, -9);
        let m: mint::Point2<i64> = p.into();
        assert_eq!(Point::from(m), p);
    }

    #[cfg(feature = "mint")]
    #[test]
    fn test_distance_to_mint_point() {
        let p = Point::new(0_u8, 0);
        let target = mint::Point2 { x: 6.0_f32, y: 8.0 };
        assert_eq!(p.distance_from(&target), 10.0);
    }

    #[cfg(feature = "glam")]
    #[test]
    fn test_glam_size_maps_width_to_x() {
        let v: glam::Vec2 = Size::new(2.0_f32, 5.0).into();
        assert_eq!(v, glam::Vec2::new(5.0, 2.0));
        assert_eq!(Size::from(v), Size::new(2.0, 5.0));
    }

    #[cfg(feature = "glam")]
    #[test]
    fn test_rect_contains_glam_vector() {
        let rect = Rect::from_xywh(0.0_f32, 0.0, 1.0, 1.0);
        assert!(rect.contains(&glam::Vec2::new(0.5, 1.0)));
        assert!(!rect.contains(&glam::Vec2::new(1.5, 0.0)));
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn test_cast_slice() {
        let points = [Point::new(1_u32, 2), Point::new(3, 4)];
        let raw: &[u32] = bytemuck::cast_slice(&points);
        assert_eq!(raw, &[1, 2, 3, 4]);

        let rect: Rect<f32> = bytemuck::Zeroable::zeroed();
        assert_eq!(rect, Rect::default());
    }
}
