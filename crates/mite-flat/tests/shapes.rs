//! Size, Rect and Square behaviour tests.
//!
//! Covers checked size division, area ordering, and the inclusive
//! containment/overlap rules shared by rectangles and squares.

use mite_flat::{GeometryError, Point, Rect, Size, Square};

// ====================
// Size
// ====================

#[test]
fn test_size_exact_division() {
    assert_eq!(Size::new(6, 9).divide(3), Ok(Size::new(2, 3)));
}

#[test]
fn test_size_inexact_division_is_domain_error() {
    match Size::new(5, 9).divide(2) {
        Err(GeometryError::InexactDivision {
            height,
            width,
            divisor,
        }) => {
            assert_eq!(height, "5");
            assert_eq!(width, "9");
            assert_eq!(divisor, "2");
        }
        other => panic!("expected inexact division, got {:?}", other),
    }
}

#[test]
fn test_size_division_by_zero_is_domain_error() {
    assert_eq!(Size::new(6, 9).divide(0), Err(GeometryError::DivisionByZero));
}

#[test]
fn test_size_division_error_propagates() {
    fn halve_twice(size: Size<i32>) -> Result<Size<i32>, GeometryError> {
        let half = size.divide(2)?;
        half.divide(2)
    }

    assert_eq!(halve_twice(Size::new(8, 4)), Ok(Size::new(2, 1)));
    assert!(halve_twice(Size::new(6, 4)).is_err());
}

#[test]
fn test_size_orders_by_area() {
    let larger = Size::new(2, 10);
    let smaller = Size::new(3, 5);
    assert!(larger.by_area() > smaller.by_area());
    assert!(smaller.by_area() < larger.by_area());
}

#[test]
fn test_size_sort_by_area() {
    let mut sizes = vec![Size::new(3, 5), Size::new(1, 1), Size::new(2, 10)];
    sizes.sort_by_key(|s| s.by_area());
    assert_eq!(
        sizes,
        vec![Size::new(1, 1), Size::new(3, 5), Size::new(2, 10)]
    );
}

// ====================
// Rect
// ====================

#[test]
fn test_rect_contains_far_corner() {
    let rect = Rect::from_origin_wh(Point::new(0, 0), 10, 10);
    assert!(rect.contains(&Point::new(10, 10)));
}

#[test]
fn test_rect_touching_edges_intersect() {
    let a = Rect::from_xywh(0, 0, 10, 10);
    let b = Rect::from_xywh(10, 0, 10, 10);
    assert!(a.intersects(&b));
}

#[test]
fn test_rect_touching_corners_intersect() {
    let a = Rect::from_xywh(0.0, 0.0, 1.0, 1.0);
    let b = Rect::from_xywh(1.0, 1.0, 1.0, 1.0);
    assert!(a.intersects(&b));
    assert_eq!(a.intersection(&b), Some(Rect::from_xywh(1.0, 1.0, 0.0, 0.0)));
}

#[test]
fn test_rect_bottom_left_is_origin() {
    let rect = Rect::from_xywh(-4, 7, 2, 2);
    assert_eq!(rect.bottom_left(), rect.origin());
}

#[test]
fn test_rect_expand_is_symmetric() {
    let rect = Rect::from_xywh(0.0, 0.0, 4.0, 2.0);
    let grown = rect.expand(1.0);
    assert_eq!(grown.center(), rect.center());
    assert_eq!(grown.size(), Size::new(4.0, 6.0));
}

#[test]
fn test_rect_cast_round_trip() {
    let rect = Rect::from_xywh(-3, 4, 100, 250);
    assert_eq!(rect.cast::<f32>().cast::<i32>(), rect);
}

// ====================
// Square
// ====================

#[test]
fn test_square_area() {
    let square = Square::new(Point::new(0, 0), 4);
    assert_eq!(square.area(), 16);
}

#[test]
fn test_square_matches_equivalent_rect() {
    let square = Square::from_xy(2, 3, 5);
    let rect = Rect::from(square);
    for p in [Point::new(2, 3), Point::new(7, 8), Point::new(8, 8), Point::new(4, 1)] {
        assert_eq!(square.contains(&p), rect.contains(&p));
    }
    assert_eq!(square.area(), rect.area());
}
