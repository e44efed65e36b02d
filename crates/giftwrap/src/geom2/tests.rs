use super::*;
use nalgebra::vector;
use std::collections::HashSet;

#[test]
fn ordering_is_y_then_x() {
    let a = Point::new(5.0, 0.0);
    let b = Point::new(0.0, 1.0);
    let c = Point::new(1.0, 1.0);
    assert!(a < b);
    assert!(b < c);
    let mut pts = vec![c, b, a];
    pts.sort_by(Point::cmp_yx);
    assert_eq!(pts, vec![a, b, c]);
}

#[test]
fn equality_is_exact() {
    assert_eq!(Point::new(0.1 + 0.2, 1.0), Point::new(0.1 + 0.2, 1.0));
    assert_ne!(Point::new(0.1 + 0.2, 1.0), Point::new(0.3, 1.0));
    assert_eq!(Point::new(-0.0, 0.0), Point::new(0.0, -0.0));
}

#[test]
fn hash_uses_both_coordinates() {
    // (1,2) and (2,1) share x+y; both must survive a set.
    let set: HashSet<Point> = [
        Point::new(1.0, 2.0),
        Point::new(2.0, 1.0),
        Point::new(1.25, 1.75),
        Point::new(-0.0, 0.0),
        Point::new(0.0, 0.0),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 4);
}

#[test]
fn cross_and_orient_signs() {
    assert!(cross(vector![1.0, 0.0], vector![0.0, 1.0]) > 0.0);
    assert!(cross(vector![0.0, 1.0], vector![1.0, 0.0]) < 0.0);
    let o = Point::new(0.0, 0.0);
    assert!(orient(o, Point::new(1.0, 0.0), Point::new(1.0, 1.0)) > 0.0);
    assert_eq!(orient(o, Point::new(1.0, 1.0), Point::new(3.0, 3.0)), 0.0);
}

#[test]
fn cosine_and_distance() {
    assert!((cosine(vector![1.0, 0.0], vector![1.0, 1.0]) - 0.5f64.sqrt()).abs() < 1e-12);
    assert!((cosine(vector![1.0, 0.0], vector![-2.0, 0.0]) + 1.0).abs() < 1e-12);
    assert!(cosine(vector![0.0, 0.0], vector![1.0, 0.0]).is_nan());
    assert!((distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)) - 5.0).abs() < 1e-12);
}

#[test]
fn same_ray_excludes_opposite_and_zero() {
    assert!(same_ray(vector![1.0, 1.0], vector![3.0, 3.0]));
    assert!(!same_ray(vector![1.0, 1.0], vector![-1.0, -1.0]));
    assert!(!same_ray(vector![1.0, 1.0], vector![1.0, 1.5]));
    assert!(!same_ray(vector![0.0, 0.0], vector![1.0, 0.0]));
}

#[test]
fn vector_conversions_round_trip() {
    let p = Point::new(1.5, -2.0);
    let v: nalgebra::Vector2<f64> = p.into();
    assert_eq!(Point::from(v), p);
    assert_eq!(p + vector![0.5, 2.0], Point::new(2.0, 0.0));
    assert_eq!(Point::from((1.5, -2.0)), p);
    assert_eq!(p.to_string(), "(1.5, -2)");
}
