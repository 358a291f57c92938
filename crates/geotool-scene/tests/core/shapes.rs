use geotool_core::Color;
use geotool_scene::hit_test::{Ray, Raycaster};
use geotool_scene::model::{build_polygon, Point, ShapeKind, ShapeSpec};
use geotool_scene::shape::Shape;

fn make(kind: ShapeKind, w: f64, h: f64) -> Shape {
    Shape::new(ShapeSpec::new(kind, w, h), Color::WHITE).unwrap()
}

#[test]
fn test_build_polygon_vertex_counts() {
    assert_eq!(build_polygon(ShapeKind::Square, 1.0, 1.0).unwrap().0.len(), 4);
    assert_eq!(build_polygon(ShapeKind::Triangle, 1.0, 1.0).unwrap().0.len(), 3);
    assert_eq!(build_polygon(ShapeKind::Hexagon, 1.0, 1.0).unwrap().0.len(), 6);
}

#[test]
fn test_hexagon_fills_requested_box() {
    let (_, bounds) = build_polygon(ShapeKind::Hexagon, 2.0, 1.0).unwrap();
    assert!((bounds.width() - 2.0).abs() < 1e-9);
    assert!((bounds.height() - 1.0).abs() < 1e-9);
}

#[test]
fn test_triangle_hit_near_apex_and_miss_beside_it() {
    let tri = make(ShapeKind::Triangle, 1.0, 1.0);
    // Apex at (0, 0.5), base at y = -0.5
    assert!(!tri.intersect(&Ray::vertical(Point::new(0.0, 0.45), 1.0)).is_empty());
    assert!(tri.intersect(&Ray::vertical(Point::new(0.3, 0.45), 1.0)).is_empty());
}

#[test]
fn test_overlapping_shapes_first_added_wins() {
    let first = make(ShapeKind::Square, 1.0, 1.0);
    let mut second = make(ShapeKind::Hexagon, 1.0, 1.0);
    second.set_position(Point::new(0.2, 0.0));

    let ray = Ray::vertical(Point::new(0.1, 0.0), 1.0);
    let hit = Raycaster::new(0.1, 10.0)
        .first_hit(&ray, [&first, &second])
        .unwrap();
    assert_eq!(hit.shape_id, first.id());
}

#[test]
fn test_nearest_boundary_point_on_hexagon_edge() {
    let mut hex = make(ShapeKind::Hexagon, 1.0, 1.0);
    hex.set_position(Point::new(-1.0, 2.0));

    // Straight above the flat top edge
    let p = hex.nearest_boundary_point(Point::new(-1.0, 4.0));
    assert!((p.x + 1.0).abs() < 1e-9);
    assert!((p.y - 2.5).abs() < 1e-9);
}

#[test]
fn test_nearest_boundary_point_is_idempotent() {
    let mut tri = make(ShapeKind::Triangle, 0.7, 0.4);
    tri.set_position(Point::new(0.3, 0.3));
    let q = Point::new(2.0, -1.0);
    assert_eq!(tri.nearest_boundary_point(q), tri.nearest_boundary_point(q));
}
