use super::Point;

/// Axis-aligned rectangle `(0,0) (w,0) (w,h) (0,h)`.
pub(crate) fn outline(width: f64, height: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
    ]
}
