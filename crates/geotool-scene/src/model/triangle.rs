use super::Point;

/// Isosceles triangle with its base on the x axis and the apex at `(w/2, h)`.
pub(crate) fn outline(width: f64, height: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width / 2.0, height),
    ]
}
