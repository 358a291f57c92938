use std::f64::consts::PI;

use super::Point;

const SIDES: usize = 6;

/// Regular hexagon inscribed in a circle of radius `h/2`, first vertex at
/// angle 0, stretched along x by `w/h`.
///
/// The flat top and bottom edges sit at `±(h/2)·sin 60°`, so the result is
/// not yet `h` tall; `fit_to_box` takes care of that.
pub(crate) fn outline(width: f64, height: f64) -> Vec<Point> {
    let radius = height / 2.0;
    let stretch = width / height;

    (0..SIDES)
        .map(|i| {
            let theta = 2.0 * PI * (i as f64) / (SIDES as f64);
            Point::new(radius * theta.cos() * stretch, radius * theta.sin())
        })
        .collect()
}
