use geotool_scene::model::Point;
use geotool_scene::viewport::{device_to_world, ContainerBounds, Viewport};
use geotool_settings::{CameraSettings, Projection};

fn perspective() -> CameraSettings {
    CameraSettings {
        projection: Projection::Perspective,
        ..CameraSettings::default()
    }
}

#[test]
fn test_device_to_world_y_is_flipped() {
    let vp = Viewport::new(ContainerBounds::sized(800.0, 600.0), CameraSettings::default());
    let top = vp.device_to_world(400.0, 0.0);
    let bottom = vp.device_to_world(400.0, 600.0);
    assert!(top.y > 0.0);
    assert!(bottom.y < 0.0);
}

#[test]
fn test_orthographic_matches_ndc_formula() {
    let bounds = ContainerBounds::sized(640.0, 480.0);
    let vp = Viewport::new(bounds, CameraSettings::default());
    let (hw, hh) = vp.half_extents();

    let (x, y) = (160.0, 360.0);
    let nx = (x / 640.0) * 2.0 - 1.0;
    let ny = -(y / 480.0) * 2.0 + 1.0;
    let world = device_to_world(x, y, bounds, &CameraSettings::default());

    assert!((world.x - nx * hw).abs() < 1e-9);
    assert!((world.y - ny * hh).abs() < 1e-9);
}

#[test]
fn test_center_is_origin_after_every_resize() {
    for camera in [CameraSettings::default(), perspective()] {
        let mut vp = Viewport::new(ContainerBounds::sized(300.0, 300.0), camera);
        for (w, h) in [(1024.0, 768.0), (200.0, 900.0), (1.0, 1.0), (1920.0, 1080.0)] {
            vp.set_canvas_size(w, h);
            let c = vp.device_to_world(w / 2.0, h / 2.0);
            assert!(c.x.abs() < 1e-9 && c.y.abs() < 1e-9, "{w}x{h}: {c}");
        }
    }
}

#[test]
fn test_perspective_ray_diverges_from_camera() {
    let vp = Viewport::new(ContainerBounds::sized(400.0, 400.0), perspective());
    let left = vp.device_to_ray(0.0, 200.0);
    let right = vp.device_to_ray(400.0, 200.0);
    assert!(left.direction.x < 0.0);
    assert!(right.direction.x > 0.0);
    assert!(left.direction.z < 0.0);
}

#[test]
fn test_world_to_device_inverts_mapping() {
    let vp = Viewport::new(
        ContainerBounds::new(20.0, 40.0, 500.0, 250.0),
        CameraSettings::default(),
    );
    let (x, y) = vp.world_to_device(Point::new(0.5, 0.25));
    let back = vp.device_to_world(x, y);
    assert!((back.x - 0.5).abs() < 1e-9);
    assert!((back.y - 0.25).abs() < 1e-9);
}
