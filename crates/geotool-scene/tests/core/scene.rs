use std::rc::Rc;

use geotool_core::{Color, FrameClock, InputBus, InputEvent, Key};
use geotool_scene::model::{Point, ShapeKind};
use geotool_scene::scene::{InteractionState, Scene};
use geotool_scene::surface::RecordingSurface;
use geotool_scene::viewport::ContainerBounds;
use geotool_scene::SceneError;
use geotool_scene::tools::{Tool, ToolStore};
use geotool_settings::{EngineConfig, Projection};

struct Harness {
    scene: geotool_core::Shared<Scene>,
    tools: Rc<ToolStore>,
    bus: Rc<InputBus>,
    clock: Rc<FrameClock>,
    log: geotool_core::Shared<geotool_scene::surface::FrameLog>,
}

fn harness(width: f64, height: f64) -> Harness {
    harness_with(EngineConfig::default(), width, height)
}

fn harness_with(config: EngineConfig, width: f64, height: f64) -> Harness {
    let tools = Rc::new(ToolStore::new());
    let scene = geotool_core::shared(Scene::new(config, tools.clone()));
    let bus = Rc::new(InputBus::new());
    let clock = Rc::new(FrameClock::new());
    let surface = RecordingSurface::new(width, height);
    let log = surface.log();
    assert!(Scene::attach(&scene, Box::new(surface), bus.clone(), clock.clone()));
    Harness {
        scene,
        tools,
        bus,
        clock,
        log,
    }
}

#[test]
fn test_add_select_drag_scenario() {
    let h = harness(800.0, 600.0);
    let id = h.scene.borrow_mut().add_shape(ShapeKind::Square).unwrap();
    assert_eq!(h.scene.borrow().shape(id).unwrap().position(), Point::ORIGIN);

    h.tools.set_active_tool(Tool::Select);
    h.bus.publish(InputEvent::PointerDown { x: 400.0, y: 300.0 });
    assert_eq!(h.scene.borrow().selected_shape(), Some(id));
    assert_eq!(h.scene.borrow().selected_color(), Some(Color::from_hex(0x8efc8f)));

    h.tools.set_active_tool(Tool::Move);
    h.bus.publish(InputEvent::PointerDown { x: 400.0, y: 300.0 });
    h.bus.publish(InputEvent::PointerMove { x: 410.0, y: 310.0 });
    h.bus.publish(InputEvent::PointerUp { x: 410.0, y: 310.0 });

    let scene = h.scene.borrow();
    let vp = scene.viewport().unwrap();
    let start = vp.device_to_world(400.0, 300.0);
    let end = vp.device_to_world(410.0, 310.0);
    let (dx, dy) = (end.x - start.x, end.y - start.y);

    let p = scene.shape(id).unwrap().position();
    assert!((p.x - dx).abs() < 1e-9);
    assert!((p.y - dy).abs() < 1e-9);
    assert!(dx > 0.0 && dy < 0.0);
    assert_eq!(scene.interaction_state(), InteractionState::Idle);
}

#[test]
fn test_select_with_camera_close_to_or_far_from_plane() {
    let cases = [
        (Projection::Orthographic, 0.15),
        (Projection::Orthographic, 9.5),
        (Projection::Perspective, 0.15),
        (Projection::Perspective, 3.0),
    ];
    for (projection, distance) in cases {
        let mut config = EngineConfig::default();
        config.camera.projection = projection;
        config.camera.distance = distance;
        config.validate().unwrap();

        let h = harness_with(config, 200.0, 200.0);
        let id = h.scene.borrow_mut().add_shape(ShapeKind::Square).unwrap();
        h.tools.set_active_tool(Tool::Select);
        h.bus.publish(InputEvent::PointerDown { x: 100.0, y: 100.0 });
        assert_eq!(
            h.scene.borrow().selected_shape(),
            Some(id),
            "{projection:?} at distance {distance}"
        );
    }
}

#[test]
fn test_selecting_a_then_b_then_nothing() {
    let h = harness(400.0, 400.0);
    let (a, b) = {
        let mut scene = h.scene.borrow_mut();
        let a = scene.add_shape(ShapeKind::Square).unwrap();
        let b = scene.add_shape(ShapeKind::Triangle).unwrap();
        (a, b)
    };
    h.tools.set_active_tool(Tool::Select);
    h.bus.publish(InputEvent::PointerDown { x: 200.0, y: 200.0 });
    assert_eq!(h.scene.borrow().selected_shape(), Some(a));

    // Drag a to x = 0.5 so the two no longer overlap at the origin
    h.tools.set_active_tool(Tool::Move);
    h.bus.publish(InputEvent::PointerDown { x: 200.0, y: 200.0 });
    h.bus.publish(InputEvent::PointerMove { x: 300.0, y: 200.0 });
    h.bus.publish(InputEvent::PointerUp { x: 300.0, y: 200.0 });

    h.tools.set_active_tool(Tool::Select);
    // b still sits at the origin, a is now at x = 0.5
    h.bus.publish(InputEvent::PointerDown { x: 200.0, y: 200.0 });
    {
        let scene = h.scene.borrow();
        assert_eq!(scene.selected_shape(), Some(b));
        assert_eq!(scene.shape(a).unwrap().color(), Color::from_hex(0xeef4fc));
        assert_eq!(scene.shape(b).unwrap().color(), Color::from_hex(0x8efc8f));
    }

    h.bus.publish(InputEvent::PointerDown { x: 5.0, y: 5.0 });
    let scene = h.scene.borrow();
    assert_eq!(scene.selected_shape(), None);
    assert_eq!(scene.shape(b).unwrap().color(), Color::from_hex(0xeef4fc));
}

#[test]
fn test_frames_render_every_tick() {
    let h = harness(100.0, 100.0);
    h.scene.borrow_mut().add_shape(ShapeKind::Hexagon).unwrap();

    assert_eq!(h.clock.tick(), 1);
    assert_eq!(h.clock.tick(), 1);
    assert_eq!(h.clock.tick(), 1);

    assert_eq!(h.scene.borrow().frames_rendered(), 3);
    let log = h.log.borrow();
    assert_eq!(log.frames_presented, 3);
    let frame = log.last_frame.as_ref().unwrap();
    assert_eq!(frame.number, 3);
    assert_eq!(frame.items.len(), 1);
}

#[test]
fn test_marker_present_only_while_probing() {
    let h = harness(200.0, 200.0);
    h.scene.borrow_mut().add_shape(ShapeKind::Square).unwrap();
    h.tools.set_active_tool(Tool::Select);
    h.bus.publish(InputEvent::PointerDown { x: 100.0, y: 100.0 });

    h.tools.set_active_tool(Tool::ClosestPoint);
    h.bus.publish(InputEvent::PointerMove { x: 190.0, y: 100.0 });
    h.clock.tick();
    {
        let log = h.log.borrow();
        let marker = log.last_frame.as_ref().unwrap().marker.unwrap();
        assert!((marker.center.x - 0.25).abs() < 1e-9);
        assert!(marker.center.y.abs() < 1e-9);
        assert_eq!(marker.color, Color::RED);
    }

    h.tools.set_active_tool(Tool::Move);
    h.clock.tick();
    assert!(h.log.borrow().last_frame.as_ref().unwrap().marker.is_none());
    assert!(h.scene.borrow().marker().is_none());
}

#[test]
fn test_resize_event_applies_before_next_hit_test() {
    let h = harness(200.0, 200.0);
    let id = h.scene.borrow_mut().add_shape(ShapeKind::Square).unwrap();
    h.tools.set_active_tool(Tool::Select);

    h.bus.publish(InputEvent::Resize {
        width: 1000.0,
        height: 200.0,
    });
    // Old projection would put (500, 100) far outside the shape
    h.bus.publish(InputEvent::PointerDown { x: 500.0, y: 100.0 });
    assert_eq!(h.scene.borrow().selected_shape(), Some(id));
    assert_eq!(h.log.borrow().resizes, vec![(1000.0, 200.0)]);
}

#[test]
fn test_keyboard_nudge_through_bus() {
    let h = harness(200.0, 200.0);
    let id = h.scene.borrow_mut().add_shape(ShapeKind::Triangle).unwrap();
    h.tools.set_active_tool(Tool::Select);
    h.bus.publish(InputEvent::PointerDown { x: 100.0, y: 100.0 });
    h.tools.set_active_tool(Tool::Move);

    h.bus.publish(InputEvent::KeyDown(Key::ArrowLeft));
    h.bus.publish(InputEvent::KeyDown(Key::ArrowUp));
    let p = h.scene.borrow().shape(id).unwrap().position();
    assert!((p.x + 0.1).abs() < 1e-12);
    assert!((p.y - 0.1).abs() < 1e-12);
}

#[test]
fn test_dispose_stops_input_and_frames() {
    let h = harness(200.0, 200.0);
    let id = h.scene.borrow_mut().add_shape(ShapeKind::Square).unwrap();
    h.tools.set_active_tool(Tool::Select);

    h.scene.borrow_mut().dispose();
    assert_eq!(h.bus.publish(InputEvent::PointerDown { x: 100.0, y: 100.0 }), 0);
    assert_eq!(h.clock.tick(), 0);

    let scene = h.scene.borrow();
    assert_eq!(scene.selected_shape(), None);
    assert!(scene.shape(id).is_some());
    assert_eq!(h.log.borrow().frames_presented, 0);
}

#[test]
fn test_container_offset_shifts_hit_testing() {
    let h = harness(200.0, 200.0);
    let id = h.scene.borrow_mut().add_shape(ShapeKind::Square).unwrap();
    h.scene
        .borrow_mut()
        .set_container_bounds(ContainerBounds::new(50.0, 20.0, 200.0, 200.0))
        .unwrap();
    h.tools.set_active_tool(Tool::Select);

    h.bus.publish(InputEvent::PointerDown { x: 150.0, y: 120.0 });
    assert_eq!(h.scene.borrow().selected_shape(), Some(id));

    h.bus.publish(InputEvent::PointerDown { x: 100.0, y: 100.0 });
    assert_eq!(h.scene.borrow().selected_shape(), None);
}

#[test]
fn test_container_bounds_need_a_surface() {
    let mut scene = Scene::new(EngineConfig::default(), Rc::new(ToolStore::new()));
    let err = scene
        .set_container_bounds(ContainerBounds::sized(100.0, 100.0))
        .unwrap_err();
    assert!(matches!(err, SceneError::SurfaceNotAttached));
}
