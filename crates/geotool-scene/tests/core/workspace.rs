use geotool_core::InputEvent;
use geotool_scene::model::ShapeKind;
use geotool_scene::raster::RasterSurface;
use geotool_scene::surface::RecordingSurface;
use geotool_scene::tools::Tool;
use geotool_scene::workspace::{ToolOutcome, Workspace};
use geotool_settings::EngineConfig;
use tempfile::TempDir;

#[test]
fn test_shell_command_flow() {
    let ws = Workspace::new(EngineConfig::default());
    assert!(ws.attach_surface(Box::new(RecordingSurface::new(600.0, 600.0))));

    let ToolOutcome::ShapeAdded(Some(square)) =
        ws.set_active_tool(Tool::Add(ShapeKind::Square)).unwrap()
    else {
        panic!("square not added");
    };
    // Pointer events are ignored while an add tool is active
    ws.publish(InputEvent::PointerDown { x: 300.0, y: 300.0 });
    assert_eq!(ws.selected_shape(), None);

    ws.set_active_tool(Tool::Select).unwrap();
    ws.publish(InputEvent::PointerDown { x: 300.0, y: 300.0 });
    assert_eq!(ws.selected_shape(), Some(square));
    assert_eq!(ws.selected_color().unwrap().to_string(), "#8efc8f");

    let ToolOutcome::Saved(json) = ws.set_active_tool(Tool::Save).unwrap() else {
        panic!("save did not serialize");
    };
    assert!(json.starts_with('['));
    assert_eq!(ws.active_tool(), Tool::Select);
}

#[test]
fn test_named_commands() {
    let ws = Workspace::default();
    assert!(ws.add_shape_named("triangle").unwrap().is_some());
    assert!(ws.add_shape_named("pentagon").unwrap().is_none());
    ws.set_active_tool_named("closest-point").unwrap();
    assert_eq!(ws.active_tool(), Tool::ClosestPoint);
    assert_eq!(ws.scene().borrow().shape_count(), 1);
}

#[test]
fn test_raster_session_writes_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.png");

    let ws = Workspace::default();
    let surface = RasterSurface::new(120, 80).unwrap();
    assert!(ws.attach_surface(Box::new(surface.clone())));
    ws.add_shape(ShapeKind::Hexagon).unwrap();
    assert_eq!(ws.tick(), 1);
    assert_eq!(ws.scene().borrow().frames_rendered(), 1);

    surface.save_png(&path).unwrap();
    assert!(path.exists());
    assert_eq!(surface.pixel_rgb(60, 40), Some((0xee, 0xf4, 0xfc)));
    assert_eq!(surface.pixel_rgb(1, 1), Some((0x1e, 0x1e, 0x1e)));
}
