use std::rc::Rc;

use geotool_scene::model::ShapeKind;
use geotool_scene::scene::Scene;
use geotool_scene::serialization::read_records;
use geotool_scene::tools::ToolStore;
use geotool_settings::EngineConfig;

fn scene() -> Scene {
    Scene::new(EngineConfig::default(), Rc::new(ToolStore::new()))
}

#[test]
fn test_square_and_triangle_in_add_order() {
    let mut scene = scene();
    scene.add_shape(ShapeKind::Square).unwrap();
    scene.add_shape(ShapeKind::Triangle).unwrap();

    let json = scene.serialize().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["type"], "square");
    assert_eq!(records[1]["type"], "triangle");
}

#[test]
fn test_serialize_works_without_surface() {
    let mut scene = scene();
    scene.add_shape(ShapeKind::Hexagon).unwrap();
    assert!(scene.serialize().is_ok());
}

#[test]
fn test_serialized_output_reads_back_as_records() {
    let mut scene = scene();
    scene.add_shape(ShapeKind::Hexagon).unwrap();
    scene.add_shape(ShapeKind::Square).unwrap();

    let records = read_records(&scene.serialize().unwrap()).unwrap();
    let kinds: Vec<_> = records.iter().filter_map(|r| r.shape_kind()).collect();
    assert_eq!(kinds, vec![ShapeKind::Hexagon, ShapeKind::Square]);
    assert!(records.iter().all(|r| r.width == 0.5 && r.height == 0.5));
    assert!(records.iter().all(|r| r.color.to_string() == "#eef4fc"));
}

#[test]
fn test_custom_config_reaches_records() {
    let mut config = EngineConfig::default();
    config.shapes.default_width = 1.25;
    config.appearance.default_color = geotool_core::Color::from_hex(0x123456);
    let mut scene = Scene::new(config, Rc::new(ToolStore::new()));
    scene.add_shape(ShapeKind::Triangle).unwrap();

    let records = read_records(&scene.serialize().unwrap()).unwrap();
    assert_eq!(records[0].width, 1.25);
    assert_eq!(records[0].color.to_string(), "#123456");
}
