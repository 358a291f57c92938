use geotool_settings::{EngineConfig, Projection, SettingsError};
use tempfile::TempDir;

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine.toml");

    let mut config = EngineConfig::new();
    config.camera.projection = Projection::Perspective;
    config.interaction.nudge_step = 0.25;
    config.save_to_file(&path).unwrap();

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("engine.json");

    let mut config = EngineConfig::new();
    config.shapes.default_width = 1.5;
    config.save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"default_width\": 1.5"));
    assert!(content.contains("\"#eef4fc\""));

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.shapes.default_width, 1.5);
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let config = EngineConfig::load_or_default(&path).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine.toml");
    std::fs::write(&path, "[camera]\nnear = 20.0\nfar = 10.0\n").unwrap();

    let err = EngineConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
}

#[test]
fn test_load_rejects_bad_color() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine.json");
    std::fs::write(&path, r#"{"appearance": {"default_color": "not-a-color"}}"#).unwrap();

    let err = EngineConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Json(_)));
}

#[test]
fn test_default_path_ends_with_engine_toml() {
    if let Ok(path) = EngineConfig::default_path() {
        assert!(path.ends_with("geotool/engine.toml"));
    }
}
