use std::io::Write;
use std::path::Path;

use sphere_hop::core::config::GameConfig;

#[test]
fn shipped_config_matches_defaults() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron").expect("shipped config parses");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty(), "warnings: {:?}", cfg.validate());
}

#[test]
fn mistyped_override_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "(bodies: (count: \"many\"))").expect("write temp ron");
    let (cfg, used, errors) = GameConfig::load_layered([file.path()]);
    assert_eq!(used.len(), 1);
    assert_eq!(cfg, GameConfig::default());
    assert!(
        errors.iter().any(|e| e.contains("failed to deserialize merged config")),
        "got {errors:?}"
    );
}

#[test]
fn override_layer_changes_only_named_keys() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "(bodies: (count: 3), hover: (hover_scale: 2.0))").expect("write temp ron");
    let (cfg, _used, errors) =
        GameConfig::load_layered([Path::new("assets/config/game.ron"), file.path()]);
    assert!(errors.is_empty(), "got {errors:?}");
    assert_eq!(cfg.bodies.count, 3);
    assert_eq!(cfg.hover.hover_scale, 2.0);
    assert_eq!(cfg.hover.smoothing, GameConfig::default().hover.smoothing);
    assert_eq!(cfg.camera, GameConfig::default().camera);
}
