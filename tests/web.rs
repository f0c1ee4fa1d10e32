#![cfg(target_arch = "wasm32")]

use pixel_physics_engine::{mat_sand, mat_stone, version, World};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn exports_material_ids() {
    assert_eq!(mat_sand(), 1);
    assert_eq!(mat_stone(), 6);
    assert!(!version().is_empty());
}

#[wasm_bindgen_test]
fn world_round_trip() {
    let mut world = World::new(16, 16).unwrap();
    let placed = world.spawn(mat_sand(), 0, 0, 15, 0).unwrap();
    assert_eq!(placed, 16);

    world.tick(1.0 / 60.0).unwrap();
    assert!(world.tick(0.0).is_err());
    assert!(world.spawn(200, 0, 0, 1, 1).is_err());

    world.extract_colors();
    assert_eq!(world.cells_len(), 256);
    assert!(!world.colors_ptr().is_null());
}

#[wasm_bindgen_test]
fn config_and_materials_load_through_json() {
    let mut world = World::with_config(8, 8, r#"{"seed": 99}"#.to_string()).unwrap();
    assert!(world.config_json().contains("\"seed\":99"));

    let manifest = world.materials_manifest();
    world.load_materials(manifest).unwrap();
    assert!(world.load_config("{\"stepSeconds\": -1}".to_string()).is_err());
}
