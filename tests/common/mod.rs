//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use config_registry::validator::presets;
use config_registry::{Registry, Variable};

/// The variables the demo program declares, plus a few dotted ones.
pub fn demo_registry() -> Registry {
    let registry = Registry::new();
    registry.register(Variable::new(
        "veryImportantString",
        "fas".to_string(),
        presets::string_non_empty(),
    ));
    registry.register(Variable::new("integer", 512, presets::int_ranged(0, 500)));
    registry.register(Variable::new("getReal", 22.8f32, presets::float_ranged(0.0, 200.0)));
    registry.register(
        Variable::new("server.port", 8080, presets::int_ranged(1, 65535))
            .with_description("TCP port"),
    );
    registry.register(Variable::new("server.debug", false, presets::boolean()));
    registry.register(Variable::new(
        "limits.max_bytes",
        1_048_576i64,
        presets::long_ranged(0, i64::MAX),
    ));
    registry.register(Variable::new("limits.ratio", 0.75f64, presets::double_ranged(0.0, 1.0)));
    registry
}

/// Write `contents` to `name` inside `dir` and return the full path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Parse a JSON file written by the registry.
#[allow(dead_code)]
pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
