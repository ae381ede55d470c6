use std::fs;
use std::path::PathBuf;

use serde_json::Value;

/// Directory holding the recorded payloads.
pub fn fixtures_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("fixtures");
    path
}

/// Reads `fixtures/<name>` as text.
pub fn load_fixture(name: &str) -> Result<String, String> {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

/// Reads `fixtures/<name>` as a JSON value.
pub fn load_fixture_value(name: &str) -> Result<Value, String> {
    let contents = load_fixture(name)?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid {name}: {e}"))
}
