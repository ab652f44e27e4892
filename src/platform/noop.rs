// src/platform/noop.rs

use std::path::Path;

pub fn open_path(_path: &Path) -> Result<(), String> {
    Err("opening files is not supported on this target".to_string())
}
