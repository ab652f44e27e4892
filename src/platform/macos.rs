// src/platform/macos.rs

use std::path::Path;
use std::process::Command;

pub fn open_path(path: &Path) -> Result<(), String> {
    Command::new("open")
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("open did not start: {e}"))
}
