// src/platform/linux.rs

use std::path::Path;
use std::process::Command;

pub fn open_path(path: &Path) -> Result<(), String> {
    Command::new("xdg-open")
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("xdg-open did not start: {e}"))
}
