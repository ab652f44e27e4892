// src/platform/windows.rs

use std::path::Path;
use std::process::Command;

pub fn open_path(path: &Path) -> Result<(), String> {
    // `start` is a cmd builtin; the empty string is the window title slot.
    Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("start did not run: {e}"))
}
