// src/platform/mod.rs

use std::path::Path;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
mod noop;

// Select platform implementation once, then call through `imp::*`.
#[cfg(target_os = "linux")]
mod imp {
    pub use super::linux::*;
}

#[cfg(target_os = "windows")]
mod imp {
    pub use super::windows::*;
}

#[cfg(target_os = "macos")]
mod imp {
    pub use super::macos::*;
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
mod imp {
    pub use super::noop::*;
}

/// Hands `path` to the desktop's default handler (the browser, for an HTML
/// export). The viewer is spawned and not waited on; only the launch itself
/// can fail.
pub fn open_path(path: &Path) -> Result<(), String> {
    imp::open_path(path)
}
