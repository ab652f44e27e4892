// src/context.rs

use std::path::PathBuf;

pub const APP_QUALIFIER: &str = "kr";
pub const APP_ORG: &str = "kcc";
pub const APP_ID: &str = "irletter";

pub const EXPORTS_DIR: &str = "exports";

#[derive(Debug)]
pub struct AppCtx {
    pub app_data_dir: PathBuf,
    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let debug_ui = std::env::var("IRLETTER_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            app_data_dir,
            debug_ui,
        }
    }

    /// <app_data>/exports
    pub fn exports_dir(&self) -> PathBuf {
        self.app_data_dir.join(EXPORTS_DIR)
    }
}
