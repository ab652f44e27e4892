// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use directories::ProjectDirs;
use irletter_lib::config::Settings;
use irletter_lib::context::{AppCtx, APP_ID, APP_ORG, APP_QUALIFIER};
use irletter_lib::llm::gemini::GeminiClient;
use irletter_lib::llm::LetterAi;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let settings = Settings::from_env();

    let app_data_dir: PathBuf = if let Some(p) = settings.data_dir_override.as_deref() {
        PathBuf::from(p)
    } else if cfg!(debug_assertions) {
        // dev-only sandbox
        let home = env::var("HOME").expect("HOME not set");
        PathBuf::from(home).join(".local/share/irletter-dev")
    } else {
        let proj = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID)
            .expect("Could not determine app data dir");
        proj.data_dir().to_path_buf()
    };

    std::fs::create_dir_all(&app_data_dir).expect("Could not create app data dir");

    let state = Arc::new(irletter_lib::init_state());
    let ctx = Arc::new(AppCtx::new(app_data_dir));

    let ai: Option<Arc<dyn LetterAi>> = if settings.has_api_key() {
        match GeminiClient::from_settings(&settings) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                log::warn!("AI client unavailable: {e}");
                None
            }
        }
    } else {
        log::warn!("GEMINI_API_KEY is not set; translation and draft assistance are disabled");
        None
    };

    eframe::run_native(
        "(주)KCC IR LETTER",
        eframe::NativeOptions::default(),
        Box::new(move |cc| {
            ui::fonts::install_hangul_fallback(&cc.egui_ctx);
            Ok(Box::new(ui::UiApp::new(state.clone(), ctx.clone(), ai.clone())))
        }),
    )
}
