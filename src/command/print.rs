// src/command/print.rs

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::command_state::lock_letter;
use crate::context::AppCtx;
use crate::diagnostics::{self, EventKind};
use crate::error::{AppError, AppResult};
use crate::platform;
use crate::render::{self, html};
use crate::types::AppState;

/// Renders the current letter to a self-contained HTML page under the
/// exports directory and returns its path.
pub fn write_letter_html(state: &AppState, ctx: &AppCtx) -> AppResult<PathBuf> {
    let view = {
        let letter = lock_letter(state)?;
        render::project(&letter.document)
    };
    let page = html::render_page(&view);

    let dir = ctx.exports_dir();
    fs::create_dir_all(&dir)
        .map_err(|e| AppError::ExportWriteFailed(format!("create {}: {e}", dir.display())))?;

    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let mut path = dir.join(format!("ir-letter-{stamp}.html"));
    // same-second exports get a numeric suffix instead of overwriting
    let mut n = 1u32;
    while path.exists() {
        path = dir.join(format!("ir-letter-{stamp}-{n}.html"));
        n += 1;
    }
    fs::write(&path, page)
        .map_err(|e| AppError::ExportWriteFailed(format!("write {}: {e}", path.display())))?;

    diagnostics::record(
        state,
        EventKind::ExportWritten,
        "export",
        &path.display().to_string(),
    );
    Ok(path)
}

/// Writes the export and hands it to the platform handler; the browser's
/// print dialog takes it from there.
pub fn export_letter(state: &AppState, ctx: &AppCtx) -> AppResult<PathBuf> {
    let path = write_letter_html(state, ctx)?;

    if let Err(msg) = platform::open_path(&path) {
        diagnostics::record(state, EventKind::ExportFailure, "export_open", &msg);
        return Err(AppError::ExportOpenFailed(msg));
    }

    Ok(path)
}
