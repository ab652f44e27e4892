// src/lib.rs

pub mod command;
pub mod command_state;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod jobs;
pub mod llm;
pub mod platform;
pub mod render;
pub mod seed;
pub mod types;

use crate::diagnostics::DiagnosticsLog;
use crate::types::{AiState, AppState, AssistantState, LetterState};
use std::sync::Mutex;

pub fn init_state() -> AppState {
    AppState {
        letter: Mutex::new(LetterState::seeded()),
        assistant: Mutex::new(AssistantState::default()),
        ai: Mutex::new(AiState::default()),
        diagnostics: Mutex::new(DiagnosticsLog::new()),
    }
}