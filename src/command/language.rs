// src/command/language.rs

use crate::command_state::{begin_ai_call, lock_letter, queue_ai_failure, settle_ai_call};
use crate::diagnostics::{self, EventKind};
use crate::document::Document;
use crate::error::{AppError, AppResult};
use crate::llm::error::LlmError;
use crate::types::{AiCallKind, AppState, Generation, LanguageMode};

/// Work order handed to the background worker after a translation call is
/// admitted.
#[derive(Debug, Clone)]
pub struct TranslationTicket {
    pub generation: Generation,
    pub document: Document,
}

/// Restores the preserved native-language document. Edits made while in
/// English mode are dropped with the translated text.
pub fn switch_to_korean(state: &AppState) -> AppResult<()> {
    let mut letter = lock_letter(state)?;
    if letter.mode == LanguageMode::Korean {
        return Ok(());
    }

    letter.document = letter.native_snapshot.clone();
    letter.mode = LanguageMode::Korean;
    Ok(())
}

/// Admits a translation call. Returns `None` when the letter is already in
/// English mode, `AiBusy` when another call is in flight.
pub fn begin_translation(state: &AppState) -> AppResult<Option<TranslationTicket>> {
    let document = {
        let letter = lock_letter(state)?;
        if letter.mode == LanguageMode::English {
            return Ok(None);
        }
        letter.document.clone()
    };

    let generation = begin_ai_call(state, AiCallKind::Translate)?;
    Ok(Some(TranslationTicket {
        generation,
        document,
    }))
}

/// Applies (or discards) a settled translation. Stale generations are
/// dropped without touching the letter.
pub fn finish_translation(
    generation: Generation,
    outcome: Result<Document, LlmError>,
    state: &AppState,
) -> AppResult<()> {
    if !settle_ai_call(state, generation)? {
        diagnostics::record(
            state,
            EventKind::StaleResponseDiscarded,
            "translate",
            &format!("generation {generation} superseded"),
        );
        return Ok(());
    }

    match outcome {
        Ok(translated) => {
            {
                let mut letter = lock_letter(state)?;
                letter.native_snapshot = letter.document.clone();
                letter.document = translated;
                letter.mode = LanguageMode::English;
            }
            diagnostics::record(state, EventKind::Info, "translate", "translation applied");
            Ok(())
        }
        Err(e) => {
            let err = AppError::Llm(e);
            diagnostics::record(state, EventKind::AiFailure, "translate", &err.to_string());
            queue_ai_failure(state, AiCallKind::Translate, err.user_msg());
            Ok(())
        }
    }
}
