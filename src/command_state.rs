// src/command_state.rs

use crate::{
    document::Document,
    error::{AppError, AppResult, UserMsg},
    types::{
        AiCallKind, AiFailureNotice, AiState, AppState, AssistantState, Generation, InFlightCall,
        LetterState,
    },
};
use std::sync::MutexGuard;

// ======================================================
// locking helpers
// ======================================================

pub fn lock_letter<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, LetterState>> {
    state.letter.lock().map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_assistant<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, AssistantState>> {
    state
        .assistant
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_ai<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, AiState>> {
    state.ai.lock().map_err(|_| AppError::StateLockPoisoned)
}

// ======================================================
// document access helpers
// ======================================================

pub fn with_document<T>(
    state: &AppState,
    f: impl FnOnce(&Document) -> AppResult<T>,
) -> AppResult<T> {
    let guard = lock_letter(state)?;
    f(&guard.document)
}

pub fn current_document(state: &AppState) -> AppResult<Document> {
    Ok(lock_letter(state)?.document.clone())
}

// ======================================================
// AI call admission (single in-flight invariant)
// ======================================================

pub fn begin_ai_call(state: &AppState, kind: AiCallKind) -> AppResult<Generation> {
    let mut ai = lock_ai(state)?;
    if ai.busy() {
        return Err(AppError::AiBusy);
    }

    let generation = ai.next_generation();
    ai.in_flight = Some(InFlightCall { kind, generation });
    Ok(generation)
}

/// Clears the in-flight slot when `generation` matches it. Returns `false`
/// for a stale settle: a newer call has since been admitted (or none is in
/// flight), and the caller must discard its outcome.
pub fn settle_ai_call(state: &AppState, generation: Generation) -> AppResult<bool> {
    let mut ai = lock_ai(state)?;
    match ai.in_flight {
        Some(call) if call.generation == generation => {
            ai.in_flight = None;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Drops the in-flight slot without an outcome. Used when spawning the
/// worker thread itself fails after admission.
pub fn abandon_ai_call(state: &AppState, generation: Generation) {
    if let Ok(mut ai) = state.ai.lock() {
        if matches!(ai.in_flight, Some(call) if call.generation == generation) {
            ai.in_flight = None;
        }
    }
}

// ======================================================
// failure notices
// ======================================================

pub fn queue_ai_failure(state: &AppState, kind: AiCallKind, msg: UserMsg) {
    if let Ok(mut ai) = state.ai.lock() {
        ai.pending_failure = Some(AiFailureNotice { kind, msg });
    }
}

pub fn take_pending_failure(state: &AppState) -> Option<AiFailureNotice> {
    match state.ai.lock() {
        Ok(mut ai) => ai.pending_failure.take(),
        Err(_) => None,
    }
}

// ======================================================
// Unit Tests
// ======================================================
