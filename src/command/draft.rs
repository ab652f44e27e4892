// src/command/draft.rs

use crate::command_state::{
    begin_ai_call, lock_assistant, lock_letter, queue_ai_failure, settle_ai_call,
};
use crate::diagnostics::{self, EventKind};
use crate::document::Highlight;
use crate::error::{AppError, AppResult};
use crate::llm::error::LlmError;
use crate::llm::DraftRequest;
use crate::types::{AiCallKind, AppState, AssistantPhase, Generation, Segment};

/// Work order handed to the background worker after a draft call is
/// admitted.
#[derive(Debug, Clone)]
pub struct DraftTicket {
    pub generation: Generation,
    pub request: DraftRequest,
}

pub fn open_assistant(state: &AppState) -> AppResult<()> {
    let mut assistant = lock_assistant(state)?;
    if assistant.phase == AssistantPhase::Idle {
        assistant.phase = AssistantPhase::Collecting;
        assistant.keywords.clear();
    }
    Ok(())
}

pub fn set_keyword(segment: Segment, text: String, state: &AppState) -> AppResult<()> {
    let mut assistant = lock_assistant(state)?;
    if !matches!(assistant.phase, AssistantPhase::Collecting) {
        return Err(AppError::AssistantNotCollecting);
    }
    assistant.keywords.set(segment, text);
    Ok(())
}

pub fn cancel_assistant(state: &AppState) -> AppResult<()> {
    let mut assistant = lock_assistant(state)?;
    match assistant.phase {
        AssistantPhase::Collecting | AssistantPhase::Drafted { .. } => {
            assistant.phase = AssistantPhase::Idle;
            assistant.keywords.clear();
            Ok(())
        }
        AssistantPhase::Idle => Ok(()),
        AssistantPhase::Generating { .. } => Err(AppError::AiBusy),
    }
}

/// Admits a draft-generation call and snapshots the request inputs. The
/// keyword inputs stay in place so a failed call can be retried as-is.
pub fn begin_generation(state: &AppState) -> AppResult<DraftTicket> {
    {
        let assistant = lock_assistant(state)?;
        if !matches!(assistant.phase, AssistantPhase::Collecting) {
            return Err(AppError::AssistantNotCollecting);
        }
    }

    let quarter_title = lock_letter(state)?.document.quarter_title.clone();
    let generation = begin_ai_call(state, AiCallKind::Draft)?;

    let mut assistant = lock_assistant(state)?;
    assistant.phase = AssistantPhase::Generating { generation };
    let keywords = assistant.keywords.clone();

    Ok(DraftTicket {
        generation,
        request: DraftRequest {
            quarter_title,
            keywords,
        },
    })
}

/// Holds a settled draft for user review, or returns the assistant to the
/// keyword form on failure. Stale generations are dropped.
pub fn finish_generation(
    generation: Generation,
    outcome: Result<Highlight, LlmError>,
    state: &AppState,
) -> AppResult<()> {
    if !settle_ai_call(state, generation)? {
        diagnostics::record(
            state,
            EventKind::StaleResponseDiscarded,
            "draft",
            &format!("generation {generation} superseded"),
        );
        return Ok(());
    }

    let mut assistant = lock_assistant(state)?;
    if !matches!(assistant.phase, AssistantPhase::Generating { generation: g } if g == generation) {
        return Ok(());
    }

    match outcome {
        Ok(draft) => {
            assistant.phase = AssistantPhase::Drafted { draft };
            Ok(())
        }
        Err(e) => {
            assistant.phase = AssistantPhase::Collecting;
            drop(assistant);

            let err = AppError::Llm(e);
            diagnostics::record(state, EventKind::AiFailure, "draft", &err.to_string());
            queue_ai_failure(state, AiCallKind::Draft, err.user_msg());
            Ok(())
        }
    }
}

/// Merges the held draft into the lead highlight card and resets the
/// assistant.
pub fn accept_draft(state: &AppState) -> AppResult<()> {
    let draft = {
        let assistant = lock_assistant(state)?;
        match &assistant.phase {
            AssistantPhase::Drafted { draft } => draft.clone(),
            _ => return Err(AppError::AssistantNoDraft),
        }
    };

    {
        let mut letter = lock_letter(state)?;
        let next = letter.document.with_lead_highlight(draft);
        letter.document = next;
    }

    let mut assistant = lock_assistant(state)?;
    assistant.phase = AssistantPhase::Idle;
    assistant.keywords.clear();
    Ok(())
}
