// src/jobs.rs
//
// AI calls run on plain worker threads so the frame loop never blocks on the
// network. Each worker finishes by writing its outcome back through the
// command layer, which discards it if a newer call has superseded this one,
// then calls `notify` so the frontend repaints.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::command::{self, DraftTicket, TranslationTicket};
use crate::llm::LetterAi;
use crate::types::AppState;

pub fn spawn_translation(
    state: Arc<AppState>,
    ai: Arc<dyn LetterAi>,
    ticket: TranslationTicket,
    notify: impl Fn() + Send + 'static,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let outcome = ai.translate_letter(&ticket.document);
        if let Err(e) = command::finish_translation(ticket.generation, outcome, &state) {
            log::warn!("translation job ended with error: {e}");
        }
        notify();
    })
}

pub fn spawn_draft(
    state: Arc<AppState>,
    ai: Arc<dyn LetterAi>,
    ticket: DraftTicket,
    notify: impl Fn() + Send + 'static,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let outcome = ai.draft_highlight(&ticket.request);
        if let Err(e) = command::finish_generation(ticket.generation, outcome, &state) {
            log::warn!("draft job ended with error: {e}");
        }
        notify();
    })
}
