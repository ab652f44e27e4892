// src/command/mod.rs

pub mod draft;
pub mod edit;
pub mod language;
pub mod print;

// --- Public façade ---

pub use draft::{
    accept_draft, begin_generation, cancel_assistant, finish_generation, open_assistant,
    set_keyword, DraftTicket,
};
pub use edit::{set_field, set_highlight_field, set_indicator_cell, set_performance_cell};
pub use language::{begin_translation, finish_translation, switch_to_korean, TranslationTicket};
pub use print::{export_letter, write_letter_html};
