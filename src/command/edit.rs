// src/command/edit.rs

use crate::command_state::lock_letter;
use crate::document::{FieldEdit, HighlightField, IndicatorCell, PerformanceCell};
use crate::error::AppResult;
use crate::types::AppState;

// Every editor control funnels through these four writers; each derives a
// complete replacement document and swaps it in under the letter lock.

pub fn set_field(edit: FieldEdit, state: &AppState) -> AppResult<()> {
    let mut letter = lock_letter(state)?;
    let next = letter.document.with_field(edit);
    letter.document = next;
    Ok(())
}

pub fn set_performance_cell(
    index: usize,
    cell: PerformanceCell,
    state: &AppState,
) -> AppResult<()> {
    let mut letter = lock_letter(state)?;
    let next = letter.document.with_performance_cell(index, cell);
    letter.document = next;
    Ok(())
}

pub fn set_indicator_cell(index: usize, cell: IndicatorCell, state: &AppState) -> AppResult<()> {
    let mut letter = lock_letter(state)?;
    let next = letter.document.with_indicator_cell(index, cell);
    letter.document = next;
    Ok(())
}

pub fn set_highlight_field(index: usize, field: HighlightField, state: &AppState) -> AppResult<()> {
    let mut letter = lock_letter(state)?;
    let next = letter.document.with_highlight_field(index, field);
    letter.document = next;
    Ok(())
}
