// src/diagnostics.rs

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::types::AppState;

pub const MAX_EVENTS: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    AiFailure,
    StaleResponseDiscarded,
    ExportWritten,
    ExportFailure,
    Info,
}

impl EventKind {
    fn as_str(self) -> &'static str {
        match self {
            EventKind::AiFailure => "ai_failure",
            EventKind::StaleResponseDiscarded => "stale_response_discarded",
            EventKind::ExportWritten => "export_written",
            EventKind::ExportFailure => "export_failure",
            EventKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Event {
    pub id: u64,
    pub at: DateTime<Utc>,
    pub kind: EventKind,
    pub context: String,
    pub msg: String,
}

/// Bounded in-memory event ring, mirrored to the `log` facade. Oldest
/// events fall off the front once the ring is full.
pub struct DiagnosticsLog {
    buf: VecDeque<Event>,
    next_id: u64,
}

impl DiagnosticsLog {
    pub fn new() -> Self {
        Self {
            buf: VecDeque::with_capacity(MAX_EVENTS),
            next_id: 1,
        }
    }

    pub fn record(&mut self, kind: EventKind, context: &str, msg: &str) {
        let ev = Event {
            id: self.alloc_id(),
            at: Utc::now(),
            kind,
            context: context.to_string(),
            msg: msg.to_string(),
        };

        match kind {
            EventKind::AiFailure | EventKind::ExportFailure => {
                log::warn!("[{}] {}: {}", ev.kind.as_str(), context, msg);
            }
            _ => {
                log::info!("[{}] {}: {}", ev.kind.as_str(), context, msg);
            }
        }

        if self.buf.len() >= MAX_EVENTS {
            self.buf.pop_front();
        }
        self.buf.push_back(ev);
    }

    pub fn recent(&self) -> Vec<Event> {
        self.buf.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new()
    }
}

pub fn record(state: &AppState, kind: EventKind, context: &str, msg: &str) {
    let mut diag = match state.diagnostics.lock() {
        Ok(g) => g,
        Err(_) => return,
    };
    diag.record(kind, context, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_caps_at_max_events() {
        let mut log = DiagnosticsLog::new();
        for i in 0..(MAX_EVENTS + 10) {
            log.record(EventKind::Info, "test", &format!("event {i}"));
        }

        let recent = log.recent();
        assert_eq!(recent.len(), MAX_EVENTS);
        // oldest ten dropped, ids keep counting
        assert_eq!(recent[0].msg, "event 10");
        assert_eq!(recent[0].id, 11);
    }

    #[test]
    fn records_kind_and_context() {
        let mut log = DiagnosticsLog::new();
        log.record(EventKind::AiFailure, "translate", "boom");

        let recent = log.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].kind, EventKind::AiFailure);
        assert_eq!(recent[0].context, "translate");
        assert_eq!(recent[0].msg, "boom");
    }
}
