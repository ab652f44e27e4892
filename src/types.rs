// src/types.rs

use std::sync::Mutex;

use crate::diagnostics::DiagnosticsLog;
use crate::document::{Document, Highlight};
use crate::error::UserMsg;
use crate::seed::seed_document;

pub type Generation = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageMode {
    Korean,
    English,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiCallKind {
    Translate,
    Draft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InFlightCall {
    pub kind: AiCallKind,
    pub generation: Generation,
}

#[derive(Clone, Debug)]
pub struct AiFailureNotice {
    pub kind: AiCallKind,
    pub msg: UserMsg,
}

/// Admission control for the single outbound AI call, plus the failure
/// notice queued for the UI to pick up on its next frame.
pub struct AiState {
    pub in_flight: Option<InFlightCall>,
    pub last_generation: Generation,
    pub pending_failure: Option<AiFailureNotice>,
}

impl AiState {
    pub fn busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn next_generation(&mut self) -> Generation {
        self.last_generation = self.last_generation.saturating_add(1);
        self.last_generation
    }
}

impl Default for AiState {
    fn default() -> Self {
        Self {
            in_flight: None,
            last_generation: 0,
            pending_failure: None,
        }
    }
}

pub struct LetterState {
    pub document: Document,

    // native-language document restored on switch back to Korean;
    // refreshed each time a translation is applied
    pub native_snapshot: Document,
    pub mode: LanguageMode,
}

impl LetterState {
    pub fn seeded() -> Self {
        let document = seed_document();
        Self {
            native_snapshot: document.clone(),
            document,
            mode: LanguageMode::Korean,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    BuildingMaterials,
    Coatings,
    Silicone,
}

impl Segment {
    pub const ALL: [Segment; 3] = [
        Segment::BuildingMaterials,
        Segment::Coatings,
        Segment::Silicone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Segment::BuildingMaterials => "건재사업부",
            Segment::Coatings => "도료사업부",
            Segment::Silicone => "실리콘사업부",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentKeywords {
    pub building_materials: String,
    pub coatings: String,
    pub silicone: String,
}

impl SegmentKeywords {
    pub fn get(&self, segment: Segment) -> &str {
        match segment {
            Segment::BuildingMaterials => &self.building_materials,
            Segment::Coatings => &self.coatings,
            Segment::Silicone => &self.silicone,
        }
    }

    pub fn set(&mut self, segment: Segment, text: String) {
        match segment {
            Segment::BuildingMaterials => self.building_materials = text,
            Segment::Coatings => self.coatings = text,
            Segment::Silicone => self.silicone = text,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssistantPhase {
    Idle,
    Collecting,
    Generating { generation: Generation },
    Drafted { draft: Highlight },
}

pub struct AssistantState {
    pub phase: AssistantPhase,
    pub keywords: SegmentKeywords,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            phase: AssistantPhase::Idle,
            keywords: SegmentKeywords::default(),
        }
    }
}

pub struct AppState {
    pub letter: Mutex<LetterState>,
    pub assistant: Mutex<AssistantState>,
    pub ai: Mutex<AiState>,

    // in-memory diagnostics ring (AI failures, stale discards, exports)
    pub diagnostics: Mutex<DiagnosticsLog>,
}
