// tests/common/mod.rs

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use irletter_lib::{
    context::AppCtx,
    document::{Document, FieldEdit, Highlight},
    llm::{error::LlmError, json, DraftRequest, LetterAi},
    seed::seed_document,
    types::AppState,
};

pub struct TestEnv {
    // Keep the tempdir alive for the duration of the test.
    _td_data: tempfile::TempDir,

    pub state: Arc<AppState>,
    ctx: AppCtx,
}

impl TestEnv {
    pub fn ctx(&self) -> &AppCtx {
        &self.ctx
    }
}

/// Fresh seeded app state over a temporary data dir.
pub fn setup() -> TestEnv {
    let td_data = tempfile::tempdir().expect("tempdir data");
    let state = Arc::new(irletter_lib::init_state());
    let ctx = AppCtx::new(td_data.path().to_path_buf());

    TestEnv {
        _td_data: td_data,
        state,
        ctx,
    }
}

/// Scripted AI double. Responses are raw text run through the same JSON
/// recovery/parse path as the production client, so the full parse
/// taxonomy is exercised end to end.
pub struct MockAi {
    translations: Mutex<VecDeque<Result<String, LlmError>>>,
    drafts: Mutex<VecDeque<Result<String, LlmError>>>,

    pub translate_calls: Mutex<Vec<Document>>,
    pub draft_calls: Mutex<Vec<DraftRequest>>,
}

impl MockAi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            translations: Mutex::new(VecDeque::new()),
            drafts: Mutex::new(VecDeque::new()),
            translate_calls: Mutex::new(Vec::new()),
            draft_calls: Mutex::new(Vec::new()),
        })
    }

    pub fn script_translation(&self, raw: &str) {
        self.translations
            .lock()
            .expect("script lock")
            .push_back(Ok(raw.to_string()));
    }

    pub fn script_translation_err(&self, err: LlmError) {
        self.translations
            .lock()
            .expect("script lock")
            .push_back(Err(err));
    }

    pub fn script_draft(&self, raw: &str) {
        self.drafts
            .lock()
            .expect("script lock")
            .push_back(Ok(raw.to_string()));
    }

    pub fn script_draft_err(&self, err: LlmError) {
        self.drafts.lock().expect("script lock").push_back(Err(err));
    }
}

impl LetterAi for MockAi {
    fn translate_letter(&self, document: &Document) -> Result<Document, LlmError> {
        self.translate_calls
            .lock()
            .expect("calls lock")
            .push(document.clone());

        match self
            .translations
            .lock()
            .expect("script lock")
            .pop_front()
            .expect("unscripted translate call")
        {
            Ok(raw) => json::parse_document(&raw),
            Err(e) => Err(e),
        }
    }

    fn draft_highlight(&self, request: &DraftRequest) -> Result<Highlight, LlmError> {
        self.draft_calls
            .lock()
            .expect("calls lock")
            .push(request.clone());

        match self
            .drafts
            .lock()
            .expect("script lock")
            .pop_front()
            .expect("unscripted draft call")
        {
            Ok(raw) => json::parse_highlight_draft(&raw),
            Err(e) => Err(e),
        }
    }
}

/// An English rendition of the seed with both histories untouched, as a
/// well-behaved translation would return it.
pub fn translated_seed() -> Document {
    seed_document()
        .with_field(FieldEdit::QuarterTitle("Q3 2025".to_string()))
        .with_field(FieldEdit::EarningsSummary(vec![
            "(Revenue) YoY -0.7%, QoQ -4.8%".to_string(),
            "- Volume decline from seasonal effects".to_string(),
        ]))
        .with_field(FieldEdit::IrSupport(vec![
            "Dedicated IR line 02-3480-5000 (ext. 5)".to_string(),
        ]))
}

pub fn translated_seed_json() -> String {
    serde_json::to_string(&translated_seed()).expect("serialize translated seed")
}
