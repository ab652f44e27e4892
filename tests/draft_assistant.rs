// tests/draft_assistant.rs
//
// Assistant phase machine: collect keywords, generate, hold the draft for
// review, and merge only on explicit acceptance.

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use irletter_lib::command;
use irletter_lib::document::FieldEdit;
use irletter_lib::error::AppError;
use irletter_lib::jobs;
use irletter_lib::llm::error::LlmError;
use irletter_lib::llm::json::{
    parse_highlight_draft, DRAFT_FALLBACK_SUBTITLE,
};
use irletter_lib::seed::seed_document;
use irletter_lib::types::{AssistantPhase, Segment};

fn phase(env: &common::TestEnv) -> AssistantPhase {
    env.state.assistant.lock().expect("assistant lock").phase.clone()
}

#[test]
fn open_collect_and_cancel() {
    let env = common::setup();

    command::open_assistant(&env.state).expect("open_assistant");
    assert_eq!(phase(&env), AssistantPhase::Collecting);

    command::set_keyword(Segment::Coatings, "선박용 도료 수주 호조".to_string(), &env.state)
        .expect("set_keyword");

    command::cancel_assistant(&env.state).expect("cancel_assistant");
    assert_eq!(phase(&env), AssistantPhase::Idle);

    // keywords are cleared on cancel
    command::open_assistant(&env.state).expect("open_assistant");
    let assistant = env.state.assistant.lock().expect("assistant lock");
    assert_eq!(assistant.keywords.get(Segment::Coatings), "");
}

#[test]
fn keyword_edits_are_rejected_outside_collecting() {
    let env = common::setup();

    match command::set_keyword(Segment::Silicone, "x".to_string(), &env.state) {
        Err(AppError::AssistantNotCollecting) => {}
        other => panic!("expected AssistantNotCollecting, got {:?}", other),
    }
}

#[test]
fn generation_ticket_carries_keywords_and_quarter_title() {
    let env = common::setup();

    command::open_assistant(&env.state).expect("open_assistant");
    command::set_keyword(Segment::BuildingMaterials, "수익성 방어".to_string(), &env.state)
        .expect("set_keyword");

    let ticket = command::begin_generation(&env.state).expect("begin_generation");
    assert_eq!(ticket.request.quarter_title, seed_document().quarter_title);
    assert_eq!(
        ticket.request.keywords.get(Segment::BuildingMaterials),
        "수익성 방어"
    );
    assert!(matches!(phase(&env), AssistantPhase::Generating { .. }));

    // no re-submission while generating
    match command::cancel_assistant(&env.state) {
        Err(AppError::AiBusy) => {}
        other => panic!("expected AiBusy, got {:?}", other),
    }
}

#[test]
fn partial_draft_response_falls_back_per_field() {
    let env = common::setup();

    command::open_assistant(&env.state).expect("open_assistant");
    let ticket = command::begin_generation(&env.state).expect("begin_generation");

    // {"title":"X"} with subtitle/details missing must not be an error
    let outcome = parse_highlight_draft("{\"title\":\"X\"}");
    command::finish_generation(ticket.generation, outcome, &env.state)
        .expect("finish_generation");

    match phase(&env) {
        AssistantPhase::Drafted { draft } => {
            assert_eq!(draft.title, "X");
            assert_eq!(draft.subtitle, DRAFT_FALLBACK_SUBTITLE);
            assert!(draft.details.is_empty());
        }
        other => panic!("expected Drafted, got {:?}", other),
    }
}

#[test]
fn accepted_draft_replaces_the_first_card() {
    let env = common::setup();
    let seed = seed_document();

    command::open_assistant(&env.state).expect("open_assistant");
    let ticket = command::begin_generation(&env.state).expect("begin_generation");
    let outcome = parse_highlight_draft(
        "{\"title\":\"4분기 전망\",\"subtitle\":\"회복 기대\",\"details\":[\"수요 회복\"]}",
    );
    command::finish_generation(ticket.generation, outcome, &env.state)
        .expect("finish_generation");
    command::accept_draft(&env.state).expect("accept_draft");

    let letter = env.state.letter.lock().expect("letter lock");
    let cards = &letter.document.business_highlights;
    assert_eq!(cards.len(), seed.business_highlights.len());
    assert_eq!(cards[0].title, "4분기 전망");
    assert_eq!(cards[1], seed.business_highlights[1]);
    assert_eq!(cards[2], seed.business_highlights[2]);
    drop(letter);

    assert_eq!(phase(&env), AssistantPhase::Idle);
}

#[test]
fn accepted_draft_is_appended_when_no_cards_exist() {
    let env = common::setup();
    command::set_field(FieldEdit::BusinessHighlights(Vec::new()), &env.state)
        .expect("set_field");

    command::open_assistant(&env.state).expect("open_assistant");
    let ticket = command::begin_generation(&env.state).expect("begin_generation");
    let outcome =
        parse_highlight_draft("{\"title\":\"T\",\"subtitle\":\"S\",\"details\":[]}");
    command::finish_generation(ticket.generation, outcome, &env.state)
        .expect("finish_generation");
    command::accept_draft(&env.state).expect("accept_draft");

    let letter = env.state.letter.lock().expect("letter lock");
    assert_eq!(letter.document.business_highlights.len(), 1);
    assert_eq!(letter.document.business_highlights[0].title, "T");
}

#[test]
fn failed_generation_returns_to_collecting_with_keywords_intact() {
    let env = common::setup();

    command::open_assistant(&env.state).expect("open_assistant");
    command::set_keyword(Segment::Silicone, "DMC 가격 상승".to_string(), &env.state)
        .expect("set_keyword");
    let ticket = command::begin_generation(&env.state).expect("begin_generation");

    command::finish_generation(
        ticket.generation,
        Err(LlmError::EmptyResponse),
        &env.state,
    )
    .expect("finish_generation");

    assert_eq!(phase(&env), AssistantPhase::Collecting);
    let assistant = env.state.assistant.lock().expect("assistant lock");
    assert_eq!(assistant.keywords.get(Segment::Silicone), "DMC 가격 상승");
    drop(assistant);

    let ai = env.state.ai.lock().expect("ai lock");
    assert!(ai.in_flight.is_none());
    assert!(ai.pending_failure.is_some());
}

#[test]
fn discarding_a_draft_leaves_the_document_alone() {
    let env = common::setup();
    let seed = seed_document();

    command::open_assistant(&env.state).expect("open_assistant");
    let ticket = command::begin_generation(&env.state).expect("begin_generation");
    let outcome =
        parse_highlight_draft("{\"title\":\"T\",\"subtitle\":\"S\",\"details\":[]}");
    command::finish_generation(ticket.generation, outcome, &env.state)
        .expect("finish_generation");
    command::cancel_assistant(&env.state).expect("cancel_assistant");

    assert_eq!(phase(&env), AssistantPhase::Idle);
    let letter = env.state.letter.lock().expect("letter lock");
    assert_eq!(letter.document, seed);
}

#[test]
fn draft_worker_holds_the_parsed_draft() {
    let env = common::setup();
    let ai = common::MockAi::new();
    ai.script_draft("```json\n{\"title\":\"T\",\"subtitle\":\"S\",\"details\":[\"a\"]}\n```");

    command::open_assistant(&env.state).expect("open_assistant");
    let ticket = command::begin_generation(&env.state).expect("begin_generation");

    let notified = Arc::new(AtomicBool::new(false));
    let flag = notified.clone();
    let handle = jobs::spawn_draft(env.state.clone(), ai.clone(), ticket, move || {
        flag.store(true, Ordering::SeqCst);
    });
    handle.join().expect("worker join");

    assert!(notified.load(Ordering::SeqCst));
    let calls = ai.draft_calls.lock().expect("calls");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].quarter_title, seed_document().quarter_title);
    drop(calls);

    match phase(&env) {
        AssistantPhase::Drafted { draft } => {
            assert_eq!(draft.title, "T");
            assert_eq!(draft.details, vec!["a".to_string()]);
        }
        other => panic!("expected Drafted, got {:?}", other),
    }
}
