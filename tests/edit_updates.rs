// tests/edit_updates.rs
//
// The edit surface writes through four commands; every one must replace
// exactly the field or cell it names and nothing else.

mod common;

use irletter_lib::command;
use irletter_lib::document::{FieldEdit, HighlightField, IndicatorCell, PerformanceCell};
use irletter_lib::seed::seed_document;

#[test]
fn set_field_replaces_only_the_named_field() {
    let env = common::setup();
    let seed = seed_document();

    command::set_field(
        FieldEdit::QuarterTitle("2025년 4분기".to_string()),
        &env.state,
    )
    .expect("set_field");

    let letter = env.state.letter.lock().expect("letter lock");
    assert_eq!(letter.document.quarter_title, "2025년 4분기");
    assert_eq!(letter.document.date, seed.date);
    assert_eq!(letter.document.earnings_summary, seed.earnings_summary);
    assert_eq!(letter.document.performance_history, seed.performance_history);
    assert_eq!(letter.document.business_highlights, seed.business_highlights);
    assert_eq!(letter.document.indicator_history, seed.indicator_history);
    assert_eq!(letter.document.ir_support, seed.ir_support);
    assert_eq!(letter.document.ir_action, seed.ir_action);
}

#[test]
fn revenue_cell_edit_touches_one_cell_of_one_row() {
    let env = common::setup();
    let seed = seed_document();

    // seed row 6 is {"'25 3Q", 16228, 1173, 7.2}
    command::set_performance_cell(6, PerformanceCell::Revenue(17000.0), &env.state)
        .expect("set_performance_cell");

    let letter = env.state.letter.lock().expect("letter lock");
    let history = &letter.document.performance_history;
    assert_eq!(history.len(), seed.performance_history.len());

    let row = &history[6];
    assert_eq!(row.quarter, "'25 3Q");
    assert_eq!(row.revenue, 17000.0);
    assert_eq!(row.operating_profit, 1173.0);
    assert_eq!(row.profit_rate, 7.2);

    for (i, row) in history.iter().enumerate() {
        if i != 6 {
            assert_eq!(row, &seed.performance_history[i], "row {i} drifted");
        }
    }
}

#[test]
fn indicator_cell_edit_is_isolated() {
    let env = common::setup();
    let seed = seed_document();

    command::set_indicator_cell(2, IndicatorCell::DebtRatio(150.0), &env.state)
        .expect("set_indicator_cell");

    let letter = env.state.letter.lock().expect("letter lock");
    let history = &letter.document.indicator_history;
    assert_eq!(history[2].debt_ratio, 150.0);
    assert_eq!(history[2].liquidity_ratio, seed.indicator_history[2].liquidity_ratio);
    assert_eq!(history[0], seed.indicator_history[0]);
    assert_eq!(history[4], seed.indicator_history[4]);
    assert_eq!(letter.document.performance_history, seed.performance_history);
}

#[test]
fn highlight_field_edit_keeps_the_other_cards() {
    let env = common::setup();
    let seed = seed_document();

    command::set_highlight_field(1, HighlightField::Title("재무구조 개선".to_string()), &env.state)
        .expect("set_highlight_field");

    let letter = env.state.letter.lock().expect("letter lock");
    let cards = &letter.document.business_highlights;
    assert_eq!(cards[1].title, "재무구조 개선");
    assert_eq!(cards[1].subtitle, seed.business_highlights[1].subtitle);
    assert_eq!(cards[0], seed.business_highlights[0]);
    assert_eq!(cards[2], seed.business_highlights[2]);
}

#[test]
fn out_of_range_cell_edit_leaves_the_document_alone() {
    let env = common::setup();
    let seed = seed_document();

    command::set_performance_cell(99, PerformanceCell::Revenue(1.0), &env.state)
        .expect("set_performance_cell");

    let letter = env.state.letter.lock().expect("letter lock");
    assert_eq!(letter.document, seed);
}

#[test]
fn emptied_text_block_becomes_a_single_empty_line() {
    let env = common::setup();

    // An emptied multi-line control round-trips as [""], not [].
    let lines = irletter_lib::document::text_to_lines("");
    command::set_field(FieldEdit::EarningsSummary(lines), &env.state).expect("set_field");

    let letter = env.state.letter.lock().expect("letter lock");
    assert_eq!(letter.document.earnings_summary, vec![String::new()]);
}
