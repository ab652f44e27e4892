// tests/export_letter.rs

mod common;

use irletter_lib::command;
use irletter_lib::diagnostics::EventKind;
use irletter_lib::document::FieldEdit;

#[test]
fn export_writes_a_self_contained_page_under_the_exports_dir() {
    let env = common::setup();

    let path = command::write_letter_html(&env.state, env.ctx()).expect("write_letter_html");
    assert!(path.starts_with(env.ctx().exports_dir()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("html"));

    let page = std::fs::read_to_string(&path).expect("read export");
    assert!(page.contains("<!DOCTYPE html>"));
    assert!(page.contains("2025년 3분기"));
    assert!(page.contains("<svg"));
    assert!(page.contains("BUSINESS HIGHLIGHTS"));

    let events = env.state.diagnostics.lock().expect("diag lock").recent();
    assert!(events.iter().any(|e| e.kind == EventKind::ExportWritten));
}

#[test]
fn export_reflects_the_current_document_not_the_seed() {
    let env = common::setup();

    command::set_field(
        FieldEdit::QuarterTitle("2026년 1분기".to_string()),
        &env.state,
    )
    .expect("set_field");

    let path = command::write_letter_html(&env.state, env.ctx()).expect("write_letter_html");
    let page = std::fs::read_to_string(&path).expect("read export");
    assert!(page.contains("2026년 1분기"));
    assert!(!page.contains("<title>2025년 3분기"));
}

#[test]
fn consecutive_exports_do_not_clobber_each_other() {
    let env = common::setup();

    let first = command::write_letter_html(&env.state, env.ctx()).expect("first export");
    // timestamped names collide within the same second; the second write
    // must pick a fresh name
    let second = command::write_letter_html(&env.state, env.ctx()).expect("second export");

    assert_ne!(first, second);
    assert!(first.exists());
    assert!(second.exists());
}
