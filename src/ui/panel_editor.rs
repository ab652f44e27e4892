// src/ui/panel_editor.rs

use eframe::egui;
use irletter_lib::{
    command,
    document::{
        Document, FieldEdit, HighlightField, IndicatorCell, PerformanceCell,
    },
    types::{AppState, LanguageMode},
};

use super::{message::PanelMsgState, widgets, FrameCtx};

/// The edit surface: one bound control per document field, per table row
/// and per highlight card. Controls show the current document (state down)
/// and report changes as whole-field or single-cell commands (events up);
/// nothing here caches document content between frames.
pub struct EditorPanel {
    msg: PanelMsgState,
}

impl EditorPanel {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        doc: &Document,
        frame: &FrameCtx,
        debug_ui: bool,
    ) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "콘텐츠 편집기 ({})",
                    match frame.mode {
                        LanguageMode::Korean => "KOR",
                        LanguageMode::English => "ENG",
                    }
                ))
                .strong()
                .size(18.0),
            );
        });
        ui.separator();

        self.msg.show(ui, debug_ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                self.section_basics(ui, state, doc);
                self.section_summary(ui, state, doc);
                self.section_performance(ui, state, doc);
                self.section_indicators(ui, state, doc);
                self.section_highlights(ui, state, doc, frame);
                self.section_ir(ui, state, doc);
                ui.add_space(30.0);
            });
    }

    fn apply(&mut self, result: irletter_lib::error::AppResult<()>) {
        if let Err(e) = result {
            self.msg.from_app_error(&e, false);
        }
    }

    fn section_basics(&mut self, ui: &mut egui::Ui, state: &AppState, doc: &Document) {
        widgets::section_header(ui, "기본 정보");

        widgets::field_label(ui, "발행 일자");
        if let Some(v) = widgets::text_field(ui, "edit_date", &doc.date) {
            self.apply(command::set_field(FieldEdit::Date(v), state));
        }

        widgets::field_label(ui, "분기 제목");
        if let Some(v) = widgets::text_field(ui, "edit_quarter_title", &doc.quarter_title) {
            self.apply(command::set_field(FieldEdit::QuarterTitle(v), state));
        }
    }

    fn section_summary(&mut self, ui: &mut egui::Ui, state: &AppState, doc: &Document) {
        widgets::section_header(ui, "실적 요약 (Earnings Summary)");
        if let Some(lines) = widgets::lines_editor(ui, "edit_summary", &doc.earnings_summary, 7) {
            self.apply(command::set_field(FieldEdit::EarningsSummary(lines), state));
        }
    }

    fn section_performance(&mut self, ui: &mut egui::Ui, state: &AppState, doc: &Document) {
        widgets::section_header(ui, "분기별 실적 데이터");

        egui::Grid::new("edit_performance")
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                ui.label(egui::RichText::new("분기").small().strong());
                ui.label(egui::RichText::new("매출액").small().strong());
                ui.label(egui::RichText::new("영업이익").small().strong());
                ui.label(egui::RichText::new("영업이익률").small().strong());
                ui.end_row();

                for (idx, row) in doc.performance_history.iter().enumerate() {
                    let mut quarter = row.quarter.clone();
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut quarter)
                                .id_salt(("perf_quarter", idx))
                                .desired_width(70.0),
                        )
                        .changed()
                    {
                        self.apply(command::set_performance_cell(
                            idx,
                            PerformanceCell::Quarter(quarter),
                            state,
                        ));
                    }
                    if let Some(v) = widgets::number_cell(ui, row.revenue, 10.0) {
                        self.apply(command::set_performance_cell(
                            idx,
                            PerformanceCell::Revenue(v),
                            state,
                        ));
                    }
                    if let Some(v) = widgets::number_cell(ui, row.operating_profit, 10.0) {
                        self.apply(command::set_performance_cell(
                            idx,
                            PerformanceCell::OperatingProfit(v),
                            state,
                        ));
                    }
                    if let Some(v) = widgets::number_cell(ui, row.profit_rate, 0.1) {
                        self.apply(command::set_performance_cell(
                            idx,
                            PerformanceCell::ProfitRate(v),
                            state,
                        ));
                    }
                    ui.end_row();
                }
            });
    }

    fn section_indicators(&mut self, ui: &mut egui::Ui, state: &AppState, doc: &Document) {
        widgets::section_header(ui, "재무 지표 데이터");

        egui::Grid::new("edit_indicators")
            .num_columns(5)
            .striped(true)
            .show(ui, |ui| {
                ui.label(egui::RichText::new("분기").small().strong());
                ui.label(egui::RichText::new("유동비율").small().strong());
                ui.label(egui::RichText::new("자기자본비율").small().strong());
                ui.label(egui::RichText::new("차입금의존도").small().strong());
                ui.label(egui::RichText::new("부채비율").small().strong());
                ui.end_row();

                for (idx, row) in doc.indicator_history.iter().enumerate() {
                    let mut quarter = row.quarter.clone();
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut quarter)
                                .id_salt(("ind_quarter", idx))
                                .desired_width(70.0),
                        )
                        .changed()
                    {
                        self.apply(command::set_indicator_cell(
                            idx,
                            IndicatorCell::Quarter(quarter),
                            state,
                        ));
                    }
                    if let Some(v) = widgets::number_cell(ui, row.liquidity_ratio, 0.5) {
                        self.apply(command::set_indicator_cell(
                            idx,
                            IndicatorCell::LiquidityRatio(v),
                            state,
                        ));
                    }
                    if let Some(v) = widgets::number_cell(ui, row.equity_ratio, 0.5) {
                        self.apply(command::set_indicator_cell(
                            idx,
                            IndicatorCell::EquityRatio(v),
                            state,
                        ));
                    }
                    if let Some(v) = widgets::number_cell(ui, row.dependency_ratio, 0.5) {
                        self.apply(command::set_indicator_cell(
                            idx,
                            IndicatorCell::DependencyRatio(v),
                            state,
                        ));
                    }
                    if let Some(v) = widgets::number_cell(ui, row.debt_ratio, 0.5) {
                        self.apply(command::set_indicator_cell(
                            idx,
                            IndicatorCell::DebtRatio(v),
                            state,
                        ));
                    }
                    ui.end_row();
                }
            });
    }

    fn section_highlights(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        doc: &Document,
        frame: &FrameCtx,
    ) {
        widgets::section_header(ui, "사업별 주요 성과");

        let assist = egui::Button::new(egui::RichText::new("✨ AI 초안 작성").strong());
        let assist = ui.add_enabled(frame.ai_available && frame.busy.is_none(), assist);
        let assist = if frame.ai_available {
            assist.on_hover_text("키워드를 입력하면 첫 번째 카드 초안을 생성합니다.")
        } else {
            assist.on_hover_text("GEMINI_API_KEY가 설정되지 않아 사용할 수 없습니다.")
        };
        if assist.clicked() {
            self.apply(command::open_assistant(state));
        }
        ui.add_space(6.0);

        for (idx, card) in doc.business_highlights.iter().enumerate() {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    widgets::field_label(ui, "제목");
                    if let Some(v) =
                        widgets::text_field(ui, &format!("hl_title_{idx}"), &card.title)
                    {
                        self.apply(command::set_highlight_field(
                            idx,
                            HighlightField::Title(v),
                            state,
                        ));
                    }

                    widgets::field_label(ui, "부제");
                    if let Some(v) =
                        widgets::text_field(ui, &format!("hl_subtitle_{idx}"), &card.subtitle)
                    {
                        self.apply(command::set_highlight_field(
                            idx,
                            HighlightField::Subtitle(v),
                            state,
                        ));
                    }

                    widgets::field_label(ui, "세부 내용");
                    if let Some(lines) =
                        widgets::lines_editor(ui, &format!("hl_details_{idx}"), &card.details, 4)
                    {
                        self.apply(command::set_highlight_field(
                            idx,
                            HighlightField::Details(lines),
                            state,
                        ));
                    }
                });
            ui.add_space(6.0);
        }
    }

    fn section_ir(&mut self, ui: &mut egui::Ui, state: &AppState, doc: &Document) {
        widgets::section_header(ui, "IR 활동 및 지원");

        widgets::field_label(ui, "IR 지원 채널");
        if let Some(lines) = widgets::lines_editor(ui, "edit_ir_support", &doc.ir_support, 4) {
            self.apply(command::set_field(FieldEdit::IrSupport(lines), state));
        }

        widgets::field_label(ui, "IR 활동 계획");
        if let Some(lines) = widgets::lines_editor(ui, "edit_ir_action", &doc.ir_action, 8) {
            self.apply(command::set_field(FieldEdit::IrAction(lines), state));
        }
    }
}

/// Shown in place of the form while a translation is in flight; the form
/// and this view are mutually exclusive on the same busy flag.
pub fn translating_view(ui: &mut egui::Ui) {
    ui.add_space(120.0);
    ui.vertical_centered(|ui| {
        ui.add(egui::Spinner::new().size(44.0));
        ui.add_space(16.0);
        ui.label(egui::RichText::new("Gemini AI 번역 중...").strong().size(17.0));
        ui.label(egui::RichText::new("전문 금융 용어로 최적화하고 있습니다.").weak());
    });
}
