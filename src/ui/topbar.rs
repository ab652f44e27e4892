// src/ui/topbar.rs

use eframe::egui;
use irletter_lib::types::{AiCallKind, LanguageMode};

use super::widgets::ACCENT;
use super::FrameCtx;

/// What the user asked for this frame. The app shell owns the commands and
/// the worker spawns; the bar only reports clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopBarAction {
    SwitchKorean,
    SwitchEnglish,
    Print,
}

pub fn ui(ctx: &egui::Context, frame: &FrameCtx) -> Option<TopBarAction> {
    let mut action = None;

    egui::TopBottomPanel::top("topbar")
        .frame(
            egui::Frame::NONE
                .fill(ACCENT)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("(주)KCC IR LETTER")
                        .color(egui::Color32::WHITE)
                        .strong()
                        .size(20.0),
                );

                ui.add_space(24.0);

                let translating = frame.busy == Some(AiCallKind::Translate);

                if language_button(ui, "KOR", frame.mode == LanguageMode::Korean, true).clicked() {
                    action = Some(TopBarAction::SwitchKorean);
                }
                let eng_enabled = frame.ai_available && !translating;
                let eng = language_button(
                    ui,
                    "ENG (AI Auto)",
                    frame.mode == LanguageMode::English,
                    eng_enabled,
                );
                let eng = if frame.ai_available {
                    eng
                } else {
                    eng.on_hover_text("GEMINI_API_KEY가 설정되지 않아 번역을 사용할 수 없습니다.")
                };
                if eng.clicked() {
                    action = Some(TopBarAction::SwitchEnglish);
                }
                if translating {
                    ui.add(egui::Spinner::new().color(egui::Color32::WHITE));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let print = egui::Button::new(
                        egui::RichText::new("PDF 다운로드 / 인쇄")
                            .color(egui::Color32::WHITE)
                            .strong(),
                    )
                    .fill(egui::Color32::from_rgb(245, 158, 11))
                    .corner_radius(egui::CornerRadius::same(8u8));
                    if ui.add(print).clicked() {
                        action = Some(TopBarAction::Print);
                    }
                });
            });
        });

    action
}

fn language_button(
    ui: &mut egui::Ui,
    label: &str,
    selected: bool,
    enabled: bool,
) -> egui::Response {
    let (fill, text_color) = if selected {
        (egui::Color32::WHITE, ACCENT)
    } else {
        (
            egui::Color32::from_white_alpha(25),
            egui::Color32::from_white_alpha(190),
        )
    };

    let button = egui::Button::new(egui::RichText::new(label).color(text_color).strong())
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8u8));
    ui.add_enabled(enabled, button)
}
