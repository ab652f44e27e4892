// src/ui/panel_draft.rs

use eframe::egui;
use irletter_lib::{
    command,
    llm::gemini::keyword_fallback,
    types::{AppState, AssistantPhase, Segment},
};

use super::{message::PanelMsgState, widgets, FrameCtx};

/// Click reported up to the app shell, which admits the call and spawns
/// the worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftAction {
    Generate,
}

/// The draft assistant window. Keyword inputs and the held draft live in
/// `AssistantState`; this panel draws whatever phase the state machine is
/// in and routes accept/cancel straight to the command layer.
pub struct DraftPanel {
    msg: PanelMsgState,
}

impl DraftPanel {
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
        ctx: &egui::Context,
        state: &AppState,
        frame: &FrameCtx,
        debug_ui: bool,
    ) -> Option<DraftAction> {
        let (phase, keywords) = match state.assistant.lock() {
            Ok(guard) => (guard.phase.clone(), guard.keywords.clone()),
            Err(_) => return None,
        };
        if phase == AssistantPhase::Idle {
            return None;
        }

        let mut action = None;

        egui::Window::new("AI 초안 어시스턴트")
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                self.msg.show(ui, debug_ui);

                match &phase {
                    AssistantPhase::Idle => {}

                    AssistantPhase::Collecting => {
                        ui.label("사업부별 핵심 키워드를 입력하세요. 비워두면 기본 문구가 사용됩니다.");
                        ui.add_space(8.0);

                        for segment in Segment::ALL {
                            widgets::field_label(ui, segment.label());
                            let mut text = keywords.get(segment).to_string();
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut text)
                                    .id_salt(("draft_keyword", segment.label()))
                                    .hint_text(keyword_fallback(segment))
                                    .desired_width(f32::INFINITY),
                            );
                            if response.changed() {
                                self.apply(command::set_keyword(segment, text, state));
                            }
                            ui.add_space(4.0);
                        }

                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            let generate = ui.add_enabled(
                                frame.ai_available && frame.busy.is_none(),
                                egui::Button::new(
                                    egui::RichText::new("✨ 초안 생성").strong(),
                                ),
                            );
                            if generate.clicked() {
                                action = Some(DraftAction::Generate);
                            }
                            if ui.button("취소").clicked() {
                                self.apply(command::cancel_assistant(state));
                                self.msg.clear();
                            }
                        });
                    }

                    AssistantPhase::Generating { .. } => {
                        ui.add_space(20.0);
                        ui.vertical_centered(|ui| {
                            ui.add(egui::Spinner::new().size(32.0));
                            ui.add_space(10.0);
                            ui.label(egui::RichText::new("초안을 생성하는 중...").strong());
                        });
                        ui.add_space(20.0);
                    }

                    AssistantPhase::Drafted { draft } => {
                        ui.label(egui::RichText::new("생성된 초안").strong());
                        ui.add_space(6.0);
                        egui::Frame::group(ui.style())
                            .inner_margin(egui::Margin::same(10))
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new(&draft.title).strong().size(15.0));
                                ui.label(
                                    egui::RichText::new(format!("“ {} ”", draft.subtitle))
                                        .italics(),
                                );
                                ui.separator();
                                for detail in &draft.details {
                                    ui.horizontal_wrapped(|ui| {
                                        ui.label("•");
                                        ui.label(detail);
                                    });
                                }
                            });

                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            if ui
                                .button(egui::RichText::new("첫 번째 카드에 적용").strong())
                                .clicked()
                            {
                                self.apply(command::accept_draft(state));
                                self.msg.clear();
                            }
                            if ui.button("버리기").clicked() {
                                self.apply(command::cancel_assistant(state));
                                self.msg.clear();
                            }
                        });
                    }
                }
            });

        action
    }

    fn apply(&mut self, result: irletter_lib::error::AppResult<()>) {
        if let Err(e) = result {
            self.msg.from_app_error(&e, false);
        }
    }
}
