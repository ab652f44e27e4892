// src/ui/mod.rs

pub mod fonts;
pub mod message;
pub mod panel_draft;
pub mod panel_editor;
pub mod panel_preview;
pub mod topbar;
pub mod widgets;

use eframe::egui;
use std::sync::Arc;

use irletter_lib::command;
use irletter_lib::command_state::take_pending_failure;
use irletter_lib::context::AppCtx;
use irletter_lib::jobs;
use irletter_lib::llm::LetterAi;
use irletter_lib::render;
use irletter_lib::types::{AiCallKind, AppState, LanguageMode};

use message::PanelMsgState;
use panel_draft::{DraftAction, DraftPanel};
use panel_editor::EditorPanel;
use panel_preview::PreviewPanel;
use topbar::TopBarAction;

/// Shared-state snapshot the panels draw from, derived once per frame so
/// every panel sees the same mode and busy flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCtx {
    pub mode: LanguageMode,
    pub busy: Option<AiCallKind>,
    pub ai_available: bool,
}

pub struct UiApp {
    state: Arc<AppState>,
    ctx: Arc<AppCtx>,
    ai: Option<Arc<dyn LetterAi>>,

    editor: EditorPanel,
    preview: PreviewPanel,
    draft: DraftPanel,

    // AI failures and export results surface here
    notice: PanelMsgState,
}

impl UiApp {
    pub fn new(state: Arc<AppState>, ctx: Arc<AppCtx>, ai: Option<Arc<dyn LetterAi>>) -> Self {
        Self {
            state,
            ctx,
            ai,
            editor: EditorPanel::new(),
            preview: PreviewPanel::new(),
            draft: DraftPanel::new(),
            notice: PanelMsgState::default(),
        }
    }

    fn derive_frame_ctx(&self) -> FrameCtx {
        let mode = self
            .state
            .letter
            .lock()
            .map(|g| g.mode)
            .unwrap_or(LanguageMode::Korean);

        let busy = self
            .state
            .ai
            .lock()
            .ok()
            .and_then(|g| g.in_flight.map(|call| call.kind));

        FrameCtx {
            mode,
            busy,
            ai_available: self.ai.is_some(),
        }
    }

    fn handle_topbar(&mut self, action: TopBarAction, egui_ctx: &egui::Context, debug_ui: bool) {
        match action {
            TopBarAction::SwitchKorean => {
                if let Err(e) = command::switch_to_korean(&self.state) {
                    self.notice.from_app_error(&e, debug_ui);
                }
            }

            TopBarAction::SwitchEnglish => {
                let Some(ai) = self.ai.clone() else {
                    self.notice
                        .set_user_msg(&irletter_lib::error::AppError::AiUnavailable.user_msg());
                    return;
                };
                match command::begin_translation(&self.state) {
                    Ok(Some(ticket)) => {
                        let repaint = repaint_hook(egui_ctx);
                        jobs::spawn_translation(self.state.clone(), ai, ticket, repaint);
                        self.notice.clear();
                    }
                    Ok(None) => {}
                    Err(e) => self.notice.from_app_error(&e, debug_ui),
                }
            }

            TopBarAction::Print => match command::export_letter(&self.state, &self.ctx) {
                Ok(path) => self.notice.set_success(format!(
                    "인쇄용 파일을 저장하고 열었습니다: {}",
                    path.display()
                )),
                Err(e) => self.notice.from_app_error(&e, debug_ui),
            },
        }
    }

    fn handle_draft(&mut self, action: DraftAction, egui_ctx: &egui::Context, debug_ui: bool) {
        match action {
            DraftAction::Generate => {
                let Some(ai) = self.ai.clone() else {
                    self.notice
                        .set_user_msg(&irletter_lib::error::AppError::AiUnavailable.user_msg());
                    return;
                };
                match command::begin_generation(&self.state) {
                    Ok(ticket) => {
                        let repaint = repaint_hook(egui_ctx);
                        jobs::spawn_draft(self.state.clone(), ai, ticket, repaint);
                    }
                    Err(e) => self.notice.from_app_error(&e, debug_ui),
                }
            }
        }
    }
}

fn repaint_hook(egui_ctx: &egui::Context) -> impl Fn() + Send + 'static {
    let egui_ctx = egui_ctx.clone();
    move || egui_ctx.request_repaint()
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let debug_ui = self.ctx.debug_ui;

        // Worker outcomes land between frames; pick up any queued failure.
        if let Some(failure) = take_pending_failure(self.state.as_ref()) {
            self.notice.set_user_msg(&failure.msg);
        }

        let frame_ctx = self.derive_frame_ctx();

        let document = match self.state.letter.lock() {
            Ok(guard) => guard.document.clone(),
            Err(_) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    widgets::ui_notice(ui, "내부 상태 잠금에 실패했습니다. 앱을 재시작해주세요.");
                });
                return;
            }
        };

        if let Some(action) = topbar::ui(ctx, &frame_ctx) {
            self.handle_topbar(action, ctx, debug_ui);
        }

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(
                        "© 2025 (주)KCC Investor Relations System - Interactive Letter Generator v1.0",
                    )
                    .small()
                    .weak(),
                );
            });
        });

        egui::SidePanel::left("editor")
            .resizable(true)
            .default_width(440.0)
            .min_width(380.0)
            .show(ctx, |ui| {
                self.notice.show(ui, debug_ui);

                if frame_ctx.busy == Some(AiCallKind::Translate) {
                    panel_editor::translating_view(ui);
                } else {
                    self.editor
                        .ui(ui, self.state.as_ref(), &document, &frame_ctx, debug_ui);
                }
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(229, 231, 235))
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                let view = render::project(&document);
                self.preview.ui(ui, &view);
            });

        if let Some(action) = self.draft.ui(ctx, self.state.as_ref(), &frame_ctx, debug_ui) {
            self.handle_draft(action, ctx, debug_ui);
        }
    }
}
