// src/error.rs

use std::fmt;

use crate::llm::error::LlmError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    Io(std::io::Error),
    Msg(String),
    StateLockPoisoned,

    // --------------------------------------------------
    // AI call admission / assistant flow
    // --------------------------------------------------
    AiBusy,
    AiUnavailable,
    AssistantNotCollecting,
    AssistantNoDraft,

    // --------------------------------------------------
    // AI collaborator (transport / parse / shape)
    // --------------------------------------------------
    Llm(LlmError),

    // --------------------------------------------------
    // print / export
    // --------------------------------------------------
    ExportWriteFailed(String),
    ExportOpenFailed(String),
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let mut kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            // generic
            Io(_) => "파일 작업에 실패했습니다.",
            Msg(_) => "작업에 실패했습니다.",
            StateLockPoisoned => "내부 상태 잠금에 실패했습니다.",

            // admission / assistant
            AiBusy => {
                kind = UserMsgKind::Info;
                "AI 요청이 이미 진행 중입니다. 잠시만 기다려주세요."
            }
            AiUnavailable => {
                kind = UserMsgKind::Warn;
                "AI 기능을 사용할 수 없습니다. GEMINI_API_KEY 설정을 확인해주세요."
            }
            AssistantNotCollecting => "키워드 입력 단계에서만 가능한 작업입니다.",
            AssistantNoDraft => "적용할 초안이 없습니다.",

            // AI collaborator
            Llm(e) => match e {
                LlmError::Transport(_) => "AI 서비스에 연결하지 못했습니다. 잠시 후 다시 시도해주세요.",
                LlmError::Http { .. } => "AI 서비스가 오류를 반환했습니다. API 키를 확인해주세요.",
                LlmError::EmptyResponse => "AI 응답이 비어 있습니다. 다시 시도해주세요.",
                LlmError::MalformedJson(_) => "AI 응답이 올바른 JSON이 아닙니다. 다시 시도해주세요.",
                LlmError::UnexpectedShape(_) => "AI 응답의 형식이 예상과 다릅니다. 다시 시도해주세요.",
            },

            // export
            ExportWriteFailed(_) => "인쇄용 파일 저장에 실패했습니다.",
            ExportOpenFailed(_) => "인쇄용 파일을 여는 데 실패했습니다.",
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            Io(e) => write!(f, "io error: {e}"),
            Msg(s) => write!(f, "{s}"),
            StateLockPoisoned => write!(f, "state lock poisoned"),

            AiBusy => write!(f, "an AI call is already in flight"),
            AiUnavailable => write!(f, "AI client unavailable: no API key configured"),
            AssistantNotCollecting => write!(f, "assistant is not collecting keywords"),
            AssistantNoDraft => write!(f, "assistant holds no draft to apply"),

            Llm(e) => write!(f, "llm error: {e}"),

            ExportWriteFailed(s) => write!(f, "export write failed: {s}"),
            ExportOpenFailed(s) => write!(f, "export open failed: {s}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Llm(e)
    }
}
