// src/llm/error.rs

use std::fmt;

/// Failure taxonomy for one outbound AI exchange. Every variant is
/// recoverable: the caller surfaces a notice and leaves state untouched.
#[derive(Debug, Clone)]
pub enum LlmError {
    Transport(String),
    Http { status: u16, body: String },
    EmptyResponse,
    MalformedJson(String),
    UnexpectedShape(String),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::Transport(s) => write!(f, "transport failure: {s}"),
            LlmError::Http { status, body } => {
                write!(f, "http status {status}: {}", clip(body, 200))
            }
            LlmError::EmptyResponse => write!(f, "empty response body"),
            LlmError::MalformedJson(s) => write!(f, "response is not valid JSON: {s}"),
            LlmError::UnexpectedShape(s) => write!(f, "response JSON has the wrong shape: {s}"),
        }
    }
}

impl std::error::Error for LlmError {}

fn clip(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let clipped: String = s.chars().take(max_chars).collect();
    format!("{clipped}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_clips_long_http_bodies() {
        let err = LlmError::Http {
            status: 500,
            body: "x".repeat(500),
        };
        let shown = err.to_string();
        assert!(shown.contains("http status 500"));
        assert!(shown.chars().count() < 300);
    }
}
