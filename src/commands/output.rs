//! Command execution result type.

use serde::Serialize;

/// Closed set of command-level fault codes.
///
/// User-facing messages sometimes collapse distinct faults (mkdir reports
/// a missing parent with the same phrasing as an existing target); the
/// code keeps them distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingOperand,
    NotFound,
    AlreadyExists,
    CommandNotFound,
}

/// The discriminated outcome of one command execution.
///
/// Renderers pattern-match on the variant (serialized as `kind`) and
/// need nothing else from the core.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Output {
    /// `ls`: entry names in directory insertion order.
    Ls { entries: Vec<String> },
    /// `cat`: file content, verbatim.
    Cat { content: String },
    /// Plain text (`help`).
    Text { content: String },
    /// Successful `mkdir`/`cd`: nothing to render.
    Empty,
    /// A recovered failure, attributed to the command that detected it.
    Error {
        source: String,
        code: ErrorKind,
        message: String,
    },
}

impl Output {
    pub fn text(content: impl Into<String>) -> Self {
        Output::Text {
            content: content.into(),
        }
    }

    pub fn error(source: impl Into<String>, code: ErrorKind, message: impl Into<String>) -> Self {
        Output::Error {
            source: source.into(),
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Output::Error { .. })
    }

    /// Fault code, when the output is an error.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Output::Error { code, .. } => Some(*code),
            _ => None,
        }
    }
}
