use super::{non_empty, ErrorCause, ErrorValue};
use crate::types::{ErrorCategory, Origin};
use std::fmt::Display;

impl Display for ErrorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !f.alternate() {
            return write!(f, "{}: {}", self.category(), self.message());
        }
        Display::fmt(&self.detail().multiline(), f)
    }
}

impl std::error::Error for ErrorValue {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.cause() {
            Some(ErrorCause::Error(inner)) => Some(inner),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ErrorValue {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        let message = error.to_string();
        let kind = format!("{:?}", error.kind());
        ErrorValue::at(ErrorCategory::Io, non_empty(message, "i/o failure"), Origin::caller())
            .with_metadata("io_kind", kind)
            .with_cause(error)
    }
}
