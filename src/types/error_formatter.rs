//! Detailed rendering of [`ErrorValue`]s.
//!
//! The default layout is the single-line diagnostic form:
//!
//! ```text
//! Error: <category> | Message: <message> | Timestamp: <ts> | Source: <origin>[ | Context: ..][ | Metadata: ..][ | Cause: ..]
//! ```
//!
//! Segment order is fixed. [`DetailFormat`] only controls the separator, which
//! optional segments appear, and how deep the cause chain is followed.

use crate::types::ErrorValue;
use std::fmt::Display;

/// Configuration for [`ErrorValue::detailed_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFormat {
    pub separator: String,
    pub show_timestamp: bool,
    pub show_origin: bool,
    pub show_context: bool,
    pub show_metadata: bool,
    pub show_cause: bool,
    /// How many links of the cause chain to render. `1` renders only the
    /// immediate cause.
    pub cause_depth: usize,
    pub multiline: bool,
    pub indent: String,
}

impl Default for DetailFormat {
    fn default() -> Self {
        Self {
            separator: " | ".into(),
            show_timestamp: true,
            show_origin: true,
            show_context: true,
            show_metadata: true,
            show_cause: true,
            cause_depth: 1,
            multiline: false,
            indent: "  ".into(),
        }
    }
}

impl DetailFormat {
    /// Category, message and context only.
    #[inline]
    pub fn compact() -> Self {
        Self {
            show_timestamp: false,
            show_origin: false,
            show_metadata: false,
            ..Default::default()
        }
    }

    /// One segment per line, the full cause chain included.
    #[inline]
    pub fn multiline() -> Self {
        Self {
            separator: "\n".into(),
            multiline: true,
            cause_depth: usize::MAX,
            ..Default::default()
        }
    }

    /// Renders `error` according to this configuration.
    pub fn render(&self, error: &ErrorValue) -> String {
        let mut segments: Vec<(&str, String)> = Vec::with_capacity(7);

        segments.push(("Error", error.category().to_string()));
        segments.push(("Message", error.message().to_owned()));
        if self.show_timestamp {
            segments.push(("Timestamp", error.timestamp_iso()));
        }
        if self.show_origin {
            segments.push(("Source", error.origin().to_string()));
        }
        if self.show_context && !error.context().is_empty() {
            segments.push(("Context", error.context().to_string()));
        }
        if self.show_metadata && !error.metadata().is_empty() {
            segments.push(("Metadata", error.metadata().to_string()));
        }
        if self.show_cause && self.cause_depth > 0 && error.cause().is_some() {
            let chain = error
                .causes()
                .take(self.cause_depth)
                .map(|cause| cause.to_string())
                .collect::<Vec<_>>()
                .join(" <- ");
            segments.push(("Cause", chain));
        }

        let mut result = String::with_capacity(segments.len() * 32);
        for (i, (label, value)) in segments.iter().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
                if self.multiline {
                    result.push_str(&self.indent);
                }
            }
            result.push_str(label);
            result.push_str(": ");
            result.push_str(value);
        }
        result
    }
}

/// Builder for customizing detailed display output, created by
/// [`ErrorValue::detail`].
pub struct DetailFormatBuilder<'a> {
    pub(crate) error: &'a ErrorValue,
    pub(crate) config: DetailFormat,
}

impl<'a> DetailFormatBuilder<'a> {
    pub fn new(error: &'a ErrorValue) -> Self {
        Self { error, config: DetailFormat::default() }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn show_timestamp(mut self, show: bool) -> Self {
        self.config.show_timestamp = show;
        self
    }

    pub fn show_origin(mut self, show: bool) -> Self {
        self.config.show_origin = show;
        self
    }

    pub fn show_context(mut self, show: bool) -> Self {
        self.config.show_context = show;
        self
    }

    pub fn show_metadata(mut self, show: bool) -> Self {
        self.config.show_metadata = show;
        self
    }

    pub fn show_cause(mut self, show: bool) -> Self {
        self.config.show_cause = show;
        self
    }

    pub fn cause_depth(mut self, depth: usize) -> Self {
        self.config.cause_depth = depth;
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = DetailFormat::compact();
        self
    }

    pub fn multiline(mut self) -> Self {
        self.config = DetailFormat::multiline();
        self
    }

    /// Returns the configuration built so far.
    pub fn into_config(self) -> DetailFormat {
        self.config
    }
}

impl Display for DetailFormatBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.config.render(self.error))
    }
}
