//! Error types for query-string decoding.
//!
//! Only tokenization can fail. Once the query string decodes, every field parser falls back
//! to its default instead of returning an error.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that abort a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A `%` escape is truncated or is not followed by two hex digits.
    #[error("invalid percent-encoding at byte {position}")]
    InvalidPercentEncoding {
        /// Byte offset of the offending `%` in the raw query string.
        position: usize,
        /// The raw query string.
        input: String,
    },

    /// The percent-decoded bytes are not valid UTF-8.
    #[error("decoded query string is not valid UTF-8")]
    InvalidUtf8 {
        /// The raw query string.
        input: String,
        /// Underlying conversion error.
        source: FromUtf8Error,
    },
}

impl QueryError {
    /// Returns the raw query string that failed to decode.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPercentEncoding { input, .. } | Self::InvalidUtf8 { input, .. } => input,
        }
    }

    /// Formats the error with the input and, where known, a caret under the failing byte.
    pub fn format_with_context(&self) -> String {
        let mut result = format!("{self}\n  {}", self.input());
        if let Self::InvalidPercentEncoding { position, input } = self {
            let clamped = (*position).min(input.len());
            result.push_str(&format!("\n  {}^", " ".repeat(clamped)));
        }
        result
    }
}

/// Error returned when a string does not name a query option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option key: {0}")]
pub struct UnknownOptionKey(pub String);
