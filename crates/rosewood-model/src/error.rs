// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Failure to parse a wire string into a model enum.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    UnknownRsvpStatus { value: String },
    UnknownPriority { value: String },
    UnknownTableShape { value: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRsvpStatus { value } => write!(
                f,
                "unknown rsvp status {value:?}, expected one of: pending, confirmed, declined"
            ),
            Self::UnknownPriority { value } => write!(
                f,
                "unknown priority {value:?}, expected one of: low, medium, high"
            ),
            Self::UnknownTableShape { value } => write!(
                f,
                "unknown table shape {value:?}, expected one of: round, rectangular"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::ParseError;

    #[test]
    fn display_names_the_offending_value() {
        let err = ParseError::UnknownRsvpStatus {
            value: "maybe".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("\"maybe\""), "got: {text}");
        assert!(text.contains("pending"), "got: {text}");
    }
}
