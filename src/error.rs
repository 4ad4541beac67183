//! Error types for INI parsing.

use thiserror::Error;

/// Result type for INI parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying filename for error reporting.
#[derive(Clone, Debug)]
pub struct ParseContext {
    pub filename: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
        }
    }

    /// Format a location suffix for error messages.
    pub fn loc_suffix(&self, line: usize, col: usize) -> String {
        match &self.filename {
            Some(name) => format!(" at {}:{} of <{}>", line + 1, col + 1, name),
            None => String::new(),
        }
    }
}

/// Error type for INI parsing.
///
/// Every variant is a grammar error: a malformed section header or
/// key/value statement. Parsing aborts at the first grammar error and
/// any partially built document is dropped.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Section header with no name after the opening bracket.
    #[error("Expected section name after \"[\"{0}")]
    ExpectedSectionName(String),

    /// Section header whose name trims to the empty string.
    #[error("Empty section name{0}")]
    EmptySectionName(String),

    /// Section header not closed by "]".
    #[error("Expected \"]\" to close section header{0}")]
    UnclosedSectionHeader(String),

    /// Key not followed by "=".
    #[error("Expected \"=\" after key{0}")]
    ExpectedEqual(String),

    /// "=" not followed by a value.
    #[error("Expected value after \"=\"{0}")]
    ExpectedValue(String),

    /// "=" with no key before it.
    #[error("Expected key before \"=\"{0}")]
    KeyWithoutName(String),

    /// "]" outside a section header.
    #[error("Unexpected \"]\"{0}")]
    UnexpectedClosingBracket(String),
}

impl ParseError {
    /// Create an error with location information.
    pub fn with_location(self, ctx: &ParseContext, line: usize, col: usize) -> Self {
        let suffix = ctx.loc_suffix(line, col);
        match self {
            ParseError::ExpectedSectionName(_) => ParseError::ExpectedSectionName(suffix),
            ParseError::EmptySectionName(_) => ParseError::EmptySectionName(suffix),
            ParseError::UnclosedSectionHeader(_) => ParseError::UnclosedSectionHeader(suffix),
            ParseError::ExpectedEqual(_) => ParseError::ExpectedEqual(suffix),
            ParseError::ExpectedValue(_) => ParseError::ExpectedValue(suffix),
            ParseError::KeyWithoutName(_) => ParseError::KeyWithoutName(suffix),
            ParseError::UnexpectedClosingBracket(_) => ParseError::UnexpectedClosingBracket(suffix),
        }
    }
}
