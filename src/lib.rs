//! INI parser implementation.
//!
//! INI is a plain-text configuration format: `[section]` headers
//! followed by ordered `key = value` pairs, with `;` and `#` comments.
//! This crate parses INI text into an owned document model, supports
//! querying and mutating it, and re-serializes it in canonical form.
//!
//! # Parsing Pipeline
//!
//! The parser operates in two phases:
//!
//! 1. **Tokenizer**: Converts source text into a flat token stream,
//!    skipping whitespace and stripping comments. Tokens borrow their
//!    text from the input.
//!
//! 2. **Builder**: Walks the token stream with an LL(1) grammar and
//!    constructs the document model, rejecting malformed headers and
//!    pairs.
//!
//! Key/value pairs that appear before any `[section]` header are
//! attached to an implicit section whose name is the empty string.

mod document;
mod encode;
mod error;
mod parser;
mod tokenizer;

pub use document::{Document, Key, Section};
pub use encode::{encode, encode_into};
pub use error::{ParseError, Result};

/// Parse an INI document from a string.
///
/// # Example
///
/// ```
/// use inip::parse;
///
/// let document = parse("[server]\nhost = localhost\n").unwrap();
/// assert_eq!(document.get("server", "host"), Some("localhost"));
/// ```
pub fn parse(input: &str) -> Result<Document> {
    parse_with_filename(input, None)
}

/// Parse an INI document from a string with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<Document> {
    let ctx = error::ParseContext::new(filename);

    // Phase 1: Tokenize source
    let tokens = tokenizer::tokenize(input);

    // Phase 2: Build the document from tokens
    parser::build(&tokens, &ctx)
}
