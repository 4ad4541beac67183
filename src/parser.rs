//! Phase 2: Document Builder
//!
//! The builder walks the token stream with an LL(1) grammar and
//! constructs the document model:
//! - `[` Text `]` opens a new section, appended in encounter order.
//! - Text `=` Text appends a key to the most recently opened section.
//! - A pair seen before any header attaches to the implicit section
//!   whose name is the empty string, created on demand.
//!
//! Any other shape is a grammar error: parsing aborts at the first
//! violation and the partially built document is dropped.

use crate::document::{Document, Key, Section};
use crate::error::{ParseContext, ParseError, Result};
use crate::tokenizer::{Token, TokenKind};

/// Build a document from the token stream.
pub fn build(tokens: &[Token<'_>], ctx: &ParseContext) -> Result<Document> {
    let mut document = Document::new();
    let mut i = 0;

    while i < tokens.len() {
        let t = tokens[i];
        match t.kind {
            TokenKind::LBracket => {
                i = parse_header(tokens, i, &mut document, ctx)?;
            }
            TokenKind::Text => {
                i = parse_pair(tokens, i, &mut document, ctx)?;
            }
            TokenKind::Equal => {
                return Err(
                    ParseError::KeyWithoutName(String::new()).with_location(ctx, t.line, t.col)
                );
            }
            TokenKind::RBracket => {
                return Err(ParseError::UnexpectedClosingBracket(String::new())
                    .with_location(ctx, t.line, t.col));
            }
        }
    }

    Ok(document)
}

/// Parse `[` Text `]` and append the new section.
/// Returns the index of the first token after the header.
fn parse_header(
    tokens: &[Token<'_>],
    i: usize,
    document: &mut Document,
    ctx: &ParseContext,
) -> Result<usize> {
    let open = tokens[i];

    let name = match tokens.get(i + 1) {
        Some(t) if t.kind == TokenKind::Text => t,
        _ => {
            return Err(ParseError::ExpectedSectionName(String::new()).with_location(
                ctx,
                open.line,
                open.col,
            ));
        }
    };
    let section = Section::new(name.text);
    if section.name().is_empty() {
        return Err(
            ParseError::EmptySectionName(String::new()).with_location(ctx, name.line, name.col)
        );
    }

    match tokens.get(i + 2) {
        Some(t) if t.kind == TokenKind::RBracket => {}
        _ => {
            return Err(ParseError::UnclosedSectionHeader(String::new()).with_location(
                ctx,
                name.line,
                name.col,
            ));
        }
    }

    document.push_section(section);
    Ok(i + 3)
}

/// Parse Text `=` Text and append the key to the current section.
/// Returns the index of the first token after the pair.
fn parse_pair(
    tokens: &[Token<'_>],
    i: usize,
    document: &mut Document,
    ctx: &ParseContext,
) -> Result<usize> {
    let key = tokens[i];

    let equal = match tokens.get(i + 1) {
        Some(t) if t.kind == TokenKind::Equal => t,
        _ => {
            return Err(
                ParseError::ExpectedEqual(String::new()).with_location(ctx, key.line, key.col)
            );
        }
    };

    let value = match tokens.get(i + 2) {
        Some(t) if t.kind == TokenKind::Text => t,
        _ => {
            return Err(
                ParseError::ExpectedValue(String::new()).with_location(ctx, equal.line, equal.col)
            );
        }
    };

    document
        .tail_section_mut()
        .push_key(Key::new(key.text, value.text));
    Ok(i + 3)
}
