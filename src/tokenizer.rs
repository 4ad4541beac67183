//! Phase 1: Tokenizer
//!
//! The tokenizer converts raw INI source into a flat token stream:
//! - `LBracket` / `RBracket`: section header delimiters
//! - `Equal`: key/value separator
//! - `Text`: a maximal run of name or value characters
//!
//! Space, tab, and newline between tokens are skipped. A `;` or `#` at a
//! token boundary starts a comment running to end of line. Inside a text
//! run a comment starts only at a space immediately followed by `;` or
//! `#`, so `value 1 ; note` yields the text `value 1` while `value;1`
//! stays a single token.
//!
//! Tokens borrow their text from the input; trimming happens later when
//! the builder materializes names and values.

/// Token kind in the tokenizer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[` opening a section header.
    LBracket,
    /// `]` closing a section header.
    RBracket,
    /// `=` separating a key from its value.
    Equal,
    /// A run of characters forming a section name, key, or value.
    Text,
}

/// A single token in the token stream.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Zero-based line number for error reporting.
    pub line: usize,
    /// Zero-based byte column for error reporting.
    pub col: usize,
}

/// Whether the byte at `i` starts an inline comment: a space immediately
/// followed by `;` or `#`.
fn is_inline_comment(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b' ' && matches!(bytes.get(i + 1), Some(&b';') | Some(&b'#'))
}

/// Whether a byte ends a text run.
fn ends_text(b: u8) -> bool {
    b == b'=' || b == b']' || b == b'\t' || b == b'\n'
}

/// Scan source text into a token stream.
///
/// The end of the returned slice is the end of input; there is no
/// explicit terminator token.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut line = 0;
    let mut col = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'[' => {
                tokens.push(Token {
                    kind: TokenKind::LBracket,
                    text: &source[i..i + 1],
                    line,
                    col,
                });
                i += 1;
                col += 1;
            }
            b']' => {
                tokens.push(Token {
                    kind: TokenKind::RBracket,
                    text: &source[i..i + 1],
                    line,
                    col,
                });
                i += 1;
                col += 1;
            }
            b'=' => {
                tokens.push(Token {
                    kind: TokenKind::Equal,
                    text: &source[i..i + 1],
                    line,
                    col,
                });
                i += 1;
                col += 1;
            }
            b'\n' => {
                i += 1;
                line += 1;
                col = 0;
            }
            b' ' | b'\t' => {
                i += 1;
                col += 1;
            }
            b';' | b'#' => {
                // Comment runs to end of line; the newline itself is
                // handled by the main loop.
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                    col += 1;
                }
            }
            _ => {
                let start = i;
                let (start_line, start_col) = (line, col);
                while i < bytes.len() && !ends_text(bytes[i]) && !is_inline_comment(bytes, i) {
                    i += 1;
                    col += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Text,
                    text: &source[start..i],
                    line: start_line,
                    col: start_col,
                });
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).iter().map(|t| t.kind).collect()
    }

    fn texts<'a>(source: &'a str) -> Vec<&'a str> {
        tokenize(source)
            .iter()
            .filter(|t| t.kind == TokenKind::Text)
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn header_and_pair() {
        assert_eq!(
            kinds("[section]\nkey = value\n"),
            vec![
                TokenKind::LBracket,
                TokenKind::Text,
                TokenKind::RBracket,
                TokenKind::Text,
                TokenKind::Equal,
                TokenKind::Text,
            ]
        );
    }

    #[test]
    fn text_runs_keep_embedded_spaces() {
        assert_eq!(texts("key A = value 1\n"), vec!["key A ", "value 1"]);
    }

    #[test]
    fn inline_comment_ends_text_run() {
        assert_eq!(texts("key = value 1 ; note\n"), vec!["key ", "value 1"]);
        assert_eq!(texts("key = value 1 # note\n"), vec!["key ", "value 1"]);
    }

    #[test]
    fn comment_marker_without_space_stays_in_text() {
        assert_eq!(texts("key = value;1\n"), vec!["key ", "value;1"]);
        assert_eq!(texts("key#1 = v\n"), vec!["key#1 ", "v"]);
    }

    #[test]
    fn full_line_comments_are_skipped() {
        assert_eq!(kinds("; one\n# two\n"), vec![]);
        assert_eq!(texts("  ; indented comment\nkey = v\n"), vec!["key ", "v"]);
    }

    #[test]
    fn tab_ends_text_run() {
        assert_eq!(texts("key\t= value\n"), vec!["key", "value"]);
    }

    #[test]
    fn token_positions() {
        let tokens = tokenize("[s]\nkey = value\n");
        assert_eq!((tokens[0].line, tokens[0].col), (0, 0));
        assert_eq!((tokens[1].line, tokens[1].col), (0, 1));
        assert_eq!((tokens[2].line, tokens[2].col), (0, 2));
        assert_eq!((tokens[3].line, tokens[3].col), (1, 0));
        assert_eq!((tokens[4].line, tokens[4].col), (1, 4));
        assert_eq!((tokens[5].line, tokens[5].col), (1, 6));
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }
}
