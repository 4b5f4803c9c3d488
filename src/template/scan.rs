//! Single-pass placeholder scanner
//!
//! Splits template text into non-overlapping tokens:
//! - `{name}` placeholders, with optional whitespace inside the braces
//!   (`{ name }`); names are `[a-zA-Z0-9_-]+`
//! - literal `{{` and `}}` pairs, which belong to the document's own
//!   template syntax and are never placeholders
//! - everything else
//!
//! Extraction, normalization and population all walk the same token
//! stream, so they always agree on what counts as a placeholder.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::ops::Range;

/// Token representing a parsed template fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text (range in the original string)
    Literal(Range<usize>),
    /// A literal `{{` or `}}` pair, copied through untouched
    Escaped(Range<usize>),
    /// `{name}` or `{ name }`; `range` covers both braces
    Placeholder { name: &'a str, range: Range<usize> },
}

impl<'a> Token<'a> {
    pub fn placeholder_name(&self) -> Option<&'a str> {
        match self {
            Token::Placeholder { name, .. } => Some(*name),
            _ => None,
        }
    }
}

/// Split `text` into tokens in one left-to-right pass.
///
/// A `{{` or `}}` pair is consumed before a placeholder is tried, so
/// `{{x}}` stays literal. A candidate whose closing brace starts a `}}`
/// pair (`{x}}`) is not a placeholder either.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    // All delimiters are ASCII, so byte offsets always land on char boundaries.
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b @ (b'{' | b'}') if bytes.get(i + 1) == Some(&b) => {
                flush_literal(&mut tokens, literal_start, i);
                tokens.push(Token::Escaped(i..i + 2));
                i += 2;
                literal_start = i;
            }
            b'{' => match match_placeholder(text, i) {
                Some((name, end)) => {
                    flush_literal(&mut tokens, literal_start, i);
                    tokens.push(Token::Placeholder {
                        name,
                        range: i..end,
                    });
                    i = end;
                    literal_start = i;
                }
                None => i += 1,
            },
            _ => i += 1,
        }
    }

    flush_literal(&mut tokens, literal_start, bytes.len());
    tokens
}

fn flush_literal(tokens: &mut Vec<Token<'_>>, start: usize, end: usize) {
    if end > start {
        tokens.push(Token::Literal(start..end));
    }
}

/// Try to match `{ ws* name ws* }` at `open`; returns the name and the
/// offset just past the closing brace.
fn match_placeholder(text: &str, open: usize) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();

    let name_start = skip_whitespace(bytes, open + 1);
    let mut i = name_start;
    while i < bytes.len() && is_name_byte(bytes[i]) {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name_end = i;

    let close = skip_whitespace(bytes, name_end);
    if bytes.get(close) != Some(&b'}') || bytes.get(close + 1) == Some(&b'}') {
        return None;
    }

    Some((&text[name_start..name_end], close + 1))
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Unique placeholder names referenced in `text`, sorted.
///
/// Example: `"{a} { b } {a} {{c}}"` → `{"a", "b"}`
pub fn extract_placeholders(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .iter()
        .filter_map(Token::placeholder_name)
        .map(str::to_string)
        .collect()
}

pub fn has_placeholders(text: &str) -> bool {
    tokenize(text)
        .iter()
        .any(|token| matches!(token, Token::Placeholder { .. }))
}

/// Rewrite every placeholder into its tight form (`{ x }` → `{x}`).
///
/// Returns `Cow::Borrowed` when nothing needs rewriting.
pub fn normalize(text: &str) -> Cow<'_, str> {
    let tokens = tokenize(text);
    let loose = tokens.iter().any(|token| match token {
        Token::Placeholder { name, range } => range.len() != name.len() + 2,
        _ => false,
    });
    if !loose {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    for token in &tokens {
        match token {
            Token::Literal(range) | Token::Escaped(range) => result.push_str(&text[range.clone()]),
            Token::Placeholder { name, .. } => {
                result.push('{');
                result.push_str(name);
                result.push('}');
            }
        }
    }
    Cow::Owned(result)
}
