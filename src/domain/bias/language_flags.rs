//! Loaded-Term Flagger - evidence snippets for display.
//!
//! Independent of the scoring signals. Returns at most [`MAX_FLAGS`] snippets,
//! de-duplicated by snippet text, in discovery order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::catalog::PhraseCatalog;
use super::lean::is_insufficient_text;

/// Upper bound on flags returned per text.
pub const MAX_FLAGS: usize = 5;

/// Default character window on each side of a term.
pub const DEFAULT_CONTEXT_CHARS: usize = 50;

/// Default token window on each side of a term.
pub const DEFAULT_CONTEXT_TOKENS: usize = 2;

/// One loaded term and the text around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageFlag {
    pub snippet: String,
    pub term: String,
}

/// How much surrounding context a snippet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "width", rename_all = "snake_case")]
pub enum FlagContext {
    /// Characters on each side of the first occurrence of each term.
    Chars(usize),
    /// Whitespace tokens on each side of every single-word term occurrence.
    Tokens(usize),
}

impl Default for FlagContext {
    fn default() -> Self {
        FlagContext::Chars(DEFAULT_CONTEXT_CHARS)
    }
}

/// Extracts loaded-term snippets.
pub struct LanguageFlagger<'a> {
    catalog: &'a PhraseCatalog,
    context: FlagContext,
}

impl<'a> LanguageFlagger<'a> {
    pub fn new(catalog: &'a PhraseCatalog, context: FlagContext) -> Self {
        Self { catalog, context }
    }

    /// Finds loaded terms in `text`.
    pub fn detect(&self, text: &str) -> Vec<LanguageFlag> {
        if is_insufficient_text(text) {
            return Vec::new();
        }

        let candidates = match self.context {
            FlagContext::Chars(width) => self.by_chars(text, width),
            FlagContext::Tokens(width) => self.by_tokens(text, width),
        };

        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .filter(|flag| seen.insert(flag.snippet.clone()))
            .take(MAX_FLAGS)
            .collect()
    }

    fn by_chars(&self, text: &str, width: usize) -> Vec<LanguageFlag> {
        // ASCII lowering keeps byte offsets aligned with `text`
        let lower = text.to_ascii_lowercase();

        self.catalog
            .flag_terms
            .iter()
            .filter_map(|term| {
                let start = lower.find(term.as_str())?;
                let end = start + term.len();
                let snippet = char_window(text, start, end, width).trim().to_string();
                Some(LanguageFlag {
                    snippet,
                    term: term.clone(),
                })
            })
            .collect()
    }

    fn by_tokens(&self, text: &str, width: usize) -> Vec<LanguageFlag> {
        let single_word: HashSet<&str> = self
            .catalog
            .flag_terms
            .iter()
            .map(String::as_str)
            .filter(|term| !term.contains(char::is_whitespace))
            .collect();
        let tokens: Vec<&str> = text.split_whitespace().collect();

        tokens
            .iter()
            .enumerate()
            .filter_map(|(i, token)| {
                let normalized = token
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase();
                if !single_word.contains(normalized.as_str()) {
                    return None;
                }
                let from = i.saturating_sub(width);
                let to = (i + width + 1).min(tokens.len());
                Some(LanguageFlag {
                    snippet: tokens[from..to].join(" "),
                    term: normalized,
                })
            })
            .collect()
    }
}

/// Slice of `text` extending `width` characters either side of `start..end`.
fn char_window(text: &str, start: usize, end: usize, width: usize) -> &str {
    let before: usize = text[..start]
        .chars()
        .rev()
        .take(width)
        .map(char::len_utf8)
        .sum();
    let after: usize = text[end..].chars().take(width).map(char::len_utf8).sum();
    &text[start - before..end + after]
}
