//! Suggestion catalog.
//!
//! A `SuggestionCatalog` is an immutable value handed to every engine
//! operation. The unary (`!`) and binary (`&&`, `||`) sections are fixed; the
//! value section is supplied by the caller, usually from event-derived field
//! names, and falls back to the built-in defaults when that supply is empty.
//!
//! Refreshing the catalog means building a new value and recomputing; nothing
//! is patched in place and no overlap with the previous catalog is assumed.

#[path = "catalog/defaults.rs"]
mod defaults;

use crate::{Suggestion, SuggestionKinds, SuggestionType};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCatalog {
    values: Vec<Suggestion>,
}

impl Default for SuggestionCatalog {
    fn default() -> Self {
        SuggestionCatalog { values: defaults::VALUE.clone() }
    }
}

impl SuggestionCatalog {
    /// Build a catalog from explicit value suggestions.
    ///
    /// Entries keep their order; their `kind` is forced to `Value` and blank
    /// values are dropped, since an empty value would match every word
    /// boundary.
    pub fn new(values: Vec<Suggestion>) -> Self {
        let values = values
            .into_iter()
            .filter(|s| !s.value.trim().is_empty())
            .map(|s| Suggestion { kind: SuggestionType::Value, ..s })
            .collect();
        SuggestionCatalog { values }
    }

    /// Use `fetched` when it has usable entries, otherwise the default catalog.
    pub fn with_fallback(fetched: Vec<Suggestion>) -> Self {
        let catalog = Self::new(fetched);
        if catalog.values.is_empty() {
            if std::env::var_os("SELECTOR_DEBUG").is_some() {
                eprintln!("[catalog] fetched suggestions empty, using {} defaults", defaults::VALUE.len());
            }
            return Self::default();
        }
        catalog
    }

    /// Build a catalog from event-derived field names.
    ///
    /// Blank names are skipped and duplicates keep their first position.
    pub fn from_fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let values = names
            .into_iter()
            .map(Into::<String>::into)
            .filter(|name| !name.trim().is_empty())
            .filter(|name| seen.insert(name.clone()))
            .map(Suggestion::value)
            .collect();
        Self::with_fallback(values)
    }

    /// Parse a plain-text value catalog.
    ///
    /// One entry per line: the selector, then an optional free-form
    /// description. Blank lines and lines starting with `#` are ignored.
    ///
    /// ```text
    /// $string        all strings
    /// extra.**       everything in "Additional Data"
    /// password
    /// ```
    pub fn parse_values(text: &str) -> Vec<Suggestion> {
        let line_re = regex!(r"^\s*(\S+)(?:\s+(.*?))?\s*$");

        text.lines()
            .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
            .filter_map(|line| {
                let caps = line_re.captures(line)?;
                let value = caps.get(1)?.as_str();
                let suggestion = Suggestion::value(value);
                Some(match caps.get(2).map(|d| d.as_str()).filter(|d| !d.is_empty()) {
                    Some(description) => suggestion.with_description(description),
                    None => suggestion,
                })
            })
            .collect()
    }

    pub fn values(&self) -> &[Suggestion] {
        &self.values
    }

    pub fn unary(&self) -> &[Suggestion] {
        &defaults::UNARY
    }

    pub fn binary(&self) -> &[Suggestion] {
        &defaults::BINARY
    }

    /// The `!` operator paired into compound tokens.
    pub fn negation(&self) -> &Suggestion {
        &defaults::NEGATION
    }

    /// Every entry, values first, then unary, then binary.
    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.values.iter().chain(self.unary()).chain(self.binary())
    }

    /// Exact lookup of `text` across all sections.
    pub fn lookup(&self, text: &str) -> Option<&Suggestion> {
        self.iter().find(|s| s.value == text)
    }

    /// Entries whose kind is in `kinds`, in catalog order.
    pub fn subset(&self, kinds: SuggestionKinds) -> impl Iterator<Item = &Suggestion> {
        self.iter().filter(move |s| kinds.intersects(s.kind.kind()))
    }
}
