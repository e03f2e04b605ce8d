//! Next-token category resolution.
//!
//! The accepted shape is `value (binary value)*`, where any value may carry a
//! leading `!`. Rather than running a general grammar, the resolver looks at
//! the last two scalar tokens and picks the first matching row of a fixed
//! table.
//!
//! ## Finding the scalar pair
//!
//! ```text
//! [.., X, Compound(!, v)]  -> previous = Scalar(!), last = v
//! [.., Compound, s]        -> previous = Compound,  last = s
//! [.., p, s]               -> previous = Scalar(p), last = s
//! [s]                      -> previous = Start,     last = s
//! ```
//!
//! ## Decision table (first match wins)
//!
//! | previous          | last                     | category | fragment     |
//! |-------------------|--------------------------|----------|--------------|
//! | compound          | binary                   | value    | last         |
//! | compound          | anything else            | binary   | ""           |
//! | unary             | value                    | value    | last         |
//! | any               | unary                    | value    | ""           |
//! | value             | string                   | binary   | ""           |
//! | string ""         | string                   | all      | ""           |
//! | string or value   | empty text               | binary   | last ("")    |
//! | any               | binary                   | binary   | last         |
//! | any               | anything else            | last.kind| last         |
//!
//! The last row can report `Category::String`. The filter treats it like
//! `All`, which is the only place that category is consumed.

use crate::{Suggestion, SuggestionKinds, SuggestionType, Token, TokenSequence};
use std::fmt;

/// Class of token that may be typed next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Value,
    Unary,
    Binary,
    /// Fallback for a trailing unmatched word; filters like `All`.
    String,
    /// Values or a negation.
    All,
}

impl Category {
    /// Catalog sections this category draws suggestions from.
    pub fn kinds(self) -> SuggestionKinds {
        match self {
            Category::Value => SuggestionKinds::VALUE,
            Category::Unary => SuggestionKinds::UNARY,
            Category::Binary => SuggestionKinds::BINARY,
            Category::String | Category::All => SuggestionKinds::VALUE | SuggestionKinds::UNARY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Value => "value",
            Category::Unary => "unary",
            Category::Binary => "binary",
            Category::String => "string",
            Category::All => "all",
        }
    }
}

impl From<SuggestionType> for Category {
    fn from(kind: SuggestionType) -> Self {
        match kind {
            SuggestionType::Value => Category::Value,
            SuggestionType::Unary => Category::Unary,
            SuggestionType::Binary => Category::Binary,
            SuggestionType::String => Category::String,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to suggest next, and the partial text to filter it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub category: Category,
    pub fragment: String,
}

impl Resolution {
    pub fn new(category: Category, fragment: impl Into<String>) -> Self {
        Resolution { category, fragment: fragment.into() }
    }
}

/// What sits before the last scalar token.
#[derive(Debug, Clone, Copy)]
enum Previous<'a> {
    Start,
    Scalar(&'a Suggestion),
    Compound,
}

/// Resolve the next-token category for `sequence`.
///
/// An empty sequence (never produced by the tokenizer) resolves to `All`.
pub fn resolve(sequence: &TokenSequence) -> Resolution {
    let (previous, last) = match sequence.last() {
        None => return Resolution::new(Category::All, ""),
        Some(Token::Compound { unary, inner }) => (Previous::Scalar(unary), inner),
        Some(Token::Scalar(last)) => {
            let previous = match sequence.penultimate() {
                None => Previous::Start,
                Some(Token::Scalar(p)) => Previous::Scalar(p),
                Some(Token::Compound { .. }) => Previous::Compound,
            };
            (previous, last)
        }
    };

    let (category, fragment) = decide(previous, last);

    if std::env::var_os("SELECTOR_DEBUG").is_some() {
        eprintln!(
            "[resolve] previous={:?} last={}:{:?} category={} fragment={:?}",
            previous, last.kind, last.value, category, fragment
        );
    }

    Resolution::new(category, fragment)
}

fn decide<'a>(previous: Previous<'_>, last: &'a Suggestion) -> (Category, &'a str) {
    use SuggestionType as T;

    match (previous, last.kind) {
        (Previous::Compound, T::Binary) => (Category::Value, last.value.as_str()),
        (Previous::Compound, _) => (Category::Binary, ""),
        (Previous::Scalar(p), T::Value) if p.kind == T::Unary => (Category::Value, last.value.as_str()),
        (_, T::Unary) => (Category::Value, ""),
        (Previous::Scalar(p), T::String) if p.kind == T::Value => (Category::Binary, ""),
        (Previous::Scalar(p), T::String) if p.kind == T::String && p.value.is_empty() => (Category::All, ""),
        (Previous::Scalar(p), _) if last.value.is_empty() && matches!(p.kind, T::String | T::Value) => {
            (Category::Binary, last.value.as_str())
        }
        (_, T::Binary) => (Category::Binary, last.value.as_str()),
        (_, kind) => (Category::from(kind), last.value.as_str()),
    }
}
