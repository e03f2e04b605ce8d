#[macro_use]
mod macros;
mod api;
mod catalog;
mod engine;
mod field;

pub use api::{
    ActiveSuggestionState, Category, DEFAULT_MAX_RENDERED, Direction, FilteredSuggestions, Options, Resolution,
    RunMetrics, SuggestReport, commit, filter_suggestions, navigate, parse, resolve_category, serialize, suggest,
    suggest_verbose,
};
pub use catalog::SuggestionCatalog;
pub use field::SourceField;

use std::fmt;

// --- Suggestions ------------------------------------------------------------

/// Grammatical class of a suggestion or token.
///
/// `String` never appears in a catalog: it is synthesized by the tokenizer for
/// text that matches no known selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionType {
    Value,
    Unary,
    Binary,
    String,
}

impl SuggestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionType::Value => "value",
            SuggestionType::Unary => "unary",
            SuggestionType::Binary => "binary",
            SuggestionType::String => "string",
        }
    }

    /// The catalog kind this type lives under, if any.
    pub fn kind(self) -> SuggestionKinds {
        match self {
            SuggestionType::Value => SuggestionKinds::VALUE,
            SuggestionType::Unary => SuggestionKinds::UNARY,
            SuggestionType::Binary => SuggestionKinds::BINARY,
            SuggestionType::String => SuggestionKinds::empty(),
        }
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// Set of catalog sections a suggestion category draws from.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SuggestionKinds: u8 {
        const VALUE  = 1 << 0;
        const UNARY  = 1 << 1;
        const BINARY = 1 << 2;
    }
}

/// A single catalog entry, or a synthesized `string` token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suggestion {
    pub kind: SuggestionType,
    pub value: String,
    pub description: Option<String>,
}

impl Suggestion {
    pub fn new(kind: SuggestionType, value: impl Into<String>) -> Self {
        Suggestion { kind, value: value.into(), description: None }
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self::new(SuggestionType::Value, value)
    }

    /// Literal text that matched nothing in the catalog.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(SuggestionType::String, value)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn is_empty_string(&self) -> bool {
        self.kind == SuggestionType::String && self.value.is_empty()
    }
}

// --- Tokens -----------------------------------------------------------------

/// One whitespace-delimited chunk of a selector expression.
///
/// A `Compound` is a negation paired with the token it negates (`!value`). It
/// occupies a single slot and is never nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Scalar(Suggestion),
    Compound { unary: Suggestion, inner: Suggestion },
}

impl Token {
    pub fn scalar(&self) -> Option<&Suggestion> {
        match self {
            Token::Scalar(s) => Some(s),
            Token::Compound { .. } => None,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Token::Compound { .. })
    }

    /// Source text for this token. Compounds join without a separator.
    pub fn text(&self) -> String {
        match self {
            Token::Scalar(s) => s.value.clone(),
            Token::Compound { unary, inner } => format!("{}{}", unary.value, inner.value),
        }
    }
}

impl From<Suggestion> for Token {
    fn from(s: Suggestion) -> Self {
        Token::Scalar(s)
    }
}

/// Ordered tokens of an expression, left to right.
///
/// Invariant: never holds two consecutive empty `string` tokens. `push` drops
/// the second one, which models "still at the same word boundary".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new() -> Self {
        TokenSequence { tokens: Vec::new() }
    }

    /// Append `token`, coalescing repeated empty segments.
    pub fn push(&mut self, token: Token) {
        if let (Some(Token::Scalar(last)), Token::Scalar(next)) = (self.tokens.last(), &token) {
            if last.is_empty_string() && next.value.is_empty() {
                return;
            }
        }
        self.tokens.push(token);
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Entry before the last one.
    pub fn penultimate(&self) -> Option<&Token> {
        self.tokens.len().checked_sub(2).and_then(|i| self.tokens.get(i))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut seq = TokenSequence::new();
        for token in iter {
            seq.push(token);
        }
        seq
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
