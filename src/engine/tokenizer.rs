//! Segment classification.
//!
//! The input is split on single spaces, so leading, trailing and repeated
//! spaces yield empty segments. An empty segment after a word is kept (it is
//! the "next word, nothing typed yet" position); a run of them collapses into
//! one through `TokenSequence::push`.
//!
//! Classification never fails. Text the catalog does not know becomes a
//! `string` token.

use crate::{Suggestion, SuggestionCatalog, Token, TokenSequence};

/// Split `raw` and classify every segment against `catalog`.
///
/// ```text
/// "$user && !foo"
///   ├─ "$user" -> Scalar(value "$user")
///   ├─ "&&"    -> Scalar(binary "&&")
///   └─ "!foo"  -> Compound(unary "!", string "foo")
/// ```
pub fn tokenize(raw: &str, catalog: &SuggestionCatalog) -> TokenSequence {
    let sequence: TokenSequence = raw.split(' ').map(|segment| classify(segment, catalog)).collect();

    if std::env::var_os("SELECTOR_DEBUG").is_some() {
        let kinds: Vec<String> = sequence.iter().map(describe).collect();
        eprintln!("[tokenize] input=\"{}\" tokens=[{}]", raw, kinds.join(", "));
    }

    sequence
}

fn classify(segment: &str, catalog: &SuggestionCatalog) -> Token {
    if let Some(remainder) = negated_remainder(segment) {
        let inner = catalog.lookup(remainder).cloned().unwrap_or_else(|| Suggestion::string(remainder));
        return Token::Compound { unary: catalog.negation().clone(), inner };
    }

    match catalog.lookup(segment) {
        Some(known) => Token::Scalar(known.clone()),
        None => Token::Scalar(Suggestion::string(segment)),
    }
}

/// Text between the first `!` and the next one, when non-empty.
///
/// Anything before the `!` is dropped: `a!b` negates `b`.
fn negated_remainder(segment: &str) -> Option<&str> {
    segment.split('!').nth(1).filter(|rest| !rest.is_empty())
}

fn describe(token: &Token) -> String {
    match token {
        Token::Scalar(s) => format!("{}:{:?}", s.kind, s.value),
        Token::Compound { unary, inner } => format!("[{}:{:?} {}:{:?}]", unary.kind, unary.value, inner.kind, inner.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SuggestionType;

    fn kinds(seq: &TokenSequence) -> Vec<String> {
        seq.iter().map(describe).collect()
    }

    #[test]
    fn known_and_unknown_segments() {
        let catalog = SuggestionCatalog::default();
        let seq = tokenize("$string && foo", &catalog);
        assert_eq!(kinds(&seq), vec!["value:\"$string\"", "binary:\"&&\"", "string:\"foo\""]);
    }

    #[test]
    fn catalog_descriptions_are_carried() {
        let catalog = SuggestionCatalog::default();
        let seq = tokenize("$user", &catalog);
        let token = seq.last().and_then(Token::scalar).unwrap();
        assert_eq!(token.description.as_deref(), Some("the user context"));
    }

    #[test]
    fn negation_builds_compound_tokens() {
        let catalog = SuggestionCatalog::default();
        let seq = tokenize("!$http !nope", &catalog);
        assert_eq!(kinds(&seq), vec!["[unary:\"!\" value:\"$http\"]", "[unary:\"!\" string:\"nope\"]"]);
    }

    #[test]
    fn lone_bang_is_a_unary_token() {
        let catalog = SuggestionCatalog::default();
        let seq = tokenize("!", &catalog);
        assert_eq!(seq.last().and_then(Token::scalar).map(|s| s.kind), Some(SuggestionType::Unary));
    }

    #[test]
    fn text_before_bang_is_dropped() {
        let catalog = SuggestionCatalog::default();
        let seq = tokenize("x!$user", &catalog);
        assert_eq!(kinds(&seq), vec!["[unary:\"!\" value:\"$user\"]"]);
    }

    #[test]
    fn double_bang_is_a_string() {
        let catalog = SuggestionCatalog::default();
        let seq = tokenize("!!$user", &catalog);
        assert_eq!(kinds(&seq), vec!["string:\"!!$user\""]);
    }

    #[test]
    fn empty_segments_are_coalesced() {
        let catalog = SuggestionCatalog::default();
        assert_eq!(kinds(&tokenize("", &catalog)), vec!["string:\"\""]);
        assert_eq!(kinds(&tokenize("   ", &catalog)), vec!["string:\"\""]);
        assert_eq!(kinds(&tokenize("$user ", &catalog)), vec!["value:\"$user\"", "string:\"\""]);
        assert_eq!(kinds(&tokenize("$user    &&", &catalog)), vec!["value:\"$user\"", "string:\"\"", "binary:\"&&\""]);
        assert_eq!(kinds(&tokenize(" $user", &catalog)), vec!["string:\"\"", "value:\"$user\""]);
    }

    #[test]
    fn blank_catalog_entry_does_not_capture_word_boundaries() {
        let catalog = SuggestionCatalog::new(vec![Suggestion::value(""), Suggestion::value("$a")]);
        assert_eq!(kinds(&tokenize("$a   ", &catalog)), vec!["value:\"$a\"", "string:\"\""]);
        assert_eq!(kinds(&tokenize("", &catalog)), vec!["string:\"\""]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = SuggestionCatalog::default();
        assert_eq!(kinds(&tokenize("$USER", &catalog)), vec!["string:\"$USER\""]);
    }
}
