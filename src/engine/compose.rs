//! Folding tokens back to text, and committing a chosen suggestion.

use crate::{Suggestion, SuggestionType, Token, TokenSequence};

/// Join tokens with single spaces. A compound is written as one lexeme
/// (`!value`).
pub fn serialize(sequence: &TokenSequence) -> String {
    sequence.iter().map(Token::text).collect::<Vec<_>>().join(" ")
}

/// Apply `suggestion` to the word under the cursor.
///
/// ```text
/// last entry                 result
/// ─────────────────────────  ──────────────────────────────
/// string "use"               replaced by suggestion
/// same kind ("$user")        replaced by suggestion
/// unary "!"                  Compound(!, suggestion)
/// Compound(!, "us")          Compound(!, suggestion)
/// anything else              suggestion appended
/// ```
///
/// A unary suggestion is never paired into a compound; it is placed like any
/// other token.
pub fn commit(sequence: &TokenSequence, suggestion: &Suggestion) -> TokenSequence {
    let pairs = suggestion.kind != SuggestionType::Unary;
    let completes = |current: &Suggestion| current.kind == SuggestionType::String || current.kind == suggestion.kind;
    let mut tokens = sequence.clone().into_vec();

    match tokens.pop() {
        Some(Token::Scalar(last)) if completes(&last) => {
            tokens.push(Token::Scalar(suggestion.clone()));
        }
        Some(Token::Scalar(last)) if pairs && last.kind == SuggestionType::Unary => {
            tokens.push(Token::Compound { unary: last, inner: suggestion.clone() });
        }
        Some(Token::Compound { unary, inner }) if pairs && completes(&inner) => {
            tokens.push(Token::Compound { unary, inner: suggestion.clone() });
        }
        Some(last) => {
            tokens.push(last);
            tokens.push(Token::Scalar(suggestion.clone()));
        }
        None => tokens.push(Token::Scalar(suggestion.clone())),
    }

    let committed: TokenSequence = tokens.into_iter().collect();

    if std::env::var_os("SELECTOR_DEBUG").is_some() {
        eprintln!(
            "[commit] suggestion={}:{:?} before=\"{}\" after=\"{}\"",
            suggestion.kind,
            suggestion.value,
            serialize(sequence),
            serialize(&committed)
        );
    }

    committed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SuggestionCatalog;
    use crate::engine::tokenize;

    fn roundtrip(text: &str, suggestion: &str) -> String {
        let catalog = SuggestionCatalog::default();
        let sequence = tokenize(text, &catalog);
        let chosen = catalog.lookup(suggestion).cloned().unwrap();
        serialize(&commit(&sequence, &chosen))
    }

    #[test]
    fn serialize_joins_with_single_spaces() {
        let catalog = SuggestionCatalog::default();
        let sequence = tokenize("$user && !$http   foo", &catalog);
        assert_eq!(serialize(&sequence), "$user && !$http  foo");
    }

    #[test]
    fn commit_cases() {
        // (text, suggestion, expected text)
        let cases: Vec<(&str, &str, &str)> = vec![
            ("use", "$user", "$user"),
            ("$string && use", "$object", "$string && $object"),
            ("", "$string", "$string"),
            ("$user ", "&&", "$user &&"),
            ("$user !", "$http", "$user !$http"),
            ("!", "$http", "!$http"),
            ("!us", "$user", "!$user"),
            ("$user", "&&", "$user &&"),
            ("$user && ", "!", "$user && !"),
            ("!$user", "||", "!$user ||"),
            ("$user", "$user.ip_address", "$user.ip_address"),
            ("$string && $user", "$user.ip_address", "$string && $user.ip_address"),
            ("!$user", "$user.ip_address", "!$user.ip_address"),
            ("$user &&", "||", "$user ||"),
        ];

        for (text, suggestion, expected) in cases {
            assert_eq!(roundtrip(text, suggestion), expected, "committing {:?} onto {:?}", suggestion, text);
        }
    }

    #[test]
    fn commit_replaces_string_token_in_place() {
        let catalog = SuggestionCatalog::default();
        let sequence = tokenize("$string && use", &catalog);
        let object = catalog.lookup("$object").cloned().unwrap();
        let committed = commit(&sequence, &object);
        assert_eq!(committed.len(), 3);
        assert_eq!(committed.last(), Some(&Token::Scalar(object)));
    }

    #[test]
    fn commit_onto_empty_sequence_appends() {
        let committed = commit(&TokenSequence::new(), &Suggestion::value("x"));
        assert_eq!(serialize(&committed), "x");
    }
}
