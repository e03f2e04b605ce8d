//! Host event adapter.
//!
//! `SourceField` is the glue between a text input and the engine: it owns the
//! current text, its token sequence, the suggestion state and the catalog, and
//! turns host events into full recomputes. It knows nothing about any UI
//! toolkit; the host forwards events and renders `state()`.

use crate::api::{self, ActiveSuggestionState, Direction, Options};
use crate::{Suggestion, SuggestionCatalog, TokenSequence};

#[derive(Debug, Clone)]
pub struct SourceField {
    catalog: SuggestionCatalog,
    options: Options,
    text: String,
    sequence: TokenSequence,
    state: ActiveSuggestionState,
}

impl SourceField {
    /// A field holding `text`, with the suggestion list closed.
    pub fn new(text: impl Into<String>, catalog: SuggestionCatalog, options: Options) -> Self {
        let text = text.into();
        let sequence = api::parse(&text, &catalog);
        let state = api::suggest(&sequence, &catalog, &options).closed();
        SourceField { catalog, options, text, sequence, state }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sequence(&self) -> &TokenSequence {
        &self.sequence
    }

    pub fn state(&self) -> &ActiveSuggestionState {
        &self.state
    }

    pub fn catalog(&self) -> &SuggestionCatalog {
        &self.catalog
    }

    /// Re-tokenize `text` and reopen the list on its suggestions.
    pub fn on_text_change(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.recompute();
    }

    pub fn on_focus(&mut self) {
        self.recompute();
    }

    /// Swap in a refreshed catalog and recompute everything.
    ///
    /// With `reopen` this is a text change with the current text. Without it a
    /// closed list stays closed, for hosts whose refresh lands on a field the
    /// user is not typing in.
    pub fn on_catalog_refresh(&mut self, catalog: SuggestionCatalog, reopen: bool) {
        let was_open = self.state.is_open();
        self.catalog = catalog;
        self.recompute();
        if !(reopen || was_open) {
            self.state = self.state.closed();
        }
    }

    pub fn on_arrow_up(&mut self) {
        self.state = api::navigate(&self.state, Direction::Up);
    }

    pub fn on_arrow_down(&mut self) {
        self.state = api::navigate(&self.state, Direction::Down);
    }

    /// Commit the active suggestion.
    ///
    /// Returns the new text, or `None` when the list is closed and the host
    /// should handle Enter itself.
    pub fn on_enter(&mut self) -> Option<String> {
        let suggestion = self.state.active()?.clone();
        Some(self.on_item_click(&suggestion))
    }

    /// Commit `suggestion` and return the new text.
    pub fn on_item_click(&mut self, suggestion: &Suggestion) -> String {
        let committed = api::commit(&self.sequence, suggestion);
        self.text = api::serialize(&committed);
        self.sequence = api::parse(&self.text, &self.catalog);
        self.state = api::suggest(&self.sequence, &self.catalog, &self.options).closed();

        if std::env::var_os("SELECTOR_DEBUG").is_some() {
            eprintln!("[field] committed {:?} text=\"{}\"", suggestion.value, self.text);
        }

        self.text.clone()
    }

    /// Close the list without committing.
    pub fn on_blur(&mut self) {
        self.state = self.state.closed();
    }

    fn recompute(&mut self) {
        self.sequence = api::parse(&self.text, &self.catalog);
        self.state = api::suggest(&self.sequence, &self.catalog, &self.options);

        if std::env::var_os("SELECTOR_DEBUG").is_some() {
            eprintln!(
                "[field] text=\"{}\" suggestions={} open={}",
                self.text,
                self.state.suggestions.len(),
                self.state.is_open()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> SourceField {
        SourceField::new(text, SuggestionCatalog::default(), Options::default())
    }

    fn active(field: &SourceField) -> Option<&str> {
        field.state().active().map(|s| s.value.as_str())
    }

    #[test]
    fn starts_closed_and_opens_on_focus() {
        let mut f = field("");
        assert!(!f.state().is_open());
        f.on_focus();
        assert!(f.state().is_open());
        assert_eq!(active(&f), Some("**"));
    }

    #[test]
    fn typing_navigating_and_committing() {
        let mut f = field("");
        f.on_text_change("$user");
        assert_eq!(f.state().suggestions.len(), 2);
        f.on_arrow_down();
        assert_eq!(active(&f), Some("$user.ip_address"));
        f.on_arrow_down();
        assert_eq!(active(&f), Some("$user.ip_address"));

        assert_eq!(f.on_enter().as_deref(), Some("$user.ip_address"));
        assert!(!f.state().is_open());
        assert_eq!(f.state().active_index, 0);

        // Closed list: Enter is left to the host.
        assert_eq!(f.on_enter(), None);
        assert_eq!(f.text(), "$user.ip_address");
    }

    #[test]
    fn word_boundary_offers_binary_operators() {
        let mut f = field("");
        f.on_text_change("$user ");
        let values: Vec<&str> = f.state().suggestions.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["&&", "||"]);

        assert_eq!(f.on_enter().as_deref(), Some("$user &&"));
        f.on_text_change("$user && !");
        assert_eq!(f.state().suggestions.len(), SuggestionCatalog::default().values().len());
        let http = f.catalog().lookup("$http").cloned().unwrap();
        assert_eq!(f.on_item_click(&http), "$user && !$http");
    }

    #[test]
    fn exact_match_keeps_list_closed() {
        let mut f = field("");
        f.on_text_change("$string");
        assert!(!f.state().is_open());
        assert_eq!(f.on_enter(), None);
    }

    #[test]
    fn blur_closes_without_commit() {
        let mut f = field("");
        f.on_text_change("us");
        assert!(f.state().is_open());
        f.on_blur();
        assert!(!f.state().is_open());
        assert_eq!(f.text(), "us");
    }

    #[test]
    fn catalog_refresh_recomputes_tokens() {
        let mut f = field("");
        f.on_text_change("extra.custom");
        assert!(f.sequence().last().and_then(|t| t.scalar()).is_some_and(|s| s.value == "extra.custom"));
        assert_eq!(
            f.sequence().last().and_then(|t| t.scalar()).map(|s| s.kind),
            Some(crate::SuggestionType::String)
        );

        f.on_catalog_refresh(SuggestionCatalog::from_fields(vec!["extra.custom", "extra.other"]), true);
        assert_eq!(
            f.sequence().last().and_then(|t| t.scalar()).map(|s| s.kind),
            Some(crate::SuggestionType::Value)
        );
        // "extra.custom" is now the only, exact value match.
        assert!(!f.state().is_open());
    }

    #[test]
    fn catalog_refresh_on_closed_field() {
        let fetched = SuggestionCatalog::from_fields(vec!["extra.a", "extra.b"]);

        let mut f = field("ext");
        assert!(!f.state().is_open());
        f.on_catalog_refresh(fetched.clone(), false);
        assert!(!f.state().is_open());
        assert_eq!(f.state().suggestions.len(), 2);

        // Reopening behaves exactly like typing the same text.
        let mut typed = field("");
        typed.on_text_change("ext");
        typed.on_catalog_refresh(fetched.clone(), false);
        let mut f = field("ext");
        f.on_catalog_refresh(fetched, true);
        assert!(f.state().is_open());
        assert_eq!(f.state(), typed.state());
        assert_eq!(active(&f), Some("extra.a"));
    }

    #[test]
    fn catalog_refresh_keeps_an_open_list_open() {
        let mut f = field("");
        f.on_text_change("ext");
        f.on_arrow_down();
        f.on_catalog_refresh(SuggestionCatalog::from_fields(vec!["extra.a", "extra.b"]), false);
        assert!(f.state().is_open());
        assert_eq!(active(&f), Some("extra.a"));
    }
}
