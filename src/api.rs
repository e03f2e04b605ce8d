use crate::engine;
use crate::{Suggestion, SuggestionCatalog, TokenSequence};
use std::time::Instant;

pub use crate::engine::{
    ActiveSuggestionState, Category, Direction, FilteredSuggestions, Resolution, RunMetrics, filter_suggestions,
};

/// Rendered-list cap used by [`Options::default`].
pub const DEFAULT_MAX_RENDERED: usize = 50;

/// Options that affect suggestion rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of suggestions returned for display. Filtering and the
    /// exact-match collapse check are not affected by this cap.
    pub max_rendered: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { max_rendered: DEFAULT_MAX_RENDERED }
    }
}

/// Result from [`suggest_verbose`].
#[derive(Debug, Clone)]
pub struct SuggestReport {
    pub text: String,
    pub sequence: TokenSequence,
    pub resolution: Resolution,
    pub state: ActiveSuggestionState,
    pub metrics: RunMetrics,
}

/// Tokenize `text` against `catalog`.
///
/// # Example
/// ```
/// use selector_assist::{SuggestionCatalog, parse, serialize};
///
/// let catalog = SuggestionCatalog::default();
/// let tokens = parse("$user && !$http", &catalog);
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(serialize(&tokens), "$user && !$http");
/// ```
pub fn parse(text: &str, catalog: &SuggestionCatalog) -> TokenSequence {
    engine::tokenize(text, catalog)
}

/// Which category of token may come next, and the fragment to filter with.
pub fn resolve_category(sequence: &TokenSequence) -> Resolution {
    engine::resolve(sequence)
}

/// Suggestion list for the word being typed at the end of `sequence`.
///
/// The returned state has the first entry active and is open unless the
/// fragment is already an exact, unambiguous match or nothing matches.
pub fn suggest(sequence: &TokenSequence, catalog: &SuggestionCatalog, options: &Options) -> ActiveSuggestionState {
    let resolution = engine::resolve(sequence);
    let filtered = engine::filter_suggestions(resolution.category, &resolution.fragment, catalog, options.max_rendered);
    ActiveSuggestionState::open(filtered.list, filtered.visible)
}

/// Fold `sequence` back into expression text.
pub fn serialize(sequence: &TokenSequence) -> String {
    engine::serialize(sequence)
}

/// Move the active suggestion one step up or down.
pub fn navigate(state: &ActiveSuggestionState, direction: Direction) -> ActiveSuggestionState {
    engine::navigate(state, direction)
}

/// Complete the word under the cursor with `suggestion`.
pub fn commit(sequence: &TokenSequence, suggestion: &Suggestion) -> TokenSequence {
    engine::commit(sequence, suggestion)
}

/// Run the whole pipeline on `text` and keep every intermediate result plus
/// stage timings.
///
/// Meant for debugging; [`parse`] + [`suggest`] is the normal path.
pub fn suggest_verbose(text: &str, catalog: &SuggestionCatalog, options: &Options) -> SuggestReport {
    let total_start = Instant::now();

    let start = Instant::now();
    let sequence = engine::tokenize(text, catalog);
    let tokenize = start.elapsed();

    let start = Instant::now();
    let resolution = engine::resolve(&sequence);
    let resolve = start.elapsed();

    let start = Instant::now();
    let filtered = engine::filter_suggestions(resolution.category, &resolution.fragment, catalog, options.max_rendered);
    let state = ActiveSuggestionState::open(filtered.list, filtered.visible);
    let filter = start.elapsed();

    let metrics = RunMetrics { total: total_start.elapsed(), tokenize, resolve, filter };

    SuggestReport { text: text.to_string(), sequence, resolution, state, metrics }
}
