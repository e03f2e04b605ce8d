//! Tokenize / resolve / filter engine.
//!
//! Every keystroke runs the whole pipeline from scratch. Sequences are a
//! handful of words long, so there is no incremental patching:
//!
//! ```text
//! text ── tokenize (tokenizer.rs) ──▶ TokenSequence
//!                                        │
//!             resolve (grammar.rs) ◀─────┤
//!                  │                     │
//!        Resolution { category,          │
//!                     fragment }         │
//!                  │                     │
//!             filter (filter.rs)         │
//!                  │                     │
//!                  ▼                     │
//!        ActiveSuggestionState           │
//!        (navigation.rs)                 │
//!                  │ commit              │
//!                  ▼                     │
//!        compose.rs: commit + serialize ─┘──▶ text
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tokenizer.rs`: splits on single spaces and classifies each segment
//!   against the catalog (`!` prefixes become compound tokens).
//! - `grammar.rs`: looks at the last one or two tokens and decides which
//!   category of token may come next, and which fragment filters it.
//! - `filter.rs`: substring match over the catalog subset for that category,
//!   plus the exact-match collapse rule.
//! - `navigation.rs`: the open/closed suggestion list and its active index.
//! - `compose.rs`: folding tokens back to text and committing a suggestion.
//! - `metrics.rs`: opt-in stage timings for the verbose path.
//!
//! ## Debugging
//!
//! Set `SELECTOR_DEBUG=1` to print per-stage traces to stderr.

#[path = "engine/compose.rs"]
mod compose;
#[path = "engine/filter.rs"]
mod filter;
#[path = "engine/grammar.rs"]
mod grammar;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/navigation.rs"]
mod navigation;
#[path = "engine/tokenizer.rs"]
mod tokenizer;


pub use compose::{commit, serialize};
pub use filter::{FilteredSuggestions, filter_suggestions};
pub use grammar::{Category, Resolution, resolve};
pub use metrics::RunMetrics;
pub use navigation::{ActiveSuggestionState, Direction, navigate};
pub use tokenizer::tokenize;
