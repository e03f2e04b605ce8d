//! Catalog filtering for the resolved category.

use super::grammar::Category;
use crate::{Suggestion, SuggestionCatalog};

/// Result of [`filter_suggestions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredSuggestions {
    /// Matching entries, capped to the render limit.
    pub list: Vec<Suggestion>,
    /// False once `fragment` is the single, exact match.
    pub visible: bool,
}

/// Keep the entries of `category`'s catalog subset whose value contains
/// `fragment`, ignoring case.
///
/// The collapse check runs on the full match list; `limit` only trims what is
/// returned for rendering.
pub fn filter_suggestions(
    category: Category,
    fragment: &str,
    catalog: &SuggestionCatalog,
    limit: usize,
) -> FilteredSuggestions {
    let needle = fragment.to_lowercase();
    let mut list: Vec<Suggestion> =
        catalog.subset(category.kinds()).filter(|s| s.value.to_lowercase().contains(&needle)).cloned().collect();

    let visible = !(list.len() == 1 && list[0].value == fragment);
    let matched = list.len();
    list.truncate(limit);

    if std::env::var_os("SELECTOR_DEBUG").is_some() {
        eprintln!(
            "[filter] category={} fragment={:?} matched={} rendered={} visible={}",
            category,
            fragment,
            matched,
            list.len(),
            visible
        );
    }

    FilteredSuggestions { list, visible }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(filtered: &FilteredSuggestions) -> Vec<&str> {
        filtered.list.iter().map(|s| s.value.as_str()).collect()
    }

    #[test]
    fn substring_not_prefix() {
        let catalog = SuggestionCatalog::default();
        let out = filter_suggestions(Category::Value, "memory", &catalog, 50);
        assert_eq!(values(&out), vec!["$minidump.heap_memory", "$minidump.stack_memory"]);
        assert!(out.visible);
    }

    #[test]
    fn match_ignores_case() {
        let catalog = SuggestionCatalog::default();
        let out = filter_suggestions(Category::Value, "MYVALUE", &catalog, 50);
        assert_eq!(values(&out), vec!["extra.MyValue"]);
        // Single match, but not the exact text: stays open.
        assert!(out.visible);
    }

    #[test]
    fn exact_single_match_collapses() {
        let catalog = SuggestionCatalog::default();
        let out = filter_suggestions(Category::Value, "$string", &catalog, 50);
        assert_eq!(values(&out), vec!["$string"]);
        assert!(!out.visible);
    }

    #[test]
    fn exact_match_among_several_stays_open() {
        let catalog = SuggestionCatalog::default();
        let out = filter_suggestions(Category::Value, "$user", &catalog, 50);
        assert_eq!(values(&out), vec!["$user", "$user.ip_address"]);
        assert!(out.visible);
    }

    #[test]
    fn binary_and_unary_sections() {
        let catalog = SuggestionCatalog::default();
        assert_eq!(values(&filter_suggestions(Category::Binary, "", &catalog, 50)), vec!["&&", "||"]);
        assert_eq!(values(&filter_suggestions(Category::Binary, "|", &catalog, 50)), vec!["||"]);
        assert_eq!(values(&filter_suggestions(Category::Unary, "", &catalog, 50)), vec!["!"]);
    }

    #[test]
    fn all_and_string_draw_values_then_negation() {
        let catalog = SuggestionCatalog::new(vec![Suggestion::value("a"), Suggestion::value("b")]);
        for category in [Category::All, Category::String] {
            assert_eq!(values(&filter_suggestions(category, "", &catalog, 50)), vec!["a", "b", "!"]);
        }
    }

    #[test]
    fn no_match_is_empty_and_visible() {
        let catalog = SuggestionCatalog::default();
        let out = filter_suggestions(Category::Value, "zzz", &catalog, 50);
        assert!(out.list.is_empty());
        assert!(out.visible);
    }

    #[test]
    fn limit_trims_rendered_list_only() {
        let many: Vec<Suggestion> = (0..80).map(|i| Suggestion::value(format!("field{i}"))).collect();
        let catalog = SuggestionCatalog::new(many);
        let out = filter_suggestions(Category::Value, "field", &catalog, 50);
        assert_eq!(out.list.len(), 50);
        assert_eq!(out.list[0].value, "field0");

        // A single exact match past the cap still collapses.
        let out = filter_suggestions(Category::Value, "field79", &catalog, 0);
        assert!(out.list.is_empty());
        assert!(!out.visible);
    }
}
