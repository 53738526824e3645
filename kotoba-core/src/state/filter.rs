use std::collections::BTreeMap;

use crate::catalog::{CatalogRecord, Facet};

/// Search text plus selected facet values for one catalog view.
///
/// All active predicates must hold for a record to be kept. Empty search text
/// and unset facets match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_text: String,
    facets: BTreeMap<Facet, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.set_search(text);
        self
    }

    #[must_use]
    pub fn with_facet(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.set_facet(facet, value);
        self
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Select a facet value; the empty string unsets the facet.
    pub fn set_facet(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.facets.remove(&facet);
        } else {
            self.facets.insert(facet, value);
        }
    }

    /// Currently selected value, or "" when unset.
    pub fn facet(&self, facet: Facet) -> &str {
        self.facets.get(&facet).map_or("", String::as_str)
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.facets.is_empty()
    }

    pub fn matches<R: CatalogRecord + ?Sized>(&self, record: &R) -> bool {
        self.matches_search(record) && self.matches_facets(record)
    }

    fn matches_search<R: CatalogRecord + ?Sized>(&self, record: &R) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_facets<R: CatalogRecord + ?Sized>(&self, record: &R) -> bool {
        self.facets.iter().all(|(facet, selected)| {
            record
                .facet_values(*facet)
                .iter()
                .any(|value| *value == selected.as_str())
        })
    }

    /// Keep the records every active predicate accepts, in their original order.
    pub fn apply<'a, R, I>(&self, records: I) -> Vec<&'a R>
    where
        R: CatalogRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let kept: Vec<&R> = records.into_iter().filter(|r| self.matches(*r)).collect();
        tracing::debug!(
            search = %self.search_text,
            facets = self.facets.len(),
            kept = kept.len(),
            "applied catalog filter"
        );
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data;

    #[test]
    fn test_unfiltered_returns_everything_in_order() {
        let courses = data::courses();
        let kept = FilterState::new().apply(&courses);
        let ids: Vec<u32> = kept.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let courses = data::courses();
        let kept = FilterState::new().with_search("topik").apply(&courses);
        let titles: Vec<&str> = kept.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Korean TOPIK I Preparation", "Korean TOPIK II Writing"]
        );

        // "comprehensive" only appears in a description
        let kept = FilterState::new().with_search("COMPREHENSIVE").apply(&courses);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn test_facets_are_conjunctive() {
        let courses = data::courses();
        let filter = FilterState::new()
            .with_facet(Facet::Language, "Japanese")
            .with_facet(Facet::Level, "Intermediate");
        let kept = filter.apply(&courses);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Japanese N4 Grammar");

        let none = filter.with_search("topik").apply(&courses);
        assert!(none.is_empty());
    }

    #[test]
    fn test_facet_match_is_exact() {
        let courses = data::courses();
        let kept = FilterState::new()
            .with_facet(Facet::Language, "japanese")
            .apply(&courses);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_empty_facet_value_unsets() {
        let mut filter = FilterState::new().with_facet(Facet::Level, "Beginner");
        assert_eq!(filter.facet(Facet::Level), "Beginner");
        filter.set_facet(Facet::Level, "");
        assert_eq!(filter.facet(Facet::Level), "");
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn test_multi_valued_facet_matches_any() {
        let instructors = data::instructors();
        let kept = FilterState::new()
            .with_facet(Facet::Language, "Korean")
            .apply(&instructors);
        let ids: Vec<u32> = kept.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_facet_record_does_not_carry_never_matches() {
        let courses = data::courses();
        let kept = FilterState::new()
            .with_facet(Facet::Status, "upcoming")
            .apply(&courses);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_status_tabs_on_live_classes() {
        let classes = data::live_classes();
        let kept = FilterState::new()
            .with_facet(Facet::Status, "upcoming")
            .apply(&classes);
        let ids: Vec<u32> = kept.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 4]);

        let by_instructor = FilterState::new().with_search("park").apply(&classes);
        assert_eq!(by_instructor.len(), 1);
        assert_eq!(by_instructor[0].id, 2);
    }

    #[test]
    fn test_reapplying_is_stable() {
        let tests = data::mock_tests();
        let filter = FilterState::new()
            .with_facet(Facet::Language, "Korean")
            .with_search("practice");
        let once = filter.apply(&tests);
        let twice = filter.apply(once.iter().copied());
        assert_eq!(once, twice);
    }
}
