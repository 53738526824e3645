//! Property tests for the catalog filter.

use kotoba_core::catalog::{data, CatalogRecord, Facet, ImageRef};
use kotoba_core::state::FilterState;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Card {
    id: u32,
    title: String,
    blurb: String,
    language: String,
    image: ImageRef,
}

impl CatalogRecord for Card {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.blurb]
    }

    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Language => vec![&self.language],
            Facet::Level | Facet::Status => Vec::new(),
        }
    }

    fn image(&self) -> &ImageRef {
        &self.image
    }
}

fn cards() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(
        (
            "[a-cA-C ]{0,12}",
            "[a-cA-C ]{0,12}",
            prop::sample::select(vec!["Japanese", "Korean"]),
        ),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, blurb, language))| Card {
                id: u32::try_from(i).unwrap_or(u32::MAX),
                title,
                blurb,
                language: language.to_string(),
                image: ImageRef::new("p", "f"),
            })
            .collect()
    })
}

fn filters() -> impl Strategy<Value = FilterState> {
    (
        "[a-cA-C]{0,3}",
        prop::sample::select(vec!["", "Japanese", "Korean"]),
    )
        .prop_map(|(search, language)| {
            FilterState::new()
                .with_search(search)
                .with_facet(Facet::Language, language)
        })
}

fn contains_ci(record: &Card, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

proptest! {
    #[test]
    fn test_unfiltered_returns_full_collection_in_order(records in cards()) {
        let kept = FilterState::new().apply(&records);
        let kept_ids: Vec<u32> = kept.iter().map(|r| r.id).collect();
        let all_ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        prop_assert_eq!(kept_ids, all_ids);
    }

    #[test]
    fn test_search_keeps_exactly_the_matching_records(
        records in cards(),
        needle in "[a-cA-C]{1,3}",
    ) {
        let kept = FilterState::new().with_search(needle.clone()).apply(&records);
        for record in &records {
            let is_kept = kept.iter().any(|k| k.id == record.id);
            prop_assert_eq!(is_kept, contains_ci(record, &needle));
        }
    }

    #[test]
    fn test_filter_is_idempotent(records in cards(), filter in filters()) {
        let once = filter.apply(&records);
        let twice = filter.apply(once.iter().copied());
        let once_ids: Vec<u32> = once.iter().map(|r| r.id).collect();
        let twice_ids: Vec<u32> = twice.iter().map(|r| r.id).collect();
        prop_assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_result_preserves_relative_order(records in cards(), filter in filters()) {
        let ids: Vec<u32> = filter.apply(&records).iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ids, sorted);
    }
}

#[test]
fn test_static_catalogs_unfiltered() {
    let filter = FilterState::new();
    assert_eq!(filter.apply(&data::courses()).len(), 4);
    assert_eq!(filter.apply(&data::instructors()).len(), 4);
    assert_eq!(filter.apply(&data::live_classes()).len(), 4);
    assert_eq!(filter.apply(&data::mock_tests()).len(), 4);
}
