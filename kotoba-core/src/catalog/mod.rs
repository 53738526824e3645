//! Static catalog collections and the record abstraction the filter works on.

pub mod data;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::state::FilterState;

/// An exact-match filter dimension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Language,
    Level,
    Status,
}

impl Facet {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Language => "Language",
            Self::Level => "Level",
            Self::Status => "Status",
        }
    }
}

/// Primary image plus the one it falls back to when the primary fails to load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRef {
    pub primary: String,
    pub fallback: String,
}

impl ImageRef {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }
}

/// A display-only entity that can be searched and faceted.
pub trait CatalogRecord {
    fn id(&self) -> u32;

    /// Fields matched by free-text search
    fn search_fields(&self) -> Vec<&str>;

    /// Values this record carries for `facet`; empty if it has none
    fn facet_values(&self, facet: Facet) -> Vec<&str>;

    fn image(&self) -> &ImageRef;
}

/// One choice offered by a facet selector. An empty `value` means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl FacetOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// An immutable collection with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog<R> {
    records: Vec<R>,
}

impl<R> Default for Catalog<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: CatalogRecord> Catalog<R> {
    pub fn try_new(records: Vec<R>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(CatalogError::DuplicateId(record.id()));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filter(&self, filter: &FilterState) -> Vec<&R> {
        filter.apply(&self.records)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut courses = data::courses();
        let dup = courses[0].clone();
        courses.push(dup);
        let err = Catalog::try_new(courses).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(1));
    }

    #[test]
    fn test_filter_through_catalog() {
        let catalog = Catalog::try_new(data::mock_tests()).unwrap();
        let korean = catalog.filter(&FilterState::new().with_facet(Facet::Language, "Korean"));
        let ids: Vec<u32> = korean.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert!(Catalog::<Course>::default().is_empty());
    }
}
