use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogRecord, Facet, FacetOption, ImageRef};
use crate::routes;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub level: String,
    pub language: String,
    /// Price in whole US dollars
    pub price: u32,
    pub image: ImageRef,
    pub gradient: String,
}

impl Course {
    pub const LANGUAGE_OPTIONS: [FacetOption; 3] = [
        FacetOption::new("All Languages", ""),
        FacetOption::new("Japanese", "Japanese"),
        FacetOption::new("Korean", "Korean"),
    ];

    pub const LEVEL_OPTIONS: [FacetOption; 4] = [
        FacetOption::new("All Levels", ""),
        FacetOption::new("Beginner", "Beginner"),
        FacetOption::new("Intermediate", "Intermediate"),
        FacetOption::new("Advanced", "Advanced"),
    ];

    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    pub fn detail_path(&self) -> String {
        routes::course_detail_path(self.id)
    }
}

impl CatalogRecord for Course {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Language => vec![&self.language],
            Facet::Level => vec![&self.level],
            Facet::Status => Vec::new(),
        }
    }

    fn image(&self) -> &ImageRef {
        &self.image
    }
}
