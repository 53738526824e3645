use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogRecord, Facet, FacetOption, ImageRef};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instructor {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub languages: Vec<String>,
    pub bio: String,
    pub experience: String,
    pub image: ImageRef,
    pub gradient: String,
    pub social: SocialLinks,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

impl Instructor {
    pub const LANGUAGE_OPTIONS: [FacetOption; 4] = [
        FacetOption::new("All Languages", ""),
        FacetOption::new("Japanese", "Japanese"),
        FacetOption::new("Korean", "Korean"),
        FacetOption::new("English", "English"),
    ];
}

impl CatalogRecord for Instructor {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.role, &self.bio]
    }

    // An instructor matches a language if they teach in it at all.
    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Language => self.languages.iter().map(String::as_str).collect(),
            Facet::Level | Facet::Status => Vec::new(),
        }
    }

    fn image(&self) -> &ImageRef {
        &self.image
    }
}
