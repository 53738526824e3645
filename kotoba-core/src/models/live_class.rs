use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogRecord, Facet, FacetOption, ImageRef};
use crate::routes;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl ClassStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
        }
    }

    /// Call to action shown on the class card
    pub const fn action_label(self) -> &'static str {
        match self {
            Self::Upcoming => "Register",
            Self::Ongoing => "Join Now",
            Self::Completed => "View Recording",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Upcoming => "status-upcoming",
            Self::Ongoing => "status-ongoing",
            Self::Completed => "status-completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassInstructor {
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LiveClass {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub instructor: ClassInstructor,
    pub starts_at: NaiveDateTime,
    pub duration: String,
    pub language: String,
    pub level: String,
    pub status: ClassStatus,
    pub enrolled: u32,
    pub max_students: u32,
    pub image: ImageRef,
}

impl LiveClass {
    pub const STATUS_TABS: [FacetOption; 4] = [
        FacetOption::new("All Classes", ""),
        FacetOption::new("Upcoming", "upcoming"),
        FacetOption::new("Ongoing", "ongoing"),
        FacetOption::new("Completed", "completed"),
    ];

    /// e.g. "Wednesday, March 20, 2024 at 10:00 AM"
    pub fn formatted_start(&self) -> String {
        self.starts_at.format("%A, %B %-d, %Y at %I:%M %p").to_string()
    }

    pub fn enrollment_label(&self) -> String {
        format!("{}/{} students enrolled", self.enrolled, self.max_students)
    }

    pub const fn is_full(&self) -> bool {
        self.enrolled >= self.max_students
    }

    pub fn detail_path(&self) -> String {
        routes::live_class_detail_path(self.id)
    }
}

impl CatalogRecord for LiveClass {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.instructor.name]
    }

    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Language => vec![&self.language],
            Facet::Level => vec![&self.level],
            Facet::Status => vec![self.status.as_str()],
        }
    }

    fn image(&self) -> &ImageRef {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::data;

    #[test]
    fn test_formatted_start() {
        let classes = data::live_classes();
        assert_eq!(
            classes[0].formatted_start(),
            "Wednesday, March 20, 2024 at 10:00 AM"
        );
        assert_eq!(
            classes[1].formatted_start(),
            "Tuesday, March 19, 2024 at 02:00 PM"
        );
    }

    #[test]
    fn test_enrollment() {
        let classes = data::live_classes();
        assert_eq!(classes[0].enrollment_label(), "15/20 students enrolled");
        assert!(!classes[0].is_full());
        assert!(classes[2].is_full());
        assert_eq!(classes[2].detail_path(), "/live-classes/3");
    }
}
