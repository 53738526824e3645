use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Headline numbers on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressStats {
    pub completed_courses: u32,
    pub enrolled_courses: u32,
    pub upcoming_classes: u32,
    pub completed_tests: u32,
    /// Percentage, 0..=100
    pub average_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrolledCourse {
    pub id: u32,
    pub title: String,
    /// Percentage, 0..=100
    pub progress: u8,
    pub next_class: NaiveDateTime,
    pub gradient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledClass {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub starts_at: NaiveDateTime,
    pub duration: String,
    pub gradient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestResult {
    pub id: u32,
    pub title: String,
    pub score: u8,
    pub taken_on: NaiveDate,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub gradient: String,
}

impl TestResult {
    pub fn answers_label(&self) -> String {
        format!("{}/{} correct", self.correct_answers, self.total_questions)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub stats: ProgressStats,
    pub enrolled_courses: Vec<EnrolledCourse>,
    pub upcoming_classes: Vec<ScheduledClass>,
    pub recent_tests: Vec<TestResult>,
}

/// Short form used on dashboard cards, e.g. "Wed, Mar 20, 10:00 AM".
pub fn short_datetime(at: &NaiveDateTime) -> String {
    at.format("%a, %b %-d, %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data;

    #[test]
    fn test_short_datetime() {
        let summary = data::dashboard_summary();
        assert_eq!(
            short_datetime(&summary.enrolled_courses[0].next_class),
            "Wed, Mar 20, 10:00 AM"
        );
    }

    #[test]
    fn test_answers_label() {
        let summary = data::dashboard_summary();
        assert_eq!(summary.recent_tests[0].answers_label(), "42/50 correct");
    }
}
