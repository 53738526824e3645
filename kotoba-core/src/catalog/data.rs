//! Hard-coded mock content. A data-fetching client would replace these.

use chrono::{NaiveDate, NaiveDateTime};

use crate::catalog::ImageRef;
use crate::models::{
    ClassInstructor, ClassStatus, Course, DashboardSummary, EnrolledCourse, Feature, Instructor,
    LiveClass, MockTest, Notification, ProgressStats, ScheduledClass, SocialLinks, Testimonial,
    TestResult,
};

const GRADIENT_CORAL: &str = "linear-gradient(135deg, #FF6B6B 0%, #FF8E8E 100%)";
const GRADIENT_SKY: &str = "linear-gradient(135deg, #4FACFE 0%, #00F2FE 100%)";
const GRADIENT_MINT: &str = "linear-gradient(135deg, #43E97B 0%, #38F9D7 100%)";
const GRADIENT_SUNSET: &str = "linear-gradient(135deg, #FA709A 0%, #FEE140 100%)";
const GRADIENT_VIOLET: &str = "linear-gradient(135deg, #667EEA 0%, #764BA2 100%)";
const GRADIENT_PEACH: &str = "linear-gradient(135deg, #FF9A9E 0%, #FAD0C4 100%)";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=800&auto=format&fit=crop&q=80")
}

fn image(primary: &str, fallback: &str) -> ImageRef {
    ImageRef::new(unsplash(primary), unsplash(fallback))
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

const KYOTO: &str = "1528360983277-13d401cdc186";
const TORII: &str = "1533929736458-ca588d08c8be";
const SEOUL: &str = "1573804633927-bfcbcd909acd";
const TOKYO_NIGHT: &str = "1542051841857-5f90071e7989";
const FUJI: &str = "1493976040374-85c8e12f0c0e";

pub fn courses() -> Vec<Course> {
    let course = |id, title: &str, description: &str, instructor: &str, duration: &str| Course {
        id,
        title: title.to_string(),
        description: description.to_string(),
        instructor: instructor.to_string(),
        duration: duration.to_string(),
        level: String::new(),
        language: String::new(),
        price: 0,
        image: image(KYOTO, TORII),
        gradient: String::new(),
    };

    vec![
        Course {
            level: "Beginner".to_string(),
            language: "Japanese".to_string(),
            price: 299,
            image: image(KYOTO, TORII),
            gradient: GRADIENT_CORAL.to_string(),
            ..course(
                1,
                "Japanese N5 Complete Course",
                "Master the basics of Japanese language with our comprehensive N5 course.",
                "Yuki Tanaka",
                "12 weeks",
            )
        },
        Course {
            level: "Beginner".to_string(),
            language: "Korean".to_string(),
            price: 349,
            image: image(SEOUL, TOKYO_NIGHT),
            gradient: GRADIENT_SKY.to_string(),
            ..course(
                2,
                "Korean TOPIK I Preparation",
                "Prepare for TOPIK I exam with our structured course and practice materials.",
                "Min-ji Park",
                "16 weeks",
            )
        },
        Course {
            level: "Intermediate".to_string(),
            language: "Japanese".to_string(),
            price: 399,
            image: image(FUJI, KYOTO),
            gradient: GRADIENT_MINT.to_string(),
            ..course(
                3,
                "Japanese N4 Grammar",
                "Advanced grammar concepts for Japanese N4 level proficiency.",
                "Hiroshi Yamamoto",
                "10 weeks",
            )
        },
        Course {
            level: "Advanced".to_string(),
            language: "Korean".to_string(),
            price: 449,
            image: image(TOKYO_NIGHT, SEOUL),
            gradient: GRADIENT_SUNSET.to_string(),
            ..course(
                4,
                "Korean TOPIK II Writing",
                "Master the writing section of TOPIK II with expert guidance.",
                "Soo-jin Kim",
                "14 weeks",
            )
        },
    ]
}

pub fn instructors() -> Vec<Instructor> {
    let social = || SocialLinks {
        linkedin: Some("https://linkedin.com".to_string()),
        twitter: Some("https://twitter.com".to_string()),
    };
    let strings = |items: &[&str]| items.iter().map(ToString::to_string).collect::<Vec<_>>();

    vec![
        Instructor {
            id: 1,
            name: "Yuki Tanaka".to_string(),
            role: "Japanese Language Expert".to_string(),
            languages: strings(&["Japanese", "English"]),
            bio: "Certified JLPT examiner with 10 years of teaching experience.".to_string(),
            experience: "10 years".to_string(),
            image: image("1494790108377-be9c29b29330", "1438761681033-6461ffad8d80"),
            gradient: GRADIENT_CORAL.to_string(),
            social: social(),
            courses: strings(&["Japanese N5 Complete Course", "Japanese N4 Grammar"]),
        },
        Instructor {
            id: 2,
            name: "Min-ji Park".to_string(),
            role: "Korean Language Specialist".to_string(),
            languages: strings(&["Korean", "English", "Japanese"]),
            bio: "Former TOPIK examiner with expertise in Korean language education.".to_string(),
            experience: "8 years".to_string(),
            image: image("1580489944761-15a19d654956", "1544005313-94ddf0286df2"),
            gradient: GRADIENT_SKY.to_string(),
            social: social(),
            courses: strings(&["Korean TOPIK I Preparation", "Korean TOPIK II Writing"]),
        },
        Instructor {
            id: 3,
            name: "Hiroshi Yamamoto".to_string(),
            role: "Japanese Grammar Expert".to_string(),
            languages: strings(&["Japanese", "English", "Korean"]),
            bio: "Specialized in teaching advanced Japanese grammar and writing.".to_string(),
            experience: "12 years".to_string(),
            image: image("1507003211169-0a1dd7228f2d", "1472099645785-5658abf4ff4e"),
            gradient: GRADIENT_MINT.to_string(),
            social: social(),
            courses: strings(&["Japanese N4 Grammar", "Japanese Writing Workshop"]),
        },
        Instructor {
            id: 4,
            name: "Soo-jin Kim".to_string(),
            role: "Korean Writing Specialist".to_string(),
            languages: strings(&["Korean", "English"]),
            bio: "Expert in Korean writing and composition with a focus on TOPIK preparation."
                .to_string(),
            experience: "9 years".to_string(),
            image: image("1544005313-94ddf0286df2", "1580489944761-15a19d654956"),
            gradient: GRADIENT_SUNSET.to_string(),
            social: social(),
            courses: strings(&["Korean TOPIK II Writing", "Korean Business Writing"]),
        },
    ]
}

pub fn live_classes() -> Vec<LiveClass> {
    let lecturer = |name: &str, portrait: u32| ClassInstructor {
        name: name.to_string(),
        avatar_url: format!("https://source.unsplash.com/random/100x100?portrait={portrait}"),
    };

    vec![
        LiveClass {
            id: 1,
            title: "Japanese N5 Grammar Practice".to_string(),
            description: "Interactive session focusing on essential N5 grammar patterns and usage."
                .to_string(),
            instructor: lecturer("Yuki Tanaka", 1),
            starts_at: at(2024, 3, 20, 10, 0),
            duration: "60 min".to_string(),
            language: "Japanese".to_string(),
            level: "Beginner".to_string(),
            status: ClassStatus::Upcoming,
            enrolled: 15,
            max_students: 20,
            image: image(KYOTO, TORII),
        },
        LiveClass {
            id: 2,
            title: "Korean TOPIK I Speaking".to_string(),
            description: "Practice speaking skills for TOPIK I exam with native Korean instructor."
                .to_string(),
            instructor: lecturer("Min-ji Park", 2),
            starts_at: at(2024, 3, 19, 14, 0),
            duration: "90 min".to_string(),
            language: "Korean".to_string(),
            level: "Beginner".to_string(),
            status: ClassStatus::Ongoing,
            enrolled: 18,
            max_students: 20,
            image: image(SEOUL, TOKYO_NIGHT),
        },
        LiveClass {
            id: 3,
            title: "Japanese N4 Reading Comprehension".to_string(),
            description:
                "Advanced reading practice with focus on N4 level texts and comprehension."
                    .to_string(),
            instructor: lecturer("Hiroshi Yamamoto", 3),
            starts_at: at(2024, 3, 18, 11, 0),
            duration: "75 min".to_string(),
            language: "Japanese".to_string(),
            level: "Intermediate".to_string(),
            status: ClassStatus::Completed,
            enrolled: 20,
            max_students: 20,
            image: image(FUJI, KYOTO),
        },
        LiveClass {
            id: 4,
            title: "Korean TOPIK II Writing".to_string(),
            description: "Master the writing section of TOPIK II with expert guidance."
                .to_string(),
            instructor: lecturer("Soo-jin Kim", 4),
            starts_at: at(2024, 3, 21, 15, 0),
            duration: "90 min".to_string(),
            language: "Korean".to_string(),
            level: "Advanced".to_string(),
            status: ClassStatus::Upcoming,
            enrolled: 12,
            max_students: 20,
            image: image(TOKYO_NIGHT, SEOUL),
        },
    ]
}

pub fn mock_tests() -> Vec<MockTest> {
    let test = |id, title: &str, description: &str, language: &str, level: &str| MockTest {
        id,
        title: title.to_string(),
        description: description.to_string(),
        language: language.to_string(),
        level: level.to_string(),
        duration: String::new(),
        questions: 0,
        available: true,
        image: image(KYOTO, TORII),
        gradient: String::new(),
    };

    vec![
        MockTest {
            duration: "120 min".to_string(),
            questions: 50,
            gradient: GRADIENT_CORAL.to_string(),
            ..test(
                1,
                "JLPT N5 Practice Test",
                "Full-length practice test for Japanese Language Proficiency Test N5 level.",
                "Japanese",
                "N5",
            )
        },
        MockTest {
            duration: "180 min".to_string(),
            questions: 70,
            image: image(SEOUL, TOKYO_NIGHT),
            gradient: GRADIENT_SKY.to_string(),
            ..test(
                2,
                "TOPIK I Practice Test",
                "Comprehensive practice test for Test of Proficiency in Korean (TOPIK) Level I.",
                "Korean",
                "TOPIK I",
            )
        },
        MockTest {
            duration: "150 min".to_string(),
            questions: 60,
            image: image(FUJI, KYOTO),
            gradient: GRADIENT_MINT.to_string(),
            ..test(
                3,
                "JLPT N4 Practice Test",
                "Complete practice test for Japanese Language Proficiency Test N4 level.",
                "Japanese",
                "N4",
            )
        },
        MockTest {
            duration: "180 min".to_string(),
            questions: 80,
            image: image(TOKYO_NIGHT, SEOUL),
            gradient: GRADIENT_SUNSET.to_string(),
            ..test(
                4,
                "TOPIK II Practice Test",
                "Advanced practice test for Test of Proficiency in Korean (TOPIK) Level II.",
                "Korean",
                "TOPIK II",
            )
        },
    ]
}

pub fn features() -> Vec<Feature> {
    [
        (
            "Expert Instructors",
            "Learn from native speakers and certified language experts",
        ),
        (
            "Live Classes",
            "Interactive sessions with real-time feedback and practice",
        ),
        ("Mock Tests", "Regular assessments to track your progress"),
    ]
    .into_iter()
    .map(|(title, description)| Feature {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    [
        (
            "Sarah Johnson",
            "Japanese Student",
            "The structured learning approach and supportive instructors made learning Japanese enjoyable and effective.",
        ),
        (
            "Michael Chen",
            "Korean Student",
            "The live classes and mock tests helped me prepare well for my TOPIK exam. Highly recommended!",
        ),
        (
            "Emma Wilson",
            "Japanese Student",
            "The personalized attention and flexible schedule made it easy to balance learning with my work.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, role, text))| Testimonial {
        name: name.to_string(),
        role: role.to_string(),
        avatar_url: format!("https://source.unsplash.com/random/100x100?portrait={}", i + 1),
        text: text.to_string(),
    })
    .collect()
}

pub fn notifications() -> Vec<Notification> {
    [
        (1, "New course available: Japanese N4 Grammar", "2 hours ago"),
        (2, "Live class starting in 30 minutes", "3 hours ago"),
        (3, "Your test results are ready", "1 day ago"),
    ]
    .into_iter()
    .map(|(id, text, age)| Notification {
        id,
        text: text.to_string(),
        age: age.to_string(),
    })
    .collect()
}

pub fn dashboard_summary() -> DashboardSummary {
    DashboardSummary {
        stats: ProgressStats {
            completed_courses: 2,
            enrolled_courses: 3,
            upcoming_classes: 2,
            completed_tests: 1,
            average_score: 85,
        },
        enrolled_courses: vec![
            EnrolledCourse {
                id: 1,
                title: "Japanese N5 Complete Course".to_string(),
                progress: 75,
                next_class: at(2024, 3, 20, 10, 0),
                gradient: GRADIENT_CORAL.to_string(),
            },
            EnrolledCourse {
                id: 2,
                title: "Korean TOPIK I Preparation".to_string(),
                progress: 30,
                next_class: at(2024, 3, 21, 14, 0),
                gradient: GRADIENT_SKY.to_string(),
            },
            EnrolledCourse {
                id: 3,
                title: "Japanese N4 Grammar".to_string(),
                progress: 15,
                next_class: at(2024, 3, 22, 11, 0),
                gradient: GRADIENT_MINT.to_string(),
            },
        ],
        upcoming_classes: vec![
            ScheduledClass {
                id: 1,
                title: "Japanese N5 - Lesson 8".to_string(),
                instructor: "Yuki Tanaka".to_string(),
                starts_at: at(2024, 3, 20, 10, 0),
                duration: "60 min".to_string(),
                gradient: GRADIENT_SUNSET.to_string(),
            },
            ScheduledClass {
                id: 2,
                title: "Korean TOPIK I - Reading Practice".to_string(),
                instructor: "Min-ji Park".to_string(),
                starts_at: at(2024, 3, 21, 14, 0),
                duration: "90 min".to_string(),
                gradient: GRADIENT_VIOLET.to_string(),
            },
        ],
        recent_tests: vec![TestResult {
            id: 1,
            title: "JLPT N5 Practice Test".to_string(),
            score: 85,
            taken_on: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default(),
            total_questions: 50,
            correct_answers: 42,
            gradient: GRADIENT_PEACH.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogRecord};

    #[test]
    fn test_static_collections_have_unique_ids() {
        assert!(Catalog::try_new(courses()).is_ok());
        assert!(Catalog::try_new(instructors()).is_ok());
        assert!(Catalog::try_new(live_classes()).is_ok());
        assert!(Catalog::try_new(mock_tests()).is_ok());
    }

    #[test]
    fn test_every_record_has_distinct_fallback() {
        fn check<R: CatalogRecord>(records: &[R]) {
            for record in records {
                let image = record.image();
                assert!(!image.primary.is_empty());
                assert_ne!(image.primary, image.fallback, "record {}", record.id());
            }
        }
        check(&courses());
        check(&instructors());
        check(&live_classes());
        check(&mock_tests());
    }

    #[test]
    fn test_dates_are_real() {
        for class in live_classes() {
            assert_ne!(class.starts_at, NaiveDateTime::default());
        }
    }
}
