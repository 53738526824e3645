pub mod course;
pub mod dashboard;
pub mod home;
pub mod identity;
pub mod instructor;
pub mod live_class;
pub mod notification;

pub use course::Course;
pub use dashboard::{DashboardSummary, EnrolledCourse, ProgressStats, ScheduledClass, TestResult};
pub use home::{Feature, Testimonial};
pub use identity::{Credentials, Role, UserIdentity};
pub use instructor::{Instructor, SocialLinks};
pub use live_class::{ClassInstructor, ClassStatus, LiveClass};
pub use mock_test::MockTest;
pub use notification::Notification;
