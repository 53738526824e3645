use serde::{Deserialize, Serialize};

/// Every path the app links to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Courses,
    Instructors,
    LiveClasses,
    MockTests,
    Login,
    SignUp,
    Dashboard,
    // Linked from the shell but not implemented yet
    Achievements,
    Settings,
    Profile,
    Notifications,
    ForgotPassword,
}

impl AppRoute {
    pub const ALL: [Self; 13] = [
        Self::Home,
        Self::Courses,
        Self::Instructors,
        Self::LiveClasses,
        Self::MockTests,
        Self::Login,
        Self::SignUp,
        Self::Dashboard,
        Self::Achievements,
        Self::Settings,
        Self::Profile,
        Self::Notifications,
        Self::ForgotPassword,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Courses => "/courses",
            Self::Instructors => "/instructors",
            Self::LiveClasses => "/live-classes",
            Self::MockTests => "/mock-tests",
            Self::Login => "/login",
            Self::SignUp => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Achievements => "/achievements",
            Self::Settings => "/settings",
            Self::Profile => "/profile",
            Self::Notifications => "/notifications",
            Self::ForgotPassword => "/forgot-password",
        }
    }

    /// Exact match only; detail paths like `/courses/3` are not routes.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Whether a view exists for this route.
    pub const fn is_implemented(self) -> bool {
        matches!(
            self,
            Self::Home
                | Self::Courses
                | Self::Instructors
                | Self::LiveClasses
                | Self::MockTests
                | Self::Login
                | Self::SignUp
                | Self::Dashboard
        )
    }
}

pub fn course_detail_path(id: u32) -> String {
    format!("{}/{id}", AppRoute::Courses.path())
}

pub fn live_class_detail_path(id: u32) -> String {
    format!("{}/{id}", AppRoute::LiveClasses.path())
}

pub fn mock_test_detail_path(id: u32) -> String {
    format!("{}/{id}", AppRoute::MockTests.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_eight_implemented_views() {
        let implemented = AppRoute::ALL
            .into_iter()
            .filter(|r| r.is_implemented())
            .count();
        assert_eq!(implemented, 8);
        assert!(!AppRoute::Settings.is_implemented());
    }

    #[test]
    fn test_detail_paths_are_not_routes() {
        assert_eq!(course_detail_path(3), "/courses/3");
        assert_eq!(AppRoute::from_path(&course_detail_path(3)), None);
        assert_eq!(mock_test_detail_path(2), "/mock-tests/2");
        assert_eq!(AppRoute::from_path("/Courses"), None);
    }
}
