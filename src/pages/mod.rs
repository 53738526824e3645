pub mod courses;
pub mod dashboard;
pub mod home;
pub mod instructors;
pub mod live_classes;
pub mod login;
pub mod mock_tests;
pub mod not_found;
pub mod sign_up;

pub use courses::CoursesPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use instructors::InstructorsPage;
pub use live_classes::LiveClassesPage;
pub use login::LoginPage;
pub use mock_tests::MockTestsPage;
pub use not_found::NotFoundPage;
pub use sign_up::SignUpPage;

use kotoba_core::catalog::{Catalog, CatalogRecord};

/// Wrap static records, logging and showing nothing if their ids collide.
pub(crate) fn load_catalog<R: CatalogRecord>(records: Vec<R>) -> Catalog<R> {
    Catalog::try_new(records).unwrap_or_else(|e| {
        tracing::error!("Refusing catalog data: {}", e);
        Catalog::default()
    })
}
