pub mod catalog_image;
pub mod filter_bar;
pub mod form_field;
pub mod layout;
pub mod notification_menu;
pub mod side_menu;
pub mod toast;
pub mod top_bar;
pub mod user_menu;

pub use catalog_image::CatalogImage;
pub use filter_bar::{FacetSelect, FacetTabs, SearchField};
pub use form_field::{ErrorBanner, FormField};
pub use layout::MainLayout;
pub use notification_menu::NotificationMenu;
pub use side_menu::SideMenu;
pub use toast::Toast;
pub use top_bar::TopBar;
pub use user_menu::UserMenu;
