//! What the navigation chrome shows, independent of how it is drawn.

use crate::models::UserIdentity;
use crate::routes::AppRoute;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: AppRoute,
}

impl MenuItem {
    const fn new(label: &'static str, route: AppRoute) -> Self {
        Self { label, route }
    }

    pub fn is_selected(&self, current_path: &str) -> bool {
        self.route.path() == current_path
    }
}

/// Side menu entries, top to bottom.
pub const SIDE_MENU: [MenuItem; 5] = [
    MenuItem::new("Dashboard", AppRoute::Dashboard),
    MenuItem::new("Courses", AppRoute::Courses),
    MenuItem::new("Live Classes", AppRoute::LiveClasses),
    MenuItem::new("Mock Tests", AppRoute::MockTests),
    MenuItem::new("Instructors", AppRoute::Instructors),
];

/// Entries of the signed-in user menu, above Logout.
pub const USER_MENU: [MenuItem; 3] = [
    MenuItem::new("Profile", AppRoute::Profile),
    MenuItem::new("Settings", AppRoute::Settings),
    MenuItem::new("Achievements", AppRoute::Achievements),
];

/// Signed-in group at the bottom of the drawer, above its Logout entry.
pub const DRAWER_ACCOUNT_MENU: [MenuItem; 2] = [
    MenuItem::new("Achievements", AppRoute::Achievements),
    MenuItem::new("Settings", AppRoute::Settings),
];

/// Drawer account entries for the session; guests get none.
pub fn drawer_account_menu(identity: Option<&UserIdentity>) -> &'static [MenuItem] {
    if identity.is_some() {
        &DRAWER_ACCOUNT_MENU
    } else {
        &[]
    }
}

/// Right-hand side of the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopBarActions {
    Guest {
        login: AppRoute,
        sign_up: AppRoute,
    },
    Member {
        display_name: String,
        avatar_url: Option<String>,
        initial: String,
        notification_count: usize,
    },
}

impl TopBarActions {
    pub fn for_session(identity: Option<&UserIdentity>, notification_count: usize) -> Self {
        identity.map_or(
            Self::Guest {
                login: AppRoute::Login,
                sign_up: AppRoute::SignUp,
            },
            |user| Self::Member {
                display_name: user.display_name.clone(),
                avatar_url: user.avatar_url.clone(),
                initial: user.initial(),
                notification_count,
            },
        )
    }

    pub const fn is_member(&self) -> bool {
        matches!(self, Self::Member { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_item_follows_path() {
        let selected: Vec<&str> = SIDE_MENU
            .iter()
            .filter(|item| item.is_selected("/live-classes"))
            .map(|item| item.label)
            .collect();
        assert_eq!(selected, vec!["Live Classes"]);
        assert!(SIDE_MENU.iter().all(|item| !item.is_selected("/")));
    }

    #[test]
    fn test_drawer_account_group_only_when_signed_in() {
        assert!(drawer_account_menu(None).is_empty());

        let user = UserIdentity {
            display_name: "Yuki Tanaka".to_string(),
            email: "yuki@example.jp".to_string(),
            avatar_url: None,
            token: "t".to_string(),
        };
        let labels: Vec<&str> = drawer_account_menu(Some(&user))
            .iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["Achievements", "Settings"]);
        assert!(drawer_account_menu(Some(&user))[1].is_selected("/settings"));
    }

    #[test]
    fn test_guest_and_member_actions() {
        assert_eq!(
            TopBarActions::for_session(None, 3),
            TopBarActions::Guest {
                login: AppRoute::Login,
                sign_up: AppRoute::SignUp
            }
        );

        let user = UserIdentity {
            display_name: "Min-ji Park".to_string(),
            email: "minji@example.kr".to_string(),
            avatar_url: None,
            token: "t".to_string(),
        };
        let actions = TopBarActions::for_session(Some(&user), 3);
        assert!(actions.is_member());
        if let TopBarActions::Member {
            initial,
            notification_count,
            ..
        } = actions
        {
            assert_eq!(initial, "M");
            assert_eq!(notification_count, 3);
        }
    }
}
