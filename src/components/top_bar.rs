use kotoba_core::catalog::data;
use kotoba_core::layout::TopBarActions;
use kotoba_core::AppRoute;
use leptos::prelude::*;

use crate::components::{NotificationMenu, UserMenu};
use crate::models::SessionState;

#[component]
pub fn TopBar(drawer_open: RwSignal<bool>) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState context missing");
    let notification_count = data::notifications().len();

    let actions = move || {
        if state.restoring.get() {
            return ().into_any();
        }
        match state
            .user
            .with(|user| TopBarActions::for_session(user.as_ref(), notification_count))
        {
            TopBarActions::Guest { login, sign_up } => view! {
                <div class="top-bar-actions">
                    <a href=login.path() class="btn btn-ghost">"Login"</a>
                    <a href=sign_up.path() class="btn btn-primary">"Sign Up"</a>
                </div>
            }
            .into_any(),
            TopBarActions::Member {
                display_name,
                avatar_url,
                initial,
                notification_count,
            } => view! {
                <div class="top-bar-actions">
                    <NotificationMenu count=notification_count />
                    <UserMenu display_name=display_name avatar_url=avatar_url initial=initial />
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <header class="top-bar">
            <button
                class="drawer-toggle"
                aria-label="Toggle navigation"
                on:click=move |_| drawer_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <a href=AppRoute::Home.path() class="brand">"Kotoba"</a>
            <div class="top-bar-spacer"></div>
            {actions}
        </header>
    }
}
