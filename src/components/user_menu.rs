use kotoba_core::layout::USER_MENU;
use kotoba_core::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::models::SessionState;

/// Sign out, then show the login view.
pub fn use_logout() -> impl Fn() + Clone + 'static {
    let state = use_context::<SessionState>().expect("SessionState context missing");
    let navigate = use_navigate();
    move || {
        let navigate = navigate.clone();
        state.logout(move || navigate(AppRoute::Login.path(), NavigateOptions::default()));
    }
}

/// Avatar button with the account menu.
#[component]
pub fn UserMenu(display_name: String, avatar_url: Option<String>, initial: String) -> impl IntoView {
    let logout = use_logout();
    let open = RwSignal::new(false);

    let avatar = match avatar_url {
        Some(url) => view! { <img class="avatar" src=url alt=display_name.clone() /> }.into_any(),
        None => view! { <span class="avatar avatar-initial">{initial}</span> }.into_any(),
    };

    let on_logout = move |_| {
        open.set(false);
        logout();
    };

    view! {
        <div class="menu user-menu">
            <button
                class="menu-trigger"
                aria-label="Account"
                title=display_name.clone()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {avatar}
            </button>
            <ul class="menu-list" hidden=move || !open.get()>
                <li class="menu-header">{display_name}</li>
                {USER_MENU
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                <a href=item.route.path() on:click=move |_| open.set(false)>
                                    {item.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
                <li class="menu-divider"></li>
                <li>
                    <button class="menu-action" on:click=on_logout>"Logout"</button>
                </li>
            </ul>
        </div>
    }
}
