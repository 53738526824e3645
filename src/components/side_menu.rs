use kotoba_core::layout::{drawer_account_menu, MenuItem, SIDE_MENU};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::user_menu::use_logout;
use crate::models::SessionState;

/// Drawer with the primary navigation; the entry for the current path is
/// highlighted. Signed-in users also get their account entries and Logout.
#[component]
pub fn SideMenu(open: RwSignal<bool>) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState context missing");
    let pathname = use_location().pathname;
    let logout = use_logout();

    let entry = move |item: MenuItem| {
        view! {
            <li>
                <a
                    href=item.route.path()
                    class="side-menu-item"
                    class:selected=move || pathname.with(|path| item.is_selected(path))
                    on:click=move |_| open.set(false)
                >
                    {item.label}
                </a>
            </li>
        }
    };

    let on_logout = move |_| {
        open.set(false);
        logout();
    };

    view! {
        <nav class="side-menu" class:open=move || open.get()>
            <ul>{SIDE_MENU.iter().map(|item| entry(*item)).collect_view()}</ul>
            <ul class="side-menu-account" hidden=move || !state.is_authenticated()>
                <li class="menu-divider"></li>
                {move || {
                    state
                        .user
                        .with(|user| {
                            drawer_account_menu(user.as_ref())
                                .iter()
                                .map(|item| entry(*item))
                                .collect_view()
                        })
                }}
                <li>
                    <button class="side-menu-item menu-action" on:click=on_logout>
                        "Logout"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
