use kotoba_core::catalog::data;
use kotoba_core::AppRoute;
use leptos::prelude::*;

#[component]
pub fn NotificationMenu(count: usize) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="menu notification-menu">
            <button
                class="menu-trigger"
                aria-label="Notifications"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "🔔"
                {(count > 0).then(|| view! { <span class="badge">{count}</span> })}
            </button>
            <ul class="menu-list" hidden=move || !open.get()>
                {data::notifications()
                    .into_iter()
                    .map(|n| {
                        view! {
                            <li class="notification">
                                <span class="notification-text">{n.text}</span>
                                <span class="notification-age">{n.age}</span>
                            </li>
                        }
                    })
                    .collect_view()}
                <li class="menu-divider"></li>
                <li>
                    <a href=AppRoute::Notifications.path() on:click=move |_| open.set(false)>
                        "View All Notifications"
                    </a>
                </li>
            </ul>
        </div>
    }
}
