use leptos::prelude::*;

use crate::components::{SideMenu, TopBar};

/// Shell around every view: top bar, collapsible side drawer and content.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let drawer_open = RwSignal::new(false);

    view! {
        <div class="layout" class:drawer-open=move || drawer_open.get()>
            <TopBar drawer_open=drawer_open />
            <SideMenu open=drawer_open />
            <main class="content">{children()}</main>
        </div>
    }
}
