use kotoba_core::catalog::{data, Facet};
use kotoba_core::models::LiveClass;
use kotoba_core::state::{FilterState, ImageFallbacks};
use leptos::prelude::*;

use crate::components::{CatalogImage, FacetTabs, SearchField};
use crate::pages::load_catalog;

#[component]
pub fn LiveClassesPage() -> impl IntoView {
    let classes = StoredValue::new(load_catalog(data::live_classes()));
    let filter = RwSignal::new(FilterState::new());
    let fallbacks = RwSignal::new(ImageFallbacks::new());

    let visible = Memo::new(move |_| {
        classes.with_value(|all| {
            filter.with(|f| all.filter(f).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    view! {
        <section class="catalog-page">
            <header class="page-header">
                <h1>"Live Classes"</h1>
                <p>"Join interactive sessions with our instructors"</p>
            </header>
            <div class="filter-bar">
                <SearchField filter=filter placeholder="Search classes..." />
            </div>
            <FacetTabs filter=filter facet=Facet::Status options=&LiveClass::STATUS_TABS />
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="empty-state">"No classes found."</p> }
            >
                <div class="card-grid">
                    <For each=move || visible.get() key=|live_class| live_class.id let:live_class>
                        <LiveClassCard live_class=live_class fallbacks=fallbacks />
                    </For>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn LiveClassCard(live_class: LiveClass, fallbacks: RwSignal<ImageFallbacks>) -> impl IntoView {
    let status = live_class.status;
    let starts = live_class.formatted_start();
    let enrollment = live_class.enrollment_label();
    let is_full = live_class.is_full();
    let href = live_class.detail_path();

    view! {
        <article class="card live-class-card" class:full=is_full>
            <div class="card-media">
                <CatalogImage
                    id=live_class.id
                    image=live_class.image
                    alt=live_class.title.clone()
                    fallbacks=fallbacks
                />
                <span class=format!("status-badge {}", status.css_class())>{status.label()}</span>
            </div>
            <div class="card-body">
                <div class="chips">
                    <span class="chip">{live_class.language}</span>
                    <span class="chip chip-outline">{live_class.level}</span>
                </div>
                <h3 class="card-title">{live_class.title}</h3>
                <div class="class-instructor">
                    <img
                        class="avatar"
                        src=live_class.instructor.avatar_url
                        alt=live_class.instructor.name.clone()
                    />
                    <span>{live_class.instructor.name}</span>
                </div>
                <p class="card-text">{live_class.description}</p>
                <ul class="class-details">
                    <li>{starts}</li>
                    <li>{live_class.duration}</li>
                    <li>{enrollment}</li>
                </ul>
            </div>
            <footer class="card-footer">
                <a href=href class="btn btn-primary">{status.action_label()}</a>
            </footer>
        </article>
    }
}
