use kotoba_core::catalog::{data, Facet};
use kotoba_core::models::MockTest;
use kotoba_core::state::{FilterState, ImageFallbacks};
use leptos::prelude::*;

use crate::components::{CatalogImage, FacetTabs, SearchField};
use crate::pages::load_catalog;

#[component]
pub fn MockTestsPage() -> impl IntoView {
    let tests = StoredValue::new(load_catalog(data::mock_tests()));
    let filter = RwSignal::new(FilterState::new());
    let fallbacks = RwSignal::new(ImageFallbacks::new());

    let visible = Memo::new(move |_| {
        tests.with_value(|all| {
            filter.with(|f| all.filter(f).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    view! {
        <section class="catalog-page">
            <header class="page-header">
                <h1>"Mock Tests"</h1>
                <p>"Full-length JLPT and TOPIK practice exams"</p>
            </header>
            <div class="filter-bar">
                <SearchField filter=filter placeholder="Search tests..." />
            </div>
            <FacetTabs filter=filter facet=Facet::Language options=&MockTest::LANGUAGE_TABS />
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="empty-state">"No tests found."</p> }
            >
                <div class="card-grid">
                    <For each=move || visible.get() key=|test| test.id let:test>
                        <MockTestCard test=test fallbacks=fallbacks />
                    </For>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn MockTestCard(test: MockTest, fallbacks: RwSignal<ImageFallbacks>) -> impl IntoView {
    let href = test.detail_path();
    let questions = format!("{} questions", test.questions);

    view! {
        <article class="card mock-test-card">
            <div class="card-media" style=format!("background: {}", test.gradient)>
                <CatalogImage id=test.id image=test.image alt=test.title.clone() fallbacks=fallbacks />
            </div>
            <div class="card-body">
                <div class="chips">
                    <span class="chip">{test.language}</span>
                    <span class="chip chip-outline">{test.level}</span>
                </div>
                <h3 class="card-title">{test.title}</h3>
                <p class="card-text">{test.description}</p>
                <p class="card-meta">
                    <span>{test.duration}</span>
                    <span>{questions}</span>
                </p>
            </div>
            <footer class="card-footer">
                {if test.available {
                    view! { <a href=href class="btn btn-primary">"Start Test"</a> }.into_any()
                } else {
                    view! { <span class="btn btn-disabled">"Coming Soon"</span> }.into_any()
                }}
            </footer>
        </article>
    }
}
