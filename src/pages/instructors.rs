use kotoba_core::catalog::{data, Facet};
use kotoba_core::models::Instructor;
use kotoba_core::state::{FilterState, ImageFallbacks};
use leptos::prelude::*;

use crate::components::{CatalogImage, FacetSelect, SearchField};
use crate::pages::load_catalog;

#[component]
pub fn InstructorsPage() -> impl IntoView {
    let instructors = StoredValue::new(load_catalog(data::instructors()));
    let filter = RwSignal::new(FilterState::new());
    let fallbacks = RwSignal::new(ImageFallbacks::new());

    let visible = Memo::new(move |_| {
        instructors.with_value(|all| {
            filter.with(|f| all.filter(f).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    view! {
        <section class="catalog-page">
            <header class="page-header">
                <h1>"Meet Our Instructors"</h1>
                <p>"Native speakers and certified examiners"</p>
            </header>
            <div class="filter-bar">
                <SearchField filter=filter placeholder="Search instructors..." />
                <FacetSelect
                    filter=filter
                    facet=Facet::Language
                    options=&Instructor::LANGUAGE_OPTIONS
                />
            </div>
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="empty-state">"No instructors match your search."</p> }
            >
                <div class="card-grid">
                    <For each=move || visible.get() key=|instructor| instructor.id let:instructor>
                        <InstructorCard instructor=instructor fallbacks=fallbacks />
                    </For>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn InstructorCard(instructor: Instructor, fallbacks: RwSignal<ImageFallbacks>) -> impl IntoView {
    let social = instructor.social;

    view! {
        <article class="card instructor-card">
            <div class="card-media" style=format!("background: {}", instructor.gradient)>
                <CatalogImage
                    id=instructor.id
                    image=instructor.image
                    alt=instructor.name.clone()
                    fallbacks=fallbacks
                />
            </div>
            <div class="card-body">
                <h3 class="card-title">{instructor.name}</h3>
                <p class="card-subtitle">{instructor.role}</p>
                <div class="chips">
                    {instructor
                        .languages
                        .into_iter()
                        .map(|language| view! { <span class="chip">{language}</span> })
                        .collect_view()}
                </div>
                <p class="card-text">{instructor.bio}</p>
                <p class="card-meta">{format!("{} experience", instructor.experience)}</p>
                <h4>"Courses"</h4>
                <ul class="course-list">
                    {instructor
                        .courses
                        .into_iter()
                        .map(|course| view! { <li>{course}</li> })
                        .collect_view()}
                </ul>
            </div>
            <footer class="card-footer social-links">
                {social
                    .linkedin
                    .map(|href| view! { <a href=href target="_blank" rel="noopener">"LinkedIn"</a> })}
                {social
                    .twitter
                    .map(|href| view! { <a href=href target="_blank" rel="noopener">"Twitter"</a> })}
            </footer>
        </article>
    }
}
