use kotoba_core::catalog::{data, Facet};
use kotoba_core::models::Course;
use kotoba_core::state::{FilterState, ImageFallbacks};
use leptos::prelude::*;

use crate::components::{CatalogImage, FacetSelect, SearchField};
use crate::pages::load_catalog;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let courses = StoredValue::new(load_catalog(data::courses()));
    let filter = RwSignal::new(FilterState::new());
    let fallbacks = RwSignal::new(ImageFallbacks::new());

    let visible = Memo::new(move |_| {
        courses.with_value(|all| {
            filter.with(|f| all.filter(f).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    view! {
        <section class="catalog-page">
            <header class="page-header">
                <h1>"Explore Our Courses"</h1>
                <p>"Structured Japanese and Korean courses for every level"</p>
            </header>
            <div class="filter-bar">
                <SearchField filter=filter placeholder="Search courses..." />
                <FacetSelect filter=filter facet=Facet::Language options=&Course::LANGUAGE_OPTIONS />
                <FacetSelect filter=filter facet=Facet::Level options=&Course::LEVEL_OPTIONS />
            </div>
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="empty-state">"No courses match your search."</p> }
            >
                <div class="card-grid">
                    <For each=move || visible.get() key=|course| course.id let:course>
                        <CourseCard course=course fallbacks=fallbacks />
                    </For>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn CourseCard(course: Course, fallbacks: RwSignal<ImageFallbacks>) -> impl IntoView {
    let price = course.price_label();
    let href = course.detail_path();

    view! {
        <article class="card course-card">
            <div class="card-media" style=format!("background: {}", course.gradient)>
                <CatalogImage
                    id=course.id
                    image=course.image
                    alt=course.title.clone()
                    fallbacks=fallbacks
                />
            </div>
            <div class="card-body">
                <div class="chips">
                    <span class="chip">{course.language}</span>
                    <span class="chip chip-outline">{course.level}</span>
                </div>
                <h3 class="card-title">{course.title}</h3>
                <p class="card-text">{course.description}</p>
                <p class="card-meta">
                    <span>{course.instructor}</span>
                    <span>{course.duration}</span>
                </p>
            </div>
            <footer class="card-footer">
                <span class="price">{price}</span>
                <a href=href class="btn btn-primary">"View Details"</a>
            </footer>
        </article>
    }
}
