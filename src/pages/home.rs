use kotoba_core::catalog::data;
use kotoba_core::state::ImageFallbacks;
use kotoba_core::AppRoute;
use leptos::prelude::*;

use crate::components::CatalogImage;

/// Number of courses previewed on the landing page
const FEATURED_COURSES: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let fallbacks = RwSignal::new(ImageFallbacks::new());

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Master Japanese & Korean"</h1>
                <p class="hero-subtitle">
                    "Learn from native speakers with live classes, structured courses and exam practice."
                </p>
                <div class="hero-actions">
                    <a href=AppRoute::Courses.path() class="btn btn-primary">"Explore Courses"</a>
                    <a href=AppRoute::SignUp.path() class="btn btn-ghost">"Get Started"</a>
                </div>
            </section>

            <section class="features">
                <h2>"Why Kotoba"</h2>
                <div class="card-grid">
                    {data::features()
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <div class="card feature-card">
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="featured-courses">
                <h2>"Popular Courses"</h2>
                <div class="card-grid">
                    {data::courses()
                        .into_iter()
                        .take(FEATURED_COURSES)
                        .map(|course| {
                            let href = course.detail_path();
                            view! {
                                <a href=href class="card course-preview">
                                    <CatalogImage
                                        id=course.id
                                        image=course.image
                                        alt=course.title.clone()
                                        fallbacks=fallbacks
                                    />
                                    <h3>{course.title}</h3>
                                    <p>{course.description}</p>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="testimonials">
                <h2>"What Our Students Say"</h2>
                <div class="card-grid">
                    {data::testimonials()
                        .into_iter()
                        .map(|t| {
                            view! {
                                <figure class="card testimonial">
                                    <blockquote>{t.text}</blockquote>
                                    <figcaption>
                                        <img class="avatar" src=t.avatar_url alt=t.name.clone() />
                                        <span class="testimonial-name">{t.name}</span>
                                        <span class="testimonial-role">{t.role}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
