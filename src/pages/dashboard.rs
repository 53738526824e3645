use kotoba_core::catalog::data;
use kotoba_core::models::dashboard::short_datetime;
use kotoba_core::routes;
use kotoba_core::AppRoute;
use leptos::prelude::*;

use crate::models::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState context missing");
    let summary = data::dashboard_summary();
    let stats = summary.stats;

    let greeting = move || {
        state.user.with(|user| {
            user.as_ref().map_or_else(
                || "Welcome back!".to_string(),
                |u| format!("Welcome back, {}!", u.display_name),
            )
        })
    };

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>{greeting}</h1>
                <p>"Here is how your studies are going"</p>
            </header>

            <section class="stats">
                <StatCard label="Completed Courses" value=stats.completed_courses.to_string() />
                <StatCard label="Enrolled Courses" value=stats.enrolled_courses.to_string() />
                <StatCard label="Upcoming Classes" value=stats.upcoming_classes.to_string() />
                <StatCard label="Completed Tests" value=stats.completed_tests.to_string() />
                <StatCard label="Average Score" value=format!("{}%", stats.average_score) />
            </section>

            <section class="dashboard-section">
                <h2>"My Courses"</h2>
                <div class="card-grid">
                    {summary
                        .enrolled_courses
                        .into_iter()
                        .map(|course| {
                            view! {
                                <article class="card enrolled-course">
                                    <div class="card-banner" style=format!("background: {}", course.gradient)></div>
                                    <h3>{course.title}</h3>
                                    <div class="progress" role="progressbar" aria-valuenow=course.progress.to_string()>
                                        <div class="progress-fill" style=format!("width: {}%", course.progress)></div>
                                    </div>
                                    <p class="card-meta">{format!("{}% complete", course.progress)}</p>
                                    <p class="card-meta">
                                        {format!("Next class: {}", short_datetime(&course.next_class))}
                                    </p>
                                    <a href=routes::course_detail_path(course.id) class="btn btn-ghost">
                                        "Continue"
                                    </a>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="dashboard-section">
                <h2>"Upcoming Classes"</h2>
                <ul class="schedule">
                    {summary
                        .upcoming_classes
                        .into_iter()
                        .map(|scheduled| {
                            view! {
                                <li class="schedule-item" style=format!("border-color: {}", scheduled.gradient)>
                                    <h3>{scheduled.title}</h3>
                                    <p class="card-meta">{scheduled.instructor}</p>
                                    <p class="card-meta">
                                        {format!("{} · {}", short_datetime(&scheduled.starts_at), scheduled.duration)}
                                    </p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a href=AppRoute::LiveClasses.path()>"Browse all live classes"</a>
            </section>

            <section class="dashboard-section">
                <h2>"Recent Test Results"</h2>
                <ul class="results">
                    {summary
                        .recent_tests
                        .into_iter()
                        .map(|result| {
                            let answers = result.answers_label();
                            view! {
                                <li class="result-item">
                                    <h3>{result.title}</h3>
                                    <span class="score">{format!("{}%", result.score)}</span>
                                    <p class="card-meta">{answers}</p>
                                    <p class="card-meta">
                                        {result.taken_on.format("%b %-d, %Y").to_string()}
                                    </p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a href=AppRoute::MockTests.path()>"Take another test"</a>
            </section>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
