use kotoba_core::AppRoute;
use leptos::prelude::*;

/// Rendered for any path outside the route table, including detail links.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-message">"Page not found"</p>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <a href=AppRoute::Home.path() class="btn btn-primary">"Return Home"</a>
        </div>
    }
}
