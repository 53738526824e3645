use std::rc::Rc;

use kotoba_core::state::SessionContext;
use kotoba_core::{AppConfig, AuthService, MockAuthService};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{MainLayout, Toast};
use crate::models::SessionState;
use crate::pages::{
    CoursesPage, DashboardPage, HomePage, InstructorsPage, LiveClassesPage, LoginPage,
    MockTestsPage, NotFoundPage, SignUpPage,
};
use crate::services::{storage, TimedAuth};

/// Root application component: builds the session, applies the theme and
/// mounts the router inside the layout shell.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let auth: Rc<dyn AuthService> = Rc::new(TimedAuth::new(
        MockAuthService::accepting_all(),
        config.auth_latency_ms,
    ));
    let store = storage::session_store(&config.session_storage_key);
    let state = SessionState::new(Rc::new(SessionContext::new(auth, store)));

    provide_context(state);
    state.restore();

    view! {
        <div class="app" style=config.theme.css_variables()>
            <Router>
                <Toast />
                <MainLayout>
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/courses") view=CoursesPage />
                        <Route path=path!("/instructors") view=InstructorsPage />
                        <Route path=path!("/live-classes") view=LiveClassesPage />
                        <Route path=path!("/mock-tests") view=MockTestsPage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/signup") view=SignUpPage />
                        <Route path=path!("/dashboard") view=DashboardPage />
                    </Routes>
                </MainLayout>
            </Router>
        </div>
    }
}
