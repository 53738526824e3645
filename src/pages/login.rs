use kotoba_core::validation::{Field, LoginFields};
use kotoba_core::AppRoute;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{ErrorBanner, FormField};
use crate::models::{FormHandle, SessionState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState context missing");
    let navigate = use_navigate();
    let handle = FormHandle::<LoginFields>::new();
    let submitting = handle.submitting();

    let on_submit = {
        let handle = handle.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            handle.submit(state, navigate.clone());
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-subtitle">"Log in to continue learning"</p>
                <ErrorBanner message=handle.banner() />
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <FormField
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=handle.value(|f| f.email.as_str())
                        error=handle.error(Field::Email)
                        disabled=submitting
                        on_input=handle.setter(|f, v| f.email = v)
                    />
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        value=handle.value(|f| f.password.as_str())
                        error=handle.error(Field::Password)
                        disabled=submitting
                        on_input=handle.setter(|f, v| f.password = v)
                    />
                    <div class="form-row">
                        <a href=AppRoute::ForgotPassword.path()>"Forgot password?"</a>
                    </div>
                    <button
                        type="submit"
                        class="btn btn-primary btn-full"
                        prop:disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>
                <p class="auth-link">
                    "Don't have an account? "
                    <a href=AppRoute::SignUp.path()>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
