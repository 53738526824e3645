use kotoba_core::models::Role;
use kotoba_core::validation::{Field, SignUpFields};
use kotoba_core::AppRoute;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{ErrorBanner, FormField};
use crate::models::{FormHandle, SessionState};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState context missing");
    let navigate = use_navigate();
    let handle = FormHandle::<SignUpFields>::new();
    let submitting = handle.submitting();

    let role = handle.value(|f| f.role.as_str());
    let role_error = handle.error(Field::Role);
    let set_role = handle.setter(|f, v| f.role = v);

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
                <h1>"Create Account"</h1>
                <p class="auth-subtitle">"Start learning Japanese or Korean today"</p>
                <ErrorBanner message=handle.banner() />
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <FormField
                        label="Full Name"
                        name="name"
                        input_type="text"
                        value=handle.value(|f| f.name.as_str())
                        error=handle.error(Field::Name)
                        disabled=submitting
                        on_input=handle.setter(|f, v| f.name = v)
                    />
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
                    <div class="form-group" class:has-error=move || role_error.with(Option::is_some)>
                        <label for="role">"I want to join as"</label>
                        <select
                            id="role"
                            name="role"
                            prop:value=move || role.get()
                            prop:disabled=move || submitting.get()
                            on:change=move |ev| set_role.run(event_target_value(&ev))
                        >
                            {Role::ALL
                                .iter()
                                .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                                .collect_view()}
                        </select>
                        {move || {
                            role_error
                                .get()
                                .map(|message| view! { <p class="field-error">{message}</p> })
                        }}
                    </div>
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        value=handle.value(|f| f.password.as_str())
                        error=handle.error(Field::Password)
                        disabled=submitting
                        on_input=handle.setter(|f, v| f.password = v)
                    />
                    <FormField
                        label="Confirm Password"
                        name="confirmPassword"
                        input_type="password"
                        value=handle.value(|f| f.confirm_password.as_str())
                        error=handle.error(Field::ConfirmPassword)
                        disabled=submitting
                        on_input=handle.setter(|f, v| f.confirm_password = v)
                    />
                    <button
                        type="submit"
                        class="btn btn-primary btn-full"
                        prop:disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-link">
                    "Already have an account? "
                    <a href=AppRoute::Login.path()>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
