use leptos::prelude::*;

/// Labelled input with its inline validation message.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] input_type: String,
    #[prop(optional, into)] placeholder: String,
    value: Signal<String>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group" class:has-error=move || error.with(Option::is_some)>
            <label for=name.clone()>{label}</label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}

#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-banner" role="alert">
                    <span>"✕"</span>
                    <span>{text}</span>
                </div>
            }
        })
    }
}
