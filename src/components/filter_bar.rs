use kotoba_core::catalog::{Facet, FacetOption};
use kotoba_core::state::FilterState;
use leptos::prelude::*;

#[component]
pub fn SearchField(filter: RwSignal<FilterState>, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-field"
            placeholder=placeholder
            prop:value=move || filter.with(|f| f.search_text().to_string())
            on:input=move |ev| {
                let text = event_target_value(&ev);
                filter.update(|f| f.set_search(text));
            }
        />
    }
}

/// Dropdown for one facet; the option with an empty value means "all".
#[component]
pub fn FacetSelect(
    filter: RwSignal<FilterState>,
    facet: Facet,
    options: &'static [FacetOption],
) -> impl IntoView {
    view! {
        <label class="facet-select">
            <span class="facet-label">{facet.label()}</span>
            <select
                prop:value=move || filter.with(|f| f.facet(facet).to_string())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.set_facet(facet, value));
                }
            >
                {options
                    .iter()
                    .map(|option| view! { <option value=option.value>{option.label}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Tab strip for one facet, e.g. class status or exam language.
#[component]
pub fn FacetTabs(
    filter: RwSignal<FilterState>,
    facet: Facet,
    options: &'static [FacetOption],
) -> impl IntoView {
    view! {
        <div class="facet-tabs" role="tablist">
            {options
                .iter()
                .map(|option| {
                    let value = option.value;
                    view! {
                        <button
                            role="tab"
                            class="facet-tab"
                            class:active=move || filter.with(|f| f.facet(facet) == value)
                            on:click=move |_| filter.update(|f| f.set_facet(facet, value))
                        >
                            {option.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
