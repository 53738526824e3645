use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::tachys::dom::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::models::SessionState;

const DISMISS_AFTER_MS: i32 = 3000;

/// Transient, non-modal message at the top of the page.
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState context missing");

    let pending_timeout = Rc::new(Cell::new(None::<i32>));

    // Auto-dismiss; a new message restarts the timer
    Effect::new({
        let pending_timeout = Rc::clone(&pending_timeout);
        move |_| {
            if let Some(handle) = pending_timeout.take() {
                window().clear_timeout_with_handle(handle);
            }

            if state.notification.get().is_some() {
                let dismiss = Closure::once_into_js(move || state.clear_notification());
                match window().set_timeout_with_callback_and_timeout_and_arguments_0(
                    dismiss.unchecked_ref(),
                    DISMISS_AFTER_MS,
                ) {
                    Ok(handle) => pending_timeout.set(Some(handle)),
                    Err(e) => tracing::warn!("Failed to schedule toast dismissal: {:?}", e),
                }
            }
        }
    });

    view! {
        <Show when=move || state.notification.with(Option::is_some)>
            <div class="toast" role="status">
                {move || state.notification.get().unwrap_or_default()}
                <button class="toast-close" on:click=move |_| state.clear_notification()>
                    "×"
                </button>
            </div>
        </Show>
    }
}
