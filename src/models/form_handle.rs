use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use kotoba_core::state::{FormController, SubmitOutcome};
use kotoba_core::validation::{Field, FormSchema};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;

use crate::models::SessionState;

/// A view's form: the controller signal plus a liveness flag that
/// `on_cleanup` drops when the view unmounts.
pub struct FormHandle<S: Send + Sync + 'static> {
    pub form: RwSignal<FormController<S>>,
    alive: Arc<AtomicBool>,
}

impl<S: Send + Sync + 'static> Clone for FormHandle<S> {
    fn clone(&self) -> Self {
        Self {
            form: self.form,
            alive: Arc::clone(&self.alive),
        }
    }
}

impl<S> Default for FormHandle<S>
where
    S: FormSchema + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FormHandle<S>
where
    S: FormSchema + Default + Send + Sync + 'static,
{
    /// Must be called while building the owning view.
    pub fn new() -> Self {
        let form = RwSignal::new(FormController::<S>::default());
        let alive = Arc::new(AtomicBool::new(true));

        on_cleanup({
            let alive = Arc::clone(&alive);
            move || {
                alive.store(false, Ordering::Release);
                form.update(FormController::abandon);
            }
        });

        Self { form, alive }
    }

    pub fn value(&self, read: fn(&S) -> &str) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| read(f.fields()).to_string()))
    }

    pub fn setter(&self, write: fn(&mut S, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value| form.update(|f| f.edit(|fields| write(fields, value))))
    }

    pub fn error(&self, field: Field) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.error(field)))
    }

    pub fn banner(&self) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.banner().map(str::to_string)))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(FormController::is_submitting))
    }

    /// Validate, then log in through the session and navigate on success.
    ///
    /// Ignored while a submission is in flight or after success.
    pub fn submit(&self, state: SessionState, navigate: impl Fn(&str, NavigateOptions) + 'static) {
        let form = self.form;
        let Some(Ok((ticket, credentials))) = form.try_update(|f| f.begin_submit()) else {
            return;
        };

        let alive = Arc::clone(&self.alive);
        let session = state.session();
        spawn_local(async move {
            let result = session.login(&credentials).await;
            if result.is_ok() {
                state.sync_user();
            }

            if !alive.load(Ordering::Acquire) {
                tracing::debug!("Form view is gone; dropping submission result");
                return;
            }

            if let Some(Some(SubmitOutcome::Navigate(route))) =
                form.try_update(|f| f.complete(ticket, result))
            {
                navigate(route.path(), NavigateOptions::default());
            }
        });
    }
}
