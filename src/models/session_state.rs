use std::rc::Rc;

use kotoba_core::models::UserIdentity;
use kotoba_core::state::SessionContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;

/// Reactive mirror of the session, shared with every view via `use_context()`.
///
/// The `SessionContext` stays the single writer; the signals here only
/// reflect what it holds after each operation.
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Signed-in user, if any
    pub user: RwSignal<Option<UserIdentity>>,
    /// True until the stored session has been checked at start
    pub restoring: RwSignal<bool>,
    /// Transient message for the toast
    pub notification: RwSignal<Option<String>>,
    context: StoredValue<SendWrapper<Rc<SessionContext>>>,
}

impl SessionState {
    pub fn new(context: Rc<SessionContext>) -> Self {
        Self {
            user: RwSignal::new(context.current()),
            restoring: RwSignal::new(true),
            notification: RwSignal::new(None),
            context: StoredValue::new(SendWrapper::new(context)),
        }
    }

    pub fn session(&self) -> Rc<SessionContext> {
        self.context.with_value(|ctx| Rc::clone(&**ctx))
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// Copy the context's identity into the signal.
    pub fn sync_user(&self) {
        self.user.set(self.session().current());
    }

    /// Rehydrate the persisted session in the background.
    pub fn restore(self) {
        let session = self.session();
        spawn_local(async move {
            let restored = session.restore().await;
            if let Some(identity) = &restored {
                tracing::debug!("Restored session for {}", identity.email);
            }
            self.user.set(restored);
            self.restoring.set(false);
        });
    }

    /// Sign out, then run `then` (usually a redirect to the login view).
    pub fn logout(self, then: impl FnOnce() + 'static) {
        let session = self.session();
        spawn_local(async move {
            if let Err(e) = session.logout().await {
                tracing::warn!("Logout did not reach the auth service: {}", e);
                self.show_notification("Signed out on this device only");
            }
            self.user.set(None);
            then();
        });
    }

    /// Show a notification (auto-dismiss is handled by the toast)
    pub fn show_notification(&self, message: impl Into<String>) {
        self.notification.set(Some(message.into()));
    }

    pub fn clear_notification(&self) {
        self.notification.set(None);
    }
}
