use async_trait::async_trait;
use kotoba_core::models::{Credentials, UserIdentity};
use kotoba_core::{AuthError, AuthService};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Delays every call to the wrapped service by a fixed latency, so the
/// submitting state is visible against an in-process mock.
pub struct TimedAuth<A> {
    inner: A,
    latency_ms: u32,
}

impl<A> TimedAuth<A> {
    pub const fn new(inner: A, latency_ms: u32) -> Self {
        Self { inner, latency_ms }
    }
}

#[async_trait(?Send)]
impl<A: AuthService> AuthService for TimedAuth<A> {
    async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        sleep(self.latency_ms).await;
        self.inner.login(credentials).await
    }

    async fn logout(&self, identity: &UserIdentity) -> Result<(), AuthError> {
        sleep(self.latency_ms).await;
        self.inner.logout(identity).await
    }

    async fn verify(&self, identity: &UserIdentity) -> Result<(), AuthError> {
        self.inner.verify(identity).await
    }
}

/// Yield to the browser event loop for `ms` milliseconds.
async fn sleep(ms: u32) {
    if ms == 0 {
        return;
    }
    let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            // No timer available; resolve right away rather than hang
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    if let Err(e) = JsFuture::from(promise).await {
        tracing::warn!("Latency timer failed: {:?}", e);
    }
}
