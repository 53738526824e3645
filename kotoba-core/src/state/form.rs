use crate::error::AuthError;
use crate::models::{Credentials, UserIdentity};
use crate::routes::AppRoute;
use crate::state::SessionContext;
use crate::validation::{Field, FieldErrors, FormSchema};

/// Where a form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    /// Terminal; the view navigates away
    Succeeded,
}

/// Proof of one in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// Why `begin_submit` did not start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Client-side validation failed; errors are on the form
    Invalid,
    /// A submission is already in flight
    InFlight,
    /// The form already succeeded or its view is gone
    Closed,
}

/// What the view should do after a submission resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate(AppRoute),
    Failed,
}

/// Field values, inline errors and submission state for one form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController<S> {
    fields: S,
    errors: FieldErrors,
    phase: FormPhase,
    banner: Option<String>,
    generation: u64,
    attempted: bool,
    abandoned: bool,
}

impl<S: FormSchema + Default> Default for FormController<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: FormSchema> FormController<S> {
    /// Where a successful submission leads
    pub const DESTINATION: AppRoute = AppRoute::Dashboard;

    pub fn new(fields: S) -> Self {
        Self {
            fields,
            errors: FieldErrors::new(),
            phase: FormPhase::Editing,
            banner: None,
            generation: 0,
            attempted: false,
            abandoned: false,
        }
    }

    pub const fn fields(&self) -> &S {
        &self.fields
    }

    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.message(field)
    }

    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting)
    }

    /// Generic failure message, shown after the auth service rejects.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Change field values. Once a submit has been attempted, errors are
    /// recomputed so inline messages track the input.
    pub fn edit(&mut self, change: impl FnOnce(&mut S)) {
        change(&mut self.fields);
        if self.attempted {
            self.errors = self.fields.validate();
        }
    }

    /// Validate and, if clean, move to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<(SubmitTicket, Credentials), SubmitRejected> {
        if self.abandoned || self.phase == FormPhase::Succeeded {
            return Err(SubmitRejected::Closed);
        }
        if self.phase == FormPhase::Submitting {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return Err(SubmitRejected::InFlight);
        }

        self.attempted = true;
        self.errors = self.fields.validate();
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "Form failed validation");
            return Err(SubmitRejected::Invalid);
        }

        self.banner = None;
        self.phase = FormPhase::Submitting;
        self.generation += 1;
        Ok((
            SubmitTicket {
                generation: self.generation,
            },
            self.fields.credentials(),
        ))
    }

    /// Apply the auth service's answer. Returns `None` for a stale ticket.
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        result: Result<UserIdentity, AuthError>,
    ) -> Option<SubmitOutcome> {
        if self.abandoned
            || self.phase != FormPhase::Submitting
            || ticket.generation != self.generation
        {
            tracing::debug!("Dropping stale submission result");
            return None;
        }

        match result {
            Ok(_) => {
                self.phase = FormPhase::Succeeded;
                Some(SubmitOutcome::Navigate(Self::DESTINATION))
            }
            Err(e) => {
                tracing::warn!("Submission rejected: {}", e);
                self.phase = FormPhase::Editing;
                self.banner = Some(self.fields.failure_message().to_string());
                Some(SubmitOutcome::Failed)
            }
        }
    }

    /// The owning view went away; any result still in flight is dropped.
    pub fn abandon(&mut self) {
        self.abandoned = true;
    }

    /// Run a full submission against `session`.
    pub async fn submit(
        &mut self,
        session: &SessionContext,
    ) -> Result<SubmitOutcome, SubmitRejected> {
        let (ticket, credentials) = self.begin_submit()?;
        let result = session.login(&credentials).await;
        self.complete(ticket, result).ok_or(SubmitRejected::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::LoginFields;

    fn filled() -> FormController<LoginFields> {
        FormController::new(LoginFields {
            email: "yuki@example.com".to_string(),
            password: "secret1".to_string(),
        })
    }

    fn identity() -> UserIdentity {
        UserIdentity {
            display_name: "Yuki".to_string(),
            email: "yuki@example.com".to_string(),
            avatar_url: None,
            token: "t".to_string(),
        }
    }

    #[test]
    fn test_invalid_form_stays_editing() {
        let mut form = FormController::<LoginFields>::default();
        assert_eq!(form.begin_submit().unwrap_err(), SubmitRejected::Invalid);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.error(Field::Email).as_deref(), Some("Email is required"));
    }

    #[test]
    fn test_submit_is_inert_while_submitting() {
        let mut form = filled();
        let (ticket, credentials) = form.begin_submit().unwrap();
        assert_eq!(credentials.email, "yuki@example.com");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit().unwrap_err(), SubmitRejected::InFlight);

        assert_eq!(
            form.complete(ticket, Ok(identity())),
            Some(SubmitOutcome::Navigate(AppRoute::Dashboard))
        );
        assert_eq!(form.phase(), FormPhase::Succeeded);
        assert_eq!(form.begin_submit().unwrap_err(), SubmitRejected::Closed);
    }

    #[test]
    fn test_success_navigates_once() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit().unwrap();
        assert!(form.complete(ticket, Ok(identity())).is_some());
        assert!(form.complete(ticket, Ok(identity())).is_none());
    }

    #[test]
    fn test_rejection_returns_to_editing_with_generic_banner() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit().unwrap();
        let outcome = form.complete(ticket, Err(AuthError::Network("tls handshake".into())));
        assert_eq!(outcome, Some(SubmitOutcome::Failed));
        assert_eq!(form.phase(), FormPhase::Editing);
        let banner = form.banner().unwrap();
        assert_eq!(banner, "Failed to login. Please check your credentials.");
        assert!(!banner.contains("tls"));

        // a retry clears the banner
        form.begin_submit().unwrap();
        assert!(form.banner().is_none());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut form = filled();
        let (old, _) = form.begin_submit().unwrap();
        form.complete(old, Err(AuthError::Unavailable));
        let (current, _) = form.begin_submit().unwrap();

        assert!(form.complete(old, Ok(identity())).is_none());
        assert!(form.is_submitting());
        assert!(form.complete(current, Ok(identity())).is_some());
    }

    #[test]
    fn test_abandoned_form_drops_results() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit().unwrap();
        form.abandon();
        assert!(form.complete(ticket, Ok(identity())).is_none());
    }

    #[test]
    fn test_edit_revalidates_after_first_attempt() {
        let mut form = FormController::<LoginFields>::default();
        form.edit(|f| f.email = "bad".to_string());
        assert!(form.errors().is_empty(), "no errors before the first submit");

        let _ = form.begin_submit();
        assert!(form.error(Field::Email).is_some());
        form.edit(|f| f.email = "yuki@example.com".to_string());
        assert!(form.error(Field::Email).is_none());
        assert!(form.error(Field::Password).is_some());
    }
}
