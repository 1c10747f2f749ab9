//! Registration screen controller.

use tracing::{info, instrument};

use crate::services::UserService;
use crate::ui::{Banner, RegistrationForm};

/// What a submission did, so the caller can drive the transition.
/// There is no timed redirect: navigation away from the screen happens
/// iff the caller sees [`RegistrationOutcome::Registered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    Stayed,
}

/// The registration screen: one draft, one banner, one write-only
/// service call.
pub struct RegisterScreen {
    service: UserService,
    form: RegistrationForm,
    banner: Banner,
}

impl RegisterScreen {
    pub fn new(service: UserService) -> Self {
        Self {
            service,
            form: RegistrationForm::new(),
            banner: Banner::new(),
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Mutable access to the draft for field-by-field edits.
    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Clears the draft. No request is sent: there is no session to
    /// invalidate, logging out is purely local.
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Validates and submits the registration.
    ///
    /// Validation failure raises the error banner and sends nothing.
    /// A rejected registration keeps the draft for correction. Success
    /// raises the success banner and clears the draft; the caller
    /// decides where to navigate from the outcome.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> RegistrationOutcome {
        self.banner.clear();

        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(err) => {
                self.banner.set_error(err.to_string());
                return RegistrationOutcome::Stayed;
            }
        };

        match self.service.register(&payload).await {
            Ok(()) => {
                info!("Registration accepted");
                self.banner.set_success("Registration successful!");
                self.form.reset();
                RegistrationOutcome::Registered
            }
            Err(err) => {
                self.banner.set_error(err.to_string());
                RegistrationOutcome::Stayed
            }
        }
    }
}
