//! State machine for the combined sign-in / sign-up form.
//!
//! DESIGN
//! ======
//! Mode and submission status are explicit enums so illegal combinations are
//! either unrepresentable (a failure message alongside an in-flight request)
//! or rejected by the transition methods (a mode toggle or second submit
//! while a request is outstanding).

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

/// Which credential form is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Submission status of the active form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

/// Confirmation shown after a successful registration. Signing up does not
/// issue a session; the new account holder signs in explicitly.
pub const REGISTERED_NOTICE: &str = "Account created! Please sign in.";

/// Form state owned exclusively by the auth page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub status: SubmitStatus,
    pub notice: Option<String>,
}

impl AuthFormState {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// The current failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message),
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        }
    }

    /// Switch between sign-in and sign-up, clearing fields, failure, and
    /// notice. Rejected while a submission is in flight so the outstanding
    /// response cannot land in the wrong mode.
    pub fn toggle_mode(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::new(match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        });
        true
    }

    /// Enter the submitting state, clearing any previous failure. Rejected
    /// while a submission is already outstanding, which serializes
    /// submissions per form instance.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        self.notice = None;
        true
    }

    /// Record a failure message. Entered fields are preserved so the user
    /// does not have to retype them.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = SubmitStatus::Failed(message.into());
        self.notice = None;
    }

    /// A registration was accepted: return to sign-in with cleared fields
    /// and a confirmation notice. No session is issued here.
    pub fn register_succeeded(&mut self) {
        *self = Self::new(AuthMode::Login);
        self.notice = Some(REGISTERED_NOTICE.to_owned());
    }
}

/// Initial mode from the router's navigation intent: `/auth?mode=signup`
/// opens the sign-up form, anything else opens sign-in.
pub fn initial_mode(mode_param: Option<&str>) -> AuthMode {
    match mode_param {
        Some("signup") => AuthMode::Register,
        _ => AuthMode::Login,
    }
}
