//! Sign-up and sign-in screens.
//!
//! Neither screen authenticates anyone. Sign-up only records a display name
//! for the dashboard greeting.

use crate::error::{CoreError, ValidationError};
use crate::route::Route;
use crate::session::UserSession;
use once_cell::sync::Lazy;
use regex::Regex;

const DEFAULT_COUNTRY_CODE: &str = "+91";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{7,15}$").expect("valid regex"));

/// Values entered on the sign-up screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub country_code: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            phone: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

/// Errors from submitting the sign-up form.
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl SignupForm {
    /// Check the fields in order; the first failing rule wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.phone.is_empty()
        {
            return Err(ValidationError::new("Please fill in all fields"));
        }
        if utf16_len(&self.username) < 3 {
            return Err(ValidationError::new(
                "Username must be at least 3 characters long",
            ));
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::new("Invalid email format"));
        }
        if utf16_len(&self.password) < 6 {
            return Err(ValidationError::new(
                "Password must be at least 6 characters long",
            ));
        }
        if !PHONE_RE.is_match(&self.phone) {
            return Err(ValidationError::new("Phone number must be 7-15 digits"));
        }
        Ok(())
    }

    /// Validate, remember the username, and send the user to sign-in.
    pub fn submit(&self, session: &UserSession) -> Result<Route, SignupError> {
        self.validate()?;
        session.set_display_name(&self.username)?;
        tracing::info!(username = %self.username, "signed up");
        Ok(Route::Login)
    }
}

/// Length in UTF-16 code units, as a browser text field counts it.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Sign in. Credentials are not checked; the dashboard always follows.
pub fn login(username: &str, _password: &str) -> Route {
    tracing::debug!(username, "sign-in accepted");
    Route::Dashboard
}
