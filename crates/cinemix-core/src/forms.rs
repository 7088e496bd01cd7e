use cinemix_models::ReviewPayload;
use serde::Serialize;
use thiserror::Error;

use crate::password::PasswordCheck;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "issue")]
pub enum RegistrationIssue {
    #[error("username is required")]
    MissingUsername,
    #[error("email is required")]
    MissingEmail,
    #[error("password does not meet the requirements")]
    WeakPassword,
    #[error("password and confirmation do not match")]
    PasswordMismatch,
}

/// Local gate for the registration form. A mismatched confirmation or a
/// weak password never reaches the network; remote field-level validation
/// still applies on top.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), Vec<RegistrationIssue>> {
    let mut issues = Vec::new();
    if form.username.trim().is_empty() {
        issues.push(RegistrationIssue::MissingUsername);
    }
    if form.email.trim().is_empty() {
        issues.push(RegistrationIssue::MissingEmail);
    }
    if !PasswordCheck::evaluate(&form.password).is_valid() {
        issues.push(RegistrationIssue::WeakPassword);
    }
    if form.password != form.password_confirm {
        issues.push(RegistrationIssue::PasswordMismatch);
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "issue")]
pub enum ReviewIssue {
    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,
    #[error("review text is required")]
    MissingText,
}

/// Local gate for review submission. A zero (unset) rating is rejected
/// here, before any request is issued.
pub fn validate_review(payload: &ReviewPayload) -> Result<(), Vec<ReviewIssue>> {
    let mut issues = Vec::new();
    if payload.rating < MIN_RATING || payload.rating > MAX_RATING {
        issues.push(ReviewIssue::RatingOutOfRange);
    }
    if payload.text.trim().is_empty() {
        issues.push(ReviewIssue::MissingText);
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
