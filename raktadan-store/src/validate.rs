//! Client-side form validation.
//!
//! Validation runs before any write leaves the device; a rejected form
//! never reaches the network. Errors carry the offending field name so
//! a form can render them inline.

use chrono::NaiveDate;
use raktadan_client::{BloodRequestSubmission, ContactSubmission, DonorSubmission};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Bangladeshi mobile numbers: 11 digits, operator prefix 013-019.
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^01[3-9]\d{8}$").expect("mobile pattern is valid"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Result type for form validation.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// One failed rule, tied to the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Whether a string is a valid mobile number for submission.
#[must_use]
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

/// Validates a donor registration form.
pub fn validate_donor(submission: &DonorSubmission, today: NaiveDate) -> ValidationResult {
    let mut errors = Vec::new();

    if submission.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "name is required"));
    }
    if !(18..=60).contains(&submission.age) {
        errors.push(ValidationError::new(
            "age",
            "age must be between 18 and 60",
        ));
    }
    if submission.address.trim().is_empty() {
        errors.push(ValidationError::new("address", "address is required"));
    }
    if !is_valid_mobile(&submission.mobile) {
        errors.push(ValidationError::new(
            "mobile",
            "enter an 11-digit mobile number starting with 013-019",
        ));
    }
    if let Some(email) = submission.email.as_deref() {
        if !email.is_empty() && !EMAIL_RE.is_match(email) {
            errors.push(ValidationError::new("email", "enter a valid email address"));
        }
    }
    if let Some(last) = submission.last_donation_date {
        if last > today {
            errors.push(ValidationError::new(
                "last_donation_date",
                "last donation date cannot be in the future",
            ));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validates a blood request form.
pub fn validate_blood_request(submission: &BloodRequestSubmission) -> ValidationResult {
    let mut errors = Vec::new();

    if submission.patient_name.trim().is_empty() {
        errors.push(ValidationError::new("patient_name", "patient name is required"));
    }
    if submission.hospital_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "hospital_name",
            "hospital name is required",
        ));
    }
    if submission.bags_needed == 0 {
        errors.push(ValidationError::new(
            "bags_needed",
            "at least one bag must be requested",
        ));
    }
    if submission.contact_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "contact_name",
            "contact name is required",
        ));
    }
    if !is_valid_mobile(&submission.contact_mobile) {
        errors.push(ValidationError::new(
            "contact_mobile",
            "enter an 11-digit mobile number starting with 013-019",
        ));
    }
    if let Some(mobile) = submission.emergency_contact_mobile.as_deref() {
        if !mobile.is_empty() && !is_valid_mobile(mobile) {
            errors.push(ValidationError::new(
                "emergency_contact_mobile",
                "enter an 11-digit mobile number starting with 013-019",
            ));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validates a contact-form message.
pub fn validate_contact(submission: &ContactSubmission) -> ValidationResult {
    let mut errors = Vec::new();

    if submission.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "name is required"));
    }
    if !is_valid_mobile(&submission.mobile) {
        errors.push(ValidationError::new(
            "mobile",
            "enter an 11-digit mobile number starting with 013-019",
        ));
    }
    if submission.message.trim().is_empty() {
        errors.push(ValidationError::new("message", "message is required"));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
