//! Field rules applied to manually entered leads.

use crate::errors::{AppError, AppResult};
use crate::models::NewLead;
use regex::Regex;
use std::sync::LazyLock;

pub const PHONE_MIN_LENGTH: usize = 10;
pub const PHONE_MAX_LENGTH: usize = 15;
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("static regex is valid"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex is valid"));

fn required(label: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required"))
    } else {
        None
    }
}

pub fn check_name(value: &str) -> Option<String> {
    if let Some(msg) = required("name", value) {
        return Some(msg);
    }
    let len = value.chars().count();
    if len < NAME_MIN_LENGTH {
        return Some(format!("Name must be at least {NAME_MIN_LENGTH} characters"));
    }
    if len > NAME_MAX_LENGTH {
        return Some(format!("Name must be less than {NAME_MAX_LENGTH} characters"));
    }
    None
}

pub fn check_email(value: &str) -> Option<String> {
    if let Some(msg) = required("email", value) {
        return Some(msg);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some("Invalid email format".into());
    }
    if value.chars().count() > EMAIL_MAX_LENGTH {
        return Some(format!("Email must be less than {EMAIL_MAX_LENGTH} characters"));
    }
    None
}

pub fn check_phone(value: &str) -> Option<String> {
    if let Some(msg) = required("phone", value) {
        return Some(msg);
    }
    if !PHONE_PATTERN.is_match(value) {
        return Some("Invalid phone number format".into());
    }
    let len = value.chars().count();
    if !(PHONE_MIN_LENGTH..=PHONE_MAX_LENGTH).contains(&len) {
        return Some(format!(
            "Phone number must be between {PHONE_MIN_LENGTH} and {PHONE_MAX_LENGTH} characters"
        ));
    }
    None
}

pub fn check_company(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if v.chars().count() > NAME_MAX_LENGTH => Some(format!(
            "Company name must be less than {NAME_MAX_LENGTH} characters"
        )),
        _ => None,
    }
}

/// Validate every field; all problems are reported together.
pub fn validate_new_lead(lead: &NewLead) -> AppResult<()> {
    let problems: Vec<String> = [
        check_name(&lead.name),
        check_company(lead.company.as_deref()),
        check_phone(&lead.phone),
        check_email(&lead.email),
    ]
    .into_iter()
    .flatten()
    .collect();

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join("; ")))
    }
}
