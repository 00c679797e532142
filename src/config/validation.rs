//! Configuration validation utilities

use super::Login;
use anyhow::{Result, anyhow};
use std::collections::HashSet;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Login name is empty
    EmptyLoginName,
    /// Login URL is empty
    EmptyLoginUrl(String),
    /// Login URL is not an http(s) URL
    InvalidLoginUrl(String, String),
    /// Login token is empty
    EmptyToken(String),
    /// Two logins share a name
    DuplicateLoginName(String),
    /// More than one login is marked as default
    MultipleDefaults,
    /// A column width is too narrow to hold the ellipsis
    ColumnTooNarrow(&'static str, usize),
    /// Ticket prefix is empty or contains brackets
    InvalidTicketPrefix(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyLoginName => write!(f, "Login name cannot be empty"),
            ValidationError::EmptyLoginUrl(name) => {
                write!(f, "Login '{}' URL cannot be empty", name)
            }
            ValidationError::InvalidLoginUrl(name, url) => {
                write!(f, "Login '{}' has invalid URL: '{}'", name, url)
            }
            ValidationError::EmptyToken(name) => {
                write!(f, "Login '{}' token cannot be empty", name)
            }
            ValidationError::DuplicateLoginName(name) => {
                write!(f, "Duplicate login name: '{}'", name)
            }
            ValidationError::MultipleDefaults => {
                write!(f, "Only one login can be marked as default")
            }
            ValidationError::ColumnTooNarrow(column, width) => {
                write!(f, "Column '{}' width {} must be at least 4", column, width)
            }
            ValidationError::InvalidTicketPrefix(prefix) => {
                write!(f, "Invalid ticket prefix: '{}'", prefix)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a single login
pub fn validate_login(login: &Login) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if login.name.trim().is_empty() {
        errors.push(ValidationError::EmptyLoginName);
    }

    if login.url.trim().is_empty() {
        errors.push(ValidationError::EmptyLoginUrl(login.name.clone()));
    } else if !(login.url.starts_with("https://") || login.url.starts_with("http://")) {
        errors.push(ValidationError::InvalidLoginUrl(
            login.name.clone(),
            login.url.clone(),
        ));
    }

    if login.token.trim().is_empty() {
        errors.push(ValidationError::EmptyToken(login.name.clone()));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a list of logins, including cross-login rules
pub fn validate_logins(logins: &[Login]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for login in logins {
        if let Err(mut login_errors) = validate_login(login) {
            errors.append(&mut login_errors);
        }
        if !seen.insert(login.name.as_str()) {
            errors.push(ValidationError::DuplicateLoginName(login.name.clone()));
        }
    }

    if logins.iter().filter(|login| login.default).count() > 1 {
        errors.push(ValidationError::MultipleDefaults);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a column width
pub fn validate_width(column: &'static str, width: usize) -> Result<(), ValidationError> {
    if width < 4 {
        return Err(ValidationError::ColumnTooNarrow(column, width));
    }
    Ok(())
}

/// Validate a ticket prefix
pub fn validate_ticket_prefix(prefix: &str) -> Result<(), ValidationError> {
    if prefix.trim().is_empty() || prefix.contains(['[', ']']) {
        return Err(ValidationError::InvalidTicketPrefix(prefix.to_string()));
    }
    Ok(())
}

/// Convert validation errors to anyhow::Error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Configuration validation failed:\n  {}", messages.join("\n  "))
}

/// Validate logins and return an anyhow result
pub fn ensure_valid_logins(logins: &[Login]) -> Result<()> {
    validate_logins(logins).map_err(validation_errors_to_anyhow)
}
