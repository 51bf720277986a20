//! Form sanitization and validation.
//!
//! Raw form bodies are first sanitized into a draft (trimmed, HTML-escaped),
//! then every `validator` rule on the draft runs. Nothing short-circuits: a
//! form comes back with all of its problems at once, in field order.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// ASCII letters and digits only, at least one character
pub static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Za-z]+$").expect("static regex"));

/// A single failed rule, ready to be listed above a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Sanitized form input, not yet persisted
pub trait Draft: Validate {
    /// Field names in form order; errors are reported in this order
    const FIELDS: &'static [&'static str];
}

/// Raw form body that knows how to sanitize itself into a draft
pub trait FormInput {
    type Draft: Draft;

    fn sanitize(self) -> Self::Draft;
}

/// Outcome of sanitizing and validating one form submission
#[derive(Debug)]
pub struct Submission<D> {
    pub draft: D,
    pub errors: Vec<FieldError>,
}

impl<D> Submission<D> {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Sanitize a form and run every rule on the resulting draft
pub fn check<F: FormInput>(form: F) -> Submission<F::Draft> {
    let draft = form.sanitize();
    let errors = match draft.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_errors(&errors, <F::Draft as Draft>::FIELDS),
    };
    Submission { draft, errors }
}

/// Flatten `validator` errors into a list ordered by `fields`
pub fn collect_errors(errors: &ValidationErrors, fields: &[&str]) -> Vec<FieldError> {
    let mut collected: Vec<(usize, FieldError)> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        let position = fields
            .iter()
            .position(|f| *f == field)
            .unwrap_or(fields.len());
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {}", field.replace('_', " ")));
            collected.push((position, FieldError::new(field.clone(), message)));
        }
    }
    // stable: keeps rule order inside a field
    collected.sort_by_key(|(position, _)| *position);
    collected.into_iter().map(|(_, e)| e).collect()
}

/// Build a rule failure carrying a fixed human-readable message
pub fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// HTML-escape the characters `& < > " ' / \ ``
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

/// Trim then escape
pub fn sanitize(input: &str) -> String {
    escape(input.trim())
}

/// Parse an ISO 8601 date (`2024-03-01`) or timestamp (`2024-03-01T10:00:00Z`)
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))
}

/// Empty means absent; anything else must parse
pub fn parse_optional_date(input: &str) -> Option<NaiveDate> {
    if input.trim().is_empty() {
        None
    } else {
        parse_date(input)
    }
}

/// Whether an optional date field passes the checkFalsy rule
pub fn is_valid_optional_date(input: &str) -> bool {
    input.trim().is_empty() || parse_date(input).is_some()
}
