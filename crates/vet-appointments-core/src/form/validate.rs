//! Field validation for the appointment form.
//!
//! Validation is pure and total: every field is checked independently and
//! every failure is collected, so the UI can surface a message next to each
//! offending field in one pass.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::models::{AppointmentDraft, DraftField};

use super::picker;

/// A single field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field is missing")]
    RequiredFieldMissing,

    #[error("phone number must contain only digits")]
    InvalidFormat,

    #[error("date is not a valid calendar date")]
    InvalidDate,

    #[error("time must be HH:MM with hour 0-23 and minute 0-59")]
    InvalidTime,
}

/// Association of field name to one validation error, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<DraftField, ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error recorded for a field, if any.
    pub fn get(&self, field: DraftField) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, ValidationError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: DraftField, error: ValidationError) {
        self.errors.insert(field, error);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, error)?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a draft. Returns `Ok(())` or the full field-error mapping;
/// never panics and touches no state.
pub fn validate(draft: &AppointmentDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for field in DraftField::ALL {
        let value = draft.get(field);
        let result = match field {
            DraftField::Patient | DraftField::Owner | DraftField::Symptoms => {
                validate_required(value)
            }
            DraftField::Phone => validate_phone(value),
            DraftField::Date => validate_date(value),
            DraftField::Time => validate_time(value),
        };
        if let Err(error) = result {
            errors.insert(field, error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Non-empty after trimming.
fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::RequiredFieldMissing)
    } else {
        Ok(())
    }
}

/// Required, and every character a decimal digit.
fn validate_phone(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat)
    }
}

/// Required, and parseable into a valid calendar date.
fn validate_date(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    match picker::parse_date(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::InvalidDate),
    }
}

/// Required, and of the form H:M with hour in [0,24) and minute in [0,60).
/// Single-digit parts are accepted ("10:5" reads as 10:05).
fn validate_time(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;

    let mut parts = value.split(':');
    let (hour, minute) = match (parts.next(), parts.next(), parts.next()) {
        (Some(hour), Some(minute), None) => (hour, minute),
        _ => return Err(ValidationError::InvalidTime),
    };

    let hour: u32 = hour.parse().map_err(|_| ValidationError::InvalidTime)?;
    let minute: u32 = minute.parse().map_err(|_| ValidationError::InvalidTime)?;

    if hour < 24 && minute < 60 {
        Ok(())
    } else {
        Err(ValidationError::InvalidTime)
    }
}
