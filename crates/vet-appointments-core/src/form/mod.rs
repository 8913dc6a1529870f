//! Appointment capture form: draft editing and the submission contract.
//!
//! Flow: field edits / picker confirmations → validate → finalize →
//! append + persist → hide form → reset draft.

mod picker;
mod validate;

pub use picker::*;
pub use validate::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::book::AppointmentBook;
use crate::ids::IdGenerator;
use crate::models::{Appointment, AppointmentDraft, DraftField};
use crate::store::Store;

/// Submission errors.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The form is not open; the draft cannot be submitted.
    #[error("form is not open")]
    FormClosed,

    /// One or more fields failed validation.
    #[error("validation failed: {0}")]
    Invalid(FieldErrors),

    #[error("store error: {0}")]
    Store(#[from] crate::store::StoreError),
}

pub type SubmitResult<T> = Result<T, SubmitError>;

/// The appointment capture form. Owns the draft while it is open; the
/// collection and the visibility flag live in [`AppointmentBook`].
#[derive(Debug, Default)]
pub struct AppointmentForm {
    draft: AppointmentDraft,
}

impl AppointmentForm {
    /// Create a form with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current draft.
    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    /// Apply a field edit. No validation happens here; the draft may hold
    /// anything until submission.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    /// Date picker confirmation: store the long-form date and return the
    /// value the UI should display.
    pub fn apply_date_pick(&mut self, date: NaiveDate) -> String {
        let formatted = picker::format_long_date(date);
        self.draft.set(DraftField::Date, formatted.clone());
        formatted
    }

    /// Time picker confirmation: store 24-hour HH:MM and return the value
    /// the UI should display.
    pub fn apply_time_pick(&mut self, hour: u32, minute: u32) -> String {
        let formatted = picker::format_time(hour, minute);
        self.draft.set(DraftField::Time, formatted.clone());
        formatted
    }

    /// Discard all entered values.
    pub fn reset(&mut self) {
        self.draft.reset();
    }

    /// Validate the draft and, on success, build the finalized record with
    /// a freshly allocated id. No state is touched either way.
    pub fn finalize(&self, ids: &dyn IdGenerator) -> Result<Appointment, FieldErrors> {
        validate(&self.draft)?;
        Ok(Appointment::from_draft(ids.new_id(), &self.draft))
    }

    /// Submit the draft: validate, finalize, append to the collection and
    /// persist it, hide the form, reset the draft. Every side effect waits
    /// until all prior steps have succeeded; a validation or store failure
    /// leaves the collection, the flag, and the draft untouched.
    pub fn submit(
        &mut self,
        book: &mut AppointmentBook,
        store: &Store,
        ids: &dyn IdGenerator,
    ) -> SubmitResult<Appointment> {
        if !book.is_form_visible() {
            return Err(SubmitError::FormClosed);
        }

        let appointment = self.finalize(ids).map_err(SubmitError::Invalid)?;
        book.append(appointment.clone(), store)?;
        book.set_form_visible(false);
        self.reset();

        tracing::debug!(id = %appointment.id, "appointment submitted");
        Ok(appointment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UuidIdGenerator;

    fn fill_valid(form: &mut AppointmentForm) {
        form.set_field(DraftField::Patient, "Rex".into());
        form.set_field(DraftField::Owner, "Ana".into());
        form.set_field(DraftField::Phone, "5551234".into());
        form.set_field(DraftField::Date, "2024-05-01".into());
        form.set_field(DraftField::Time, "10:30".into());
        form.set_field(DraftField::Symptoms, "cough".into());
    }

    #[test]
    fn test_picker_confirmations_assign_fields() {
        let mut form = AppointmentForm::new();

        let date = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
        assert_eq!(form.apply_date_pick(date), "07 de mayo de 2024");
        assert_eq!(form.draft().date, "07 de mayo de 2024");

        assert_eq!(form.apply_time_pick(9, 5), "09:05");
        assert_eq!(form.draft().time, "09:05");
    }

    #[test]
    fn test_picker_values_pass_validation() {
        let mut form = AppointmentForm::new();
        fill_valid(&mut form);
        form.apply_date_pick(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap());
        form.apply_time_pick(23, 59);

        assert!(form.finalize(&UuidIdGenerator).is_ok());
    }

    #[test]
    fn test_finalize_rejects_invalid_draft() {
        let mut form = AppointmentForm::new();
        fill_valid(&mut form);
        form.set_field(DraftField::Phone, "12a45".into());

        let errors = form.finalize(&UuidIdGenerator).unwrap_err();
        assert_eq!(
            errors.get(DraftField::Phone),
            Some(ValidationError::InvalidFormat)
        );
        // Draft untouched by the failed finalize
        assert_eq!(form.draft().patient, "Rex");
    }

    #[test]
    fn test_finalize_allocates_id_and_copies_fields() {
        let mut form = AppointmentForm::new();
        fill_valid(&mut form);

        let appointment = form.finalize(&UuidIdGenerator).unwrap();
        assert_eq!(appointment.id.len(), 36);
        assert_eq!(appointment.patient, "Rex");
        assert_eq!(appointment.time, "10:30");
    }

    #[test]
    fn test_submit_requires_open_form() {
        let store = Store::open_in_memory().unwrap();
        let mut book = AppointmentBook::new();
        let mut form = AppointmentForm::new();
        fill_valid(&mut form);

        let result = form.submit(&mut book, &store, &UuidIdGenerator);
        assert!(matches!(result, Err(SubmitError::FormClosed)));
        assert_eq!(book.len(), 0);
        // Draft survives the rejected submit
        assert_eq!(form.draft().patient, "Rex");
    }

    #[test]
    fn test_submit_success_resets_and_hides() {
        let store = Store::open_in_memory().unwrap();
        let mut book = AppointmentBook::new();
        book.set_form_visible(true);
        let mut form = AppointmentForm::new();
        fill_valid(&mut form);

        let appointment = form.submit(&mut book, &store, &UuidIdGenerator).unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.appointments()[0], appointment);
        assert!(!book.is_form_visible());
        assert!(form.draft().is_blank());
    }

    #[test]
    fn test_submit_failure_mutates_nothing() {
        let store = Store::open_in_memory().unwrap();
        let mut book = AppointmentBook::new();
        book.set_form_visible(true);
        let mut form = AppointmentForm::new();
        fill_valid(&mut form);
        form.set_field(DraftField::Time, "25:00".into());

        let result = form.submit(&mut book, &store, &UuidIdGenerator);
        assert!(matches!(result, Err(SubmitError::Invalid(_))));

        assert_eq!(book.len(), 0);
        assert!(book.is_form_visible());
        assert_eq!(form.draft().time, "25:00");
        assert_eq!(store.load_snapshot().unwrap(), None);
    }

    #[test]
    fn test_second_submit_blocked_after_success() {
        let store = Store::open_in_memory().unwrap();
        let mut book = AppointmentBook::new();
        book.set_form_visible(true);
        let mut form = AppointmentForm::new();
        fill_valid(&mut form);

        form.submit(&mut book, &store, &UuidIdGenerator).unwrap();
        let second = form.submit(&mut book, &store, &UuidIdGenerator);

        assert!(matches!(second, Err(SubmitError::FormClosed)));
        assert_eq!(book.len(), 1);
    }
}
