//! Vet Appointments Core Library
//!
//! Local-first appointment capture for a veterinary clinic mobile app.
//!
//! # Architecture
//!
//! ```text
//! Field edits / picker confirmations
//!                     │
//!            [AppointmentDraft]
//!                     │
//!                  validate ──────► FieldErrors (per-field, for display)
//!                     │ ok
//!          finalize (id allocation)
//!                     │
//!      ┌──────────────▼──────────────┐
//!      │     Append to collection    │
//!      │   copy + persist + swap     │
//!      └──────────────┬──────────────┘
//!                     │
//!          hide form, reset draft
//! ```
//!
//! # Core Principle
//!
//! **Side effects only on a fully valid draft.** A failed validation or a
//! failed store write leaves the collection, the visibility flag, and the
//! draft exactly as they were.
//!
//! # Modules
//!
//! - [`store`]: SQLite-backed snapshot store
//! - [`models`]: Domain types (Appointment, AppointmentDraft, DraftField)
//! - [`form`]: Draft editing, validation, submission
//! - [`book`]: The appointment collection and visibility flag
//! - [`ids`]: Identifier generation

pub mod book;
pub mod form;
pub mod ids;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use book::AppointmentBook;
pub use form::{AppointmentForm, FieldErrors, SubmitError, ValidationError};
pub use ids::{IdGenerator, UuidIdGenerator};
pub use models::{Appointment, AppointmentDraft, DraftField};
pub use store::Store;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VetAppointmentsError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Form is not open")]
    FormClosed,
}

impl From<store::StoreError> for VetAppointmentsError {
    fn from(e: store::StoreError) -> Self {
        match e {
            store::StoreError::Json(e) => {
                VetAppointmentsError::SerializationError(e.to_string())
            }
            other => VetAppointmentsError::DatabaseError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for VetAppointmentsError {
    fn from(e: serde_json::Error) -> Self {
        VetAppointmentsError::SerializationError(e.to_string())
    }
}

impl From<form::SubmitError> for VetAppointmentsError {
    fn from(e: form::SubmitError) -> Self {
        match e {
            form::SubmitError::FormClosed => VetAppointmentsError::FormClosed,
            form::SubmitError::Invalid(errors) => {
                VetAppointmentsError::ValidationFailed(errors.to_string())
            }
            form::SubmitError::Store(e) => e.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for VetAppointmentsError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        VetAppointmentsError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create the appointment store at the given path and load the
/// persisted collection.
#[uniffi::export]
pub fn open_appointments(path: String) -> Result<Arc<VetAppointmentsCore>, VetAppointmentsError> {
    let store = Store::open(&path)?;
    VetAppointmentsCore::with_store(store)
}

/// Create an in-memory instance (for testing).
#[uniffi::export]
pub fn open_appointments_in_memory() -> Result<Arc<VetAppointmentsCore>, VetAppointmentsError> {
    let store = Store::open_in_memory()?;
    VetAppointmentsCore::with_store(store)
}

// =========================================================================
// Main API Object
// =========================================================================

struct CoreState {
    store: Store,
    book: AppointmentBook,
    form: AppointmentForm,
    ids: Box<dyn IdGenerator>,
}

/// Thread-safe core state wrapper for FFI.
#[derive(uniffi::Object)]
pub struct VetAppointmentsCore {
    state: Arc<Mutex<CoreState>>,
}

impl VetAppointmentsCore {
    fn with_store(store: Store) -> Result<Arc<Self>, VetAppointmentsError> {
        let book = AppointmentBook::load(&store)?;
        tracing::info!(count = book.len(), "appointment store opened");
        Ok(Arc::new(Self {
            state: Arc::new(Mutex::new(CoreState {
                store,
                book,
                form: AppointmentForm::new(),
                ids: Box::new(UuidIdGenerator),
            })),
        }))
    }
}

#[uniffi::export]
impl VetAppointmentsCore {
    // =========================================================================
    // Collection Operations
    // =========================================================================

    /// List all finalized appointments, oldest first.
    pub fn appointments(&self) -> Result<Vec<FfiAppointment>, VetAppointmentsError> {
        let state = self.state.lock()?;
        Ok(state
            .book
            .appointments()
            .iter()
            .cloned()
            .map(|a| a.into())
            .collect())
    }

    /// Number of finalized appointments.
    pub fn appointment_count(&self) -> Result<u32, VetAppointmentsError> {
        let state = self.state.lock()?;
        Ok(state.book.len() as u32)
    }

    /// Get an appointment by id.
    pub fn get_appointment(
        &self,
        id: String,
    ) -> Result<Option<FfiAppointment>, VetAppointmentsError> {
        let state = self.state.lock()?;
        Ok(state.book.get(&id).cloned().map(|a| a.into()))
    }

    /// Delete an appointment by id and persist the shrunk collection.
    /// Returns whether a record was removed.
    pub fn delete_appointment(&self, id: String) -> Result<bool, VetAppointmentsError> {
        let mut state = self.state.lock()?;
        let CoreState { store, book, .. } = &mut *state;
        Ok(book.delete(&id, store)?)
    }

    // =========================================================================
    // Form Visibility
    // =========================================================================

    /// Whether the capture form is currently shown.
    pub fn is_form_visible(&self) -> Result<bool, VetAppointmentsError> {
        let state = self.state.lock()?;
        Ok(state.book.is_form_visible())
    }

    /// Show the capture form.
    pub fn open_form(&self) -> Result<(), VetAppointmentsError> {
        let mut state = self.state.lock()?;
        state.book.set_form_visible(true);
        Ok(())
    }

    /// Hide the capture form and discard the draft.
    pub fn cancel_form(&self) -> Result<(), VetAppointmentsError> {
        let mut state = self.state.lock()?;
        state.book.set_form_visible(false);
        state.form.reset();
        Ok(())
    }

    // =========================================================================
    // Draft Operations
    // =========================================================================

    /// Apply a field edit. Field names: patient, owner, phone, date, time,
    /// symptoms.
    pub fn set_field(&self, field: String, value: String) -> Result<(), VetAppointmentsError> {
        let field = parse_field(&field)?;
        let mut state = self.state.lock()?;
        state.form.set_field(field, value);
        Ok(())
    }

    /// Date picker confirmation. Takes the picked instant as Unix
    /// milliseconds, stores the formatted date, and returns it for display.
    pub fn confirm_date_pick(&self, timestamp_ms: i64) -> Result<String, VetAppointmentsError> {
        let picked = form::local_datetime_from_millis(timestamp_ms).ok_or_else(|| {
            VetAppointmentsError::InvalidInput(format!("Invalid timestamp: {}", timestamp_ms))
        })?;
        let mut state = self.state.lock()?;
        Ok(state.form.apply_date_pick(picked.date_naive()))
    }

    /// Time picker confirmation. Takes the picked instant as Unix
    /// milliseconds, stores 24-hour HH:MM, and returns it for display.
    pub fn confirm_time_pick(&self, timestamp_ms: i64) -> Result<String, VetAppointmentsError> {
        let picked = form::local_datetime_from_millis(timestamp_ms).ok_or_else(|| {
            VetAppointmentsError::InvalidInput(format!("Invalid timestamp: {}", timestamp_ms))
        })?;
        use chrono::Timelike;
        let mut state = self.state.lock()?;
        Ok(state.form.apply_time_pick(picked.hour(), picked.minute()))
    }

    /// Read the current draft.
    pub fn draft(&self) -> Result<FfiDraft, VetAppointmentsError> {
        let state = self.state.lock()?;
        Ok(state.form.draft().into())
    }

    /// Validate the current draft without submitting. An empty result means
    /// the draft is valid; otherwise one entry per offending field.
    pub fn validate_draft(&self) -> Result<Vec<FfiFieldError>, VetAppointmentsError> {
        let state = self.state.lock()?;
        match form::validate(state.form.draft()) {
            Ok(()) => Ok(Vec::new()),
            Err(errors) => Ok(errors
                .iter()
                .map(|(field, error)| FfiFieldError {
                    field: field.as_str().to_string(),
                    message: error.to_string(),
                })
                .collect()),
        }
    }

    /// Submit the current draft. On success the new appointment is
    /// appended and persisted, the form hides, and the draft resets.
    pub fn submit(&self) -> Result<FfiAppointment, VetAppointmentsError> {
        let mut state = self.state.lock()?;
        let CoreState {
            store,
            book,
            form,
            ids,
        } = &mut *state;
        let appointment = form.submit(book, store, ids.as_ref())?;
        Ok(appointment.into())
    }
}

fn parse_field(field: &str) -> Result<DraftField, VetAppointmentsError> {
    DraftField::parse(field)
        .ok_or_else(|| VetAppointmentsError::InvalidInput(format!("Unknown field: {}", field)))
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe appointment record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub patient: String,
    pub owner: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub symptoms: String,
    pub created_at: String,
}

impl From<Appointment> for FfiAppointment {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            patient: appointment.patient,
            owner: appointment.owner,
            phone: appointment.phone,
            date: appointment.date,
            time: appointment.time,
            symptoms: appointment.symptoms,
            created_at: appointment.created_at,
        }
    }
}

/// FFI-safe draft snapshot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDraft {
    pub patient: String,
    pub owner: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub symptoms: String,
    pub is_blank: bool,
}

impl From<&AppointmentDraft> for FfiDraft {
    fn from(draft: &AppointmentDraft) -> Self {
        Self {
            patient: draft.patient.clone(),
            owner: draft.owner.clone(),
            phone: draft.phone.clone(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            symptoms: draft.symptoms.clone(),
            is_blank: draft.is_blank(),
        }
    }
}

/// FFI-safe field validation failure.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFieldError {
    pub field: String,
    pub message: String,
}
