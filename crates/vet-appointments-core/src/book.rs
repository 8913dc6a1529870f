//! The appointment collection and form visibility state.

use crate::models::Appointment;
use crate::store::{Store, StoreResult};

/// Owns the ordered list of finalized appointments and the "show form"
/// flag. Mutations that change the collection persist the new snapshot
/// before swapping it in, so a failed write leaves the collection as it was.
#[derive(Debug, Default)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
    show_form: bool,
}

impl AppointmentBook {
    /// Create an empty book with the form hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from the persisted snapshot. A missing snapshot is an empty
    /// collection; a corrupt one surfaces as a serialization error.
    pub fn load(store: &Store) -> StoreResult<Self> {
        let appointments = match store.load_snapshot()? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        Ok(Self {
            appointments,
            show_form: false,
        })
    }

    /// The finalized records, oldest first.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Find a record by id.
    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn is_form_visible(&self) -> bool {
        self.show_form
    }

    pub fn set_form_visible(&mut self, visible: bool) {
        self.show_form = visible;
    }

    /// Append one record and persist. The new collection is built as a copy
    /// and swapped in only after the store write succeeds.
    pub fn append(&mut self, appointment: Appointment, store: &Store) -> StoreResult<()> {
        let mut next = self.appointments.clone();
        next.push(appointment);
        store.save_snapshot(&serde_json::to_string(&next)?)?;
        self.appointments = next;
        Ok(())
    }

    /// Remove a record by id and persist. Returns whether a record was
    /// removed; an unknown id writes nothing.
    pub fn delete(&mut self, id: &str, store: &Store) -> StoreResult<bool> {
        let mut next = self.appointments.clone();
        next.retain(|a| a.id != id);
        if next.len() == self.appointments.len() {
            return Ok(false);
        }
        store.save_snapshot(&serde_json::to_string(&next)?)?;
        self.appointments = next;
        tracing::debug!(id, "appointment deleted");
        Ok(true)
    }
}
