//! Identifier generation for finalized appointments.

/// Allocates unique record identifiers. Uniqueness across the process
/// lifetime is this collaborator's contract, not the form's.
pub trait IdGenerator: Send {
    /// Produce a fresh identifier.
    fn new_id(&self) -> String;
}

/// UUID v4 generator used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
