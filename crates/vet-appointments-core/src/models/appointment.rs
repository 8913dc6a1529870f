//! Finalized appointment records.

use serde::{Deserialize, Serialize};

use super::draft::AppointmentDraft;

/// A finalized appointment. Created only by submitting a valid draft and
/// never mutated afterwards; the collection it lives in owns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// Unique record ID, allocated at submission time
    pub id: String,
    /// Patient (animal) name
    pub patient: String,
    /// Owner/client name
    pub owner: String,
    /// Contact phone number
    pub phone: String,
    /// Appointment date as captured in the form
    pub date: String,
    /// Appointment time, 24-hour HH:MM
    pub time: String,
    /// Reported symptoms
    pub symptoms: String,
    /// Creation timestamp
    pub created_at: String,
}

impl Appointment {
    /// Build a record from a draft. The submission path validates the draft
    /// before calling this.
    pub fn from_draft(id: String, draft: &AppointmentDraft) -> Self {
        Self {
            id,
            patient: draft.patient.clone(),
            owner: draft.owner.clone(),
            phone: draft.phone.clone(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            symptoms: draft.symptoms.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DraftField;

    fn make_draft() -> AppointmentDraft {
        let mut draft = AppointmentDraft::empty();
        draft.set(DraftField::Patient, "Rex".into());
        draft.set(DraftField::Owner, "Ana".into());
        draft.set(DraftField::Phone, "5551234".into());
        draft.set(DraftField::Date, "2024-05-01".into());
        draft.set(DraftField::Time, "10:30".into());
        draft.set(DraftField::Symptoms, "cough".into());
        draft
    }

    #[test]
    fn test_from_draft_copies_fields() {
        let appointment = Appointment::from_draft("id-1".into(), &make_draft());

        assert_eq!(appointment.id, "id-1");
        assert_eq!(appointment.patient, "Rex");
        assert_eq!(appointment.owner, "Ana");
        assert_eq!(appointment.phone, "5551234");
        assert_eq!(appointment.date, "2024-05-01");
        assert_eq!(appointment.time, "10:30");
        assert_eq!(appointment.symptoms, "cough");
        assert!(!appointment.created_at.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let appointment = Appointment::from_draft("id-1".into(), &make_draft());

        let json = serde_json::to_string(&appointment).unwrap();
        let back: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, appointment);
    }
}
