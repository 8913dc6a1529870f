//! Appointment draft models.

/// The fields captured by the appointment form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    /// Patient (animal) name
    Patient,
    /// Owner/client name
    Owner,
    /// Contact phone number
    Phone,
    /// Appointment date
    Date,
    /// Appointment time
    Time,
    /// Reported symptoms
    Symptoms,
}

impl DraftField {
    /// All fields, in form order.
    pub const ALL: [DraftField; 6] = [
        DraftField::Patient,
        DraftField::Owner,
        DraftField::Phone,
        DraftField::Date,
        DraftField::Time,
        DraftField::Symptoms,
    ];

    /// Canonical field name, as used over the FFI boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Patient => "patient",
            DraftField::Owner => "owner",
            DraftField::Phone => "phone",
            DraftField::Date => "date",
            DraftField::Time => "time",
            DraftField::Symptoms => "symptoms",
        }
    }

    /// Parse a canonical field name.
    pub fn parse(s: &str) -> Option<DraftField> {
        match s {
            "patient" => Some(DraftField::Patient),
            "owner" => Some(DraftField::Owner),
            "phone" => Some(DraftField::Phone),
            "date" => Some(DraftField::Date),
            "time" => Some(DraftField::Time),
            "symptoms" => Some(DraftField::Symptoms),
            _ => None,
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The in-progress, possibly invalid form state before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    /// Patient (animal) name
    pub patient: String,
    /// Owner/client name
    pub owner: String,
    /// Contact phone number (digits only once valid)
    pub phone: String,
    /// Appointment date as displayed in the form
    pub date: String,
    /// Appointment time, 24-hour HH:MM
    pub time: String,
    /// Reported symptoms
    pub symptoms: String,
}

impl AppointmentDraft {
    /// Create an all-empty draft.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Patient => &self.patient,
            DraftField::Owner => &self.owner,
            DraftField::Phone => &self.phone,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::Symptoms => &self.symptoms,
        }
    }

    /// Apply a field edit.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Patient => self.patient = value,
            DraftField::Owner => self.owner = value,
            DraftField::Phone => self.phone = value,
            DraftField::Date => self.date = value,
            DraftField::Time => self.time = value,
            DraftField::Symptoms => self.symptoms = value,
        }
    }

    /// Discard all entered values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when every field is empty after trimming. The UI uses this to
    /// show its "all fields are mandatory" dialog instead of per-field
    /// messages.
    pub fn is_blank(&self) -> bool {
        DraftField::ALL
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }
}
