use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;

/// A scheduled appointment. Associations to doctors and patients are by
/// name string, matching the fixture data, not by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub patient_name: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Exact calendar-date match, no timezone normalization.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
