use serde::{Deserialize, Serialize};

use super::enums::DoctorStatus;

/// A doctor on staff. `scheduled_appointments` is a denormalized counter
/// from the fixture, not recomputed from Appointment rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub status: DoctorStatus,
    pub scheduled_appointments: u32,
}
