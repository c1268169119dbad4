pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod patient;

pub use appointment::Appointment;
pub use doctor::Doctor;
pub use enums::{AppointmentStatus, DoctorStatus, Role};
pub use patient::Patient;

/// Errors from model wire parsing.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid {field} value: '{value}'")]
    InvalidEnum { field: String, value: String },
}
