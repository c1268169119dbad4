//! Static sample dataset standing in for a real clinical data source.
//!
//! The dataset is built once, never mutated, and queried with linear
//! filters — associations are by name string, mirroring the demo data
//! (a known data-integrity weakness of the fixture, not a contract).

use chrono::NaiveDate;

use crate::models::{Appointment, AppointmentStatus, Doctor, DoctorStatus, Patient};

/// The in-memory fixture tables: appointments, doctors, patients.
#[derive(Debug, Clone)]
pub struct FixtureData {
    pub appointments: Vec<Appointment>,
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

impl FixtureData {
    /// The demo dataset: 5 appointments, 4 doctors, 4 patients.
    pub fn sample() -> Self {
        let appointments = vec![
            Appointment {
                id: 1,
                patient_name: "Carlos Mendoza".into(),
                doctor_name: "Dr. Juan Pérez".into(),
                specialty: "Medicina General".into(),
                date: ymd(2023, 11, 15),
                time: "10:00".into(),
                status: AppointmentStatus::Confirmada,
            },
            Appointment {
                id: 2,
                patient_name: "Ana López".into(),
                doctor_name: "Dra. María García".into(),
                specialty: "Cardiología".into(),
                date: ymd(2023, 11, 15),
                time: "11:30".into(),
                status: AppointmentStatus::Confirmada,
            },
            Appointment {
                id: 3,
                patient_name: "Roberto Silva".into(),
                doctor_name: "Dr. Carlos Rodríguez".into(),
                specialty: "Dermatología".into(),
                date: ymd(2023, 11, 16),
                time: "09:00".into(),
                status: AppointmentStatus::Pendiente,
            },
            Appointment {
                id: 4,
                patient_name: "María Torres".into(),
                doctor_name: "Dr. Juan Pérez".into(),
                specialty: "Medicina General".into(),
                date: ymd(2023, 11, 16),
                time: "14:00".into(),
                status: AppointmentStatus::Confirmada,
            },
            Appointment {
                id: 5,
                patient_name: "Javier Ruiz".into(),
                doctor_name: "Dra. Laura Mendoza".into(),
                specialty: "Pediatría".into(),
                date: ymd(2023, 11, 17),
                time: "10:30".into(),
                status: AppointmentStatus::Confirmada,
            },
        ];

        let doctors = vec![
            Doctor {
                id: 1,
                name: "Dr. Juan Pérez".into(),
                specialty: "Medicina General".into(),
                email: "jperez@caverosalud.pe".into(),
                status: DoctorStatus::Activo,
                scheduled_appointments: 12,
            },
            Doctor {
                id: 2,
                name: "Dra. María García".into(),
                specialty: "Cardiología".into(),
                email: "mgarcia@caverosalud.pe".into(),
                status: DoctorStatus::Activo,
                scheduled_appointments: 8,
            },
            Doctor {
                id: 3,
                name: "Dr. Carlos Rodríguez".into(),
                specialty: "Dermatología".into(),
                email: "crodriguez@caverosalud.pe".into(),
                status: DoctorStatus::Activo,
                scheduled_appointments: 5,
            },
            Doctor {
                id: 4,
                name: "Dra. Laura Mendoza".into(),
                specialty: "Pediatría".into(),
                email: "lmendoza@caverosalud.pe".into(),
                status: DoctorStatus::Activo,
                scheduled_appointments: 10,
            },
        ];

        let patients = vec![
            Patient {
                id: 1,
                name: "Carlos Mendoza".into(),
                email: "carlos@ejemplo.com".into(),
                phone: "987654321".into(),
                last_appointment: ymd(2023, 10, 15),
            },
            Patient {
                id: 2,
                name: "Ana López".into(),
                email: "ana@ejemplo.com".into(),
                phone: "987654322".into(),
                last_appointment: ymd(2023, 10, 20),
            },
            Patient {
                id: 3,
                name: "Roberto Silva".into(),
                email: "roberto@ejemplo.com".into(),
                phone: "987654323".into(),
                last_appointment: ymd(2023, 11, 5),
            },
            Patient {
                id: 4,
                name: "María Torres".into(),
                email: "maria@ejemplo.com".into(),
                phone: "987654324".into(),
                last_appointment: ymd(2023, 11, 10),
            },
        ];

        Self {
            appointments,
            doctors,
            patients,
        }
    }

    // ── Queries ──────────────────────────────────────────

    /// All appointments assigned to a doctor, matched by name.
    pub fn appointments_for_doctor(&self, doctor_name: &str) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|apt| apt.doctor_name == doctor_name)
            .collect()
    }

    /// All appointments booked by a patient, matched by name.
    pub fn appointments_for_patient(&self, patient_name: &str) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|apt| apt.patient_name == patient_name)
            .collect()
    }

    /// All appointments on an exact calendar date.
    pub fn appointments_on(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|apt| apt.is_on(date))
            .collect()
    }

    /// Look up a doctor by name.
    pub fn doctor_by_name(&self, name: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.name == name)
    }

    /// Look up a patient by name.
    pub fn patient_by_name(&self, name: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_cardinalities() {
        let fx = FixtureData::sample();
        assert_eq!(fx.appointments.len(), 5);
        assert_eq!(fx.doctors.len(), 4);
        assert_eq!(fx.patients.len(), 4);
    }

    #[test]
    fn appointments_for_doctor_matches_by_name() {
        let fx = FixtureData::sample();
        let apts = fx.appointments_for_doctor("Dr. Juan Pérez");
        assert_eq!(apts.len(), 2);
        assert!(apts.iter().all(|a| a.doctor_name == "Dr. Juan Pérez"));

        assert!(fx.appointments_for_doctor("Dr. Nadie").is_empty());
    }

    #[test]
    fn appointments_for_patient_matches_by_name() {
        let fx = FixtureData::sample();
        let apts = fx.appointments_for_patient("Ana López");
        assert_eq!(apts.len(), 1);
        assert_eq!(apts[0].specialty, "Cardiología");
    }

    #[test]
    fn appointments_on_exact_date() {
        let fx = FixtureData::sample();
        assert_eq!(fx.appointments_on(ymd(2023, 11, 15)).len(), 2);
        assert_eq!(fx.appointments_on(ymd(2023, 11, 16)).len(), 2);
        assert_eq!(fx.appointments_on(ymd(2023, 11, 17)).len(), 1);
        assert!(fx.appointments_on(ymd(2024, 1, 1)).is_empty());
    }

    #[test]
    fn doctor_and_patient_lookup() {
        let fx = FixtureData::sample();
        assert_eq!(
            fx.doctor_by_name("Dra. Laura Mendoza").unwrap().specialty,
            "Pediatría"
        );
        assert_eq!(
            fx.patient_by_name("Roberto Silva").unwrap().phone,
            "987654323"
        );
        assert!(fx.doctor_by_name("Dr. Nadie").is_none());
    }
}
