//! Role dashboards — pure projections over the fixture dataset.
//!
//! Each builder takes the fixture, the current date, and (for doctor and
//! patient) an identity, and returns a plain struct. The controller owns
//! rendering; keeping the aggregates here makes them testable without
//! any UI surface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::fixtures::FixtureData;
use crate::models::{Appointment, Doctor, Patient};

/// How many appointments the admin "recent" list shows.
pub const ADMIN_RECENT_LIMIT: usize = 5;
/// How many non-today appointments the doctor "upcoming" list shows.
pub const DOCTOR_UPCOMING_LIMIT: usize = 3;
/// Availability is a fixed demo figure, not computed from the schedule.
pub const DOCTOR_AVAILABILITY: &str = "85%";

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// Aggregate counts for the admin header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_appointments: u32,
    pub total_doctors: u32,
    pub total_patients: u32,
    pub today_appointments: u32,
}

/// Admin view: header stats, the first few appointments, all doctors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub stats: AdminStats,
    pub recent_appointments: Vec<Appointment>,
    pub doctors: Vec<Doctor>,
}

/// Build the admin projection. "Today" is an exact date match.
pub fn build_admin(fixture: &FixtureData, today: NaiveDate) -> AdminDashboard {
    let stats = AdminStats {
        total_appointments: fixture.appointments.len() as u32,
        total_doctors: fixture.doctors.len() as u32,
        total_patients: fixture.patients.len() as u32,
        today_appointments: fixture.appointments_on(today).len() as u32,
    };

    AdminDashboard {
        stats,
        recent_appointments: fixture
            .appointments
            .iter()
            .take(ADMIN_RECENT_LIMIT)
            .cloned()
            .collect(),
        doctors: fixture.doctors.clone(),
    }
}

// ---------------------------------------------------------------------------
// Doctor
// ---------------------------------------------------------------------------

/// Header stats for one doctor's view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorStats {
    pub appointments_today: u32,
    pub appointments_total: u32,
    pub distinct_patients: u32,
    pub availability: String,
}

/// One doctor's view: stats plus today/upcoming appointment lists.
/// `upcoming_appointments` is capped at [`DOCTOR_UPCOMING_LIMIT`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorDashboard {
    pub doctor: Doctor,
    pub stats: DoctorStats,
    pub today_appointments: Vec<Appointment>,
    pub upcoming_appointments: Vec<Appointment>,
}

/// Build one doctor's projection. Today/upcoming partition the doctor's
/// appointments by exact date match; upcoming is anything not today.
pub fn build_doctor(fixture: &FixtureData, doctor: &Doctor, today: NaiveDate) -> DoctorDashboard {
    let matched = fixture.appointments_for_doctor(&doctor.name);

    let distinct_patients = matched
        .iter()
        .map(|apt| apt.patient_name.as_str())
        .collect::<HashSet<_>>()
        .len() as u32;

    let today_appointments: Vec<Appointment> = matched
        .iter()
        .filter(|apt| apt.is_on(today))
        .map(|apt| (*apt).clone())
        .collect();

    let upcoming_appointments: Vec<Appointment> = matched
        .iter()
        .filter(|apt| !apt.is_on(today))
        .take(DOCTOR_UPCOMING_LIMIT)
        .map(|apt| (*apt).clone())
        .collect();

    let stats = DoctorStats {
        appointments_today: today_appointments.len() as u32,
        appointments_total: matched.len() as u32,
        distinct_patients,
        availability: DOCTOR_AVAILABILITY.to_string(),
    };

    DoctorDashboard {
        doctor: doctor.clone(),
        stats,
        today_appointments,
        upcoming_appointments,
    }
}

// ---------------------------------------------------------------------------
// Patient
// ---------------------------------------------------------------------------

/// One patient's view: identity plus every matching appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientDashboard {
    pub patient: Patient,
    pub appointments: Vec<Appointment>,
}

/// Build one patient's projection: all appointments matched by name,
/// possibly empty.
pub fn build_patient(fixture: &FixtureData, patient: &Patient) -> PatientDashboard {
    PatientDashboard {
        patient: patient.clone(),
        appointments: fixture
            .appointments_for_patient(&patient.name)
            .into_iter()
            .cloned()
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentStatus, DoctorStatus};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, d).unwrap()
    }

    #[test]
    fn admin_stats_match_fixture_cardinalities() {
        let fx = FixtureData::sample();
        let dash = build_admin(&fx, day(15));

        assert_eq!(dash.stats.total_appointments, 5);
        assert_eq!(dash.stats.total_doctors, 4);
        assert_eq!(dash.stats.total_patients, 4);
        assert_eq!(dash.stats.today_appointments, 2);
    }

    #[test]
    fn admin_today_count_zero_off_schedule() {
        let fx = FixtureData::sample();
        let dash = build_admin(&fx, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(dash.stats.today_appointments, 0);
    }

    #[test]
    fn admin_recent_list_is_fixture_order_capped_at_five() {
        let fx = FixtureData::sample();
        let dash = build_admin(&fx, day(15));

        assert_eq!(dash.recent_appointments.len(), 5);
        let ids: Vec<u32> = dash.recent_appointments.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(dash.doctors.len(), 4);
    }

    #[test]
    fn doctor_today_and_upcoming_partition_schedule() {
        let fx = FixtureData::sample();
        let doctor = fx.doctor_by_name("Dr. Juan Pérez").unwrap().clone();
        let dash = build_doctor(&fx, &doctor, day(15));

        // 2023-11-15 appointment is today; 2023-11-16 is upcoming.
        assert_eq!(dash.stats.appointments_total, 2);
        assert_eq!(dash.stats.appointments_today, 1);
        assert_eq!(dash.today_appointments.len(), 1);
        assert_eq!(dash.upcoming_appointments.len(), 1);

        // Partition: no appointment in both lists, union covers all.
        let today_ids: Vec<u32> = dash.today_appointments.iter().map(|a| a.id).collect();
        let upcoming_ids: Vec<u32> = dash.upcoming_appointments.iter().map(|a| a.id).collect();
        assert!(today_ids.iter().all(|id| !upcoming_ids.contains(id)));
        assert_eq!(
            today_ids.len() + upcoming_ids.len(),
            fx.appointments_for_doctor(&doctor.name).len()
        );
    }

    #[test]
    fn doctor_distinct_patients_counts_unique_names() {
        let fx = FixtureData::sample();
        let doctor = fx.doctor_by_name("Dr. Juan Pérez").unwrap().clone();
        let dash = build_doctor(&fx, &doctor, day(15));

        // Carlos Mendoza and María Torres.
        assert_eq!(dash.stats.distinct_patients, 2);
        assert_eq!(dash.stats.availability, "85%");
    }

    #[test]
    fn doctor_with_no_appointments_is_all_zero() {
        let fx = FixtureData::sample();
        let doctor = Doctor {
            id: 99,
            name: "Dr. Nadie".into(),
            specialty: "Neurología".into(),
            email: "nadie@caverosalud.pe".into(),
            status: DoctorStatus::Activo,
            scheduled_appointments: 0,
        };
        let dash = build_doctor(&fx, &doctor, day(15));

        assert_eq!(dash.stats.appointments_total, 0);
        assert_eq!(dash.stats.distinct_patients, 0);
        assert!(dash.today_appointments.is_empty());
        assert!(dash.upcoming_appointments.is_empty());
    }

    #[test]
    fn doctor_upcoming_capped_at_three() {
        let mut fx = FixtureData::sample();
        // Five extra future appointments for one doctor.
        for i in 0..5 {
            fx.appointments.push(Appointment {
                id: 100 + i,
                patient_name: format!("Paciente {i}"),
                doctor_name: "Dra. Laura Mendoza".into(),
                specialty: "Pediatría".into(),
                date: day(20 + i),
                time: "09:00".into(),
                status: AppointmentStatus::Pendiente,
            });
        }

        let doctor = fx.doctor_by_name("Dra. Laura Mendoza").unwrap().clone();
        let dash = build_doctor(&fx, &doctor, day(15));

        // 6 total (fixture row + 5 added), none today, rendered cap is 3.
        assert_eq!(dash.stats.appointments_total, 6);
        assert_eq!(dash.stats.appointments_today, 0);
        assert_eq!(dash.upcoming_appointments.len(), DOCTOR_UPCOMING_LIMIT);
    }

    #[test]
    fn patient_projection_matches_by_name() {
        let fx = FixtureData::sample();
        let patient = fx.patient_by_name("Carlos Mendoza").unwrap().clone();
        let dash = build_patient(&fx, &patient);

        assert_eq!(dash.appointments.len(), 1);
        assert_eq!(dash.appointments[0].doctor_name, "Dr. Juan Pérez");
    }

    #[test]
    fn patient_with_no_appointments_is_empty() {
        let fx = FixtureData::sample();
        let patient = Patient {
            id: 99,
            name: "Lucía Vega".into(),
            email: "lucia@ejemplo.com".into(),
            phone: "987654399".into(),
            last_appointment: day(1),
        };
        let dash = build_patient(&fx, &patient);
        assert!(dash.appointments.is_empty());
    }
}
