//! View controller: role selection, session persistence, dashboard
//! population.
//!
//! One controller instance owns the immutable fixture and its injected
//! collaborators (session store, clock, random source, UI surface).
//! States: Unauthenticated → Authenticated(role) → Unauthenticated on
//! logout. Invariant: the visible dashboard always matches the session
//! role exactly, all others hidden.
//!
//! The demo has no real identity binding: signing in as doctor or
//! patient picks a fixture row uniformly at random. `select_doctor` /
//! `select_patient` take an explicit identity instead.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::dashboard;
use crate::fixtures::FixtureData;
use crate::models::{Doctor, Patient, Role};
use crate::notification::{NotificationCenter, Severity};
use crate::render;
use crate::session::{SessionRecord, SessionStore};
use crate::ui::{slots, UiSurface};

/// Authentication state, derived from the in-memory session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated(Role),
}

pub struct Controller<S, C, R, U> {
    fixture: FixtureData,
    store: S,
    clock: C,
    rng: R,
    ui: U,
    session: Option<SessionRecord>,
    notifications: NotificationCenter,
}

impl<S, C, R, U> Controller<S, C, R, U>
where
    S: SessionStore,
    C: Clock,
    R: Rng,
    U: UiSurface,
{
    pub fn new(fixture: FixtureData, store: S, clock: C, rng: R, ui: U) -> Self {
        Self {
            fixture,
            store,
            clock,
            rng,
            ui,
            session: None,
            notifications: NotificationCenter::new(),
        }
    }

    // ── State ────────────────────────────────────────────

    pub fn state(&self) -> AuthState {
        match &self.session {
            Some(record) => AuthState::Authenticated(record.role),
            None => AuthState::Unauthenticated,
        }
    }

    pub fn session(&self) -> Option<&SessionRecord> {
        self.session.as_ref()
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    // ── Operations ───────────────────────────────────────

    /// Sign in under a role: persist the session, show that role's
    /// dashboard, announce it.
    pub fn select_role(&mut self, role: Role) {
        let record = SessionRecord::new(role);
        if let Err(e) = self.store.save(&record) {
            // Persistence is best-effort; the session still works.
            warn!("Could not persist session: {e}");
        }
        self.session = Some(record);

        self.ui.hide(slots::USER_TYPE_SELECTOR);
        self.show_dashboard(role);

        self.notify(
            &format!("Has iniciado sesión como {}", role.as_str()),
            Severity::Success,
        );
        info!("Signed in as {}", role.as_str());
    }

    /// Re-enter a persisted session at startup, without announcing it.
    /// Absent or malformed records leave the controller signed out.
    pub fn restore_session(&mut self) {
        let Some(record) = self.store.load() else {
            return;
        };
        let role = record.role;
        self.session = Some(record);

        self.ui.hide(slots::USER_TYPE_SELECTOR);
        self.show_dashboard(role);
        info!("Restored session as {}", role.as_str());
    }

    /// Sign out: clear the session (in memory and persisted), return to
    /// the role selector, announce it.
    pub fn logout(&mut self) {
        self.session = None;
        if let Err(e) = self.store.clear() {
            warn!("Could not clear persisted session: {e}");
        }

        for dash in slots::DASHBOARDS {
            self.ui.hide(dash);
        }
        self.ui.show(slots::USER_TYPE_SELECTOR);

        self.notify("Sesión cerrada correctamente", Severity::Info);
        info!("Signed out");
    }

    /// The "more info" button: only a banner, there is nothing behind it.
    pub fn show_more_info(&mut self) {
        self.notify(
            "Para más información, contacta con nuestro equipo de soporte.",
            Severity::Info,
        );
    }

    /// Push a transient banner.
    pub fn notify(&mut self, message: &str, severity: Severity) {
        let now = self.clock.now();
        self.notifications.push(message, severity, now);
    }

    /// Advance notification lifecycles to the current instant.
    pub fn tick(&mut self) {
        self.notifications.tick(self.clock.now());
    }

    // ── Dashboards ───────────────────────────────────────

    fn show_dashboard(&mut self, role: Role) {
        for dash in slots::DASHBOARDS {
            self.ui.hide(dash);
        }
        self.ui.show(slots::dashboard(role));
        self.populate_dashboard(role);
    }

    /// Populate a role's dashboard from the fixture.
    pub fn populate_dashboard(&mut self, role: Role) {
        match role {
            Role::Admin => self.populate_admin(),
            Role::Doctor => self.populate_doctor(),
            Role::Patient => self.populate_patient(),
        }
    }

    fn populate_admin(&mut self) {
        let dash = dashboard::build_admin(&self.fixture, self.clock.today());

        self.ui.set_text(
            slots::TOTAL_APPOINTMENTS,
            &dash.stats.total_appointments.to_string(),
        );
        self.ui.set_text(
            slots::TODAY_APPOINTMENTS,
            &dash.stats.today_appointments.to_string(),
        );
        self.ui
            .set_text(slots::TOTAL_DOCTORS, &dash.stats.total_doctors.to_string());
        self.ui
            .set_text(slots::TOTAL_PATIENTS, &dash.stats.total_patients.to_string());

        self.ui.set_markup(
            slots::ADMIN_APPOINTMENTS_LIST,
            &render::appointment_items(&dash.recent_appointments, render::appointment_item),
        );
        self.ui
            .set_markup(slots::ADMIN_DOCTORS_LIST, &render::doctor_list(&dash.doctors));
    }

    fn populate_doctor(&mut self) {
        // Random fixture row stands in for "the logged-in doctor".
        let Some(doctor) = self.fixture.doctors.choose(&mut self.rng).cloned() else {
            warn!("No doctors in fixture, leaving dashboard empty");
            return;
        };
        self.render_doctor_dashboard(&doctor);
    }

    fn populate_patient(&mut self) {
        let Some(patient) = self.fixture.patients.choose(&mut self.rng).cloned() else {
            warn!("No patients in fixture, leaving dashboard empty");
            return;
        };
        self.render_patient_dashboard(&patient);
    }

    /// Repopulate the doctor dashboard for an explicit identity.
    /// Returns false (and changes nothing) if the name is unknown.
    pub fn select_doctor(&mut self, name: &str) -> bool {
        match self.fixture.doctor_by_name(name).cloned() {
            Some(doctor) => {
                self.render_doctor_dashboard(&doctor);
                true
            }
            None => {
                warn!("Unknown doctor '{name}'");
                false
            }
        }
    }

    /// Repopulate the patient dashboard for an explicit identity.
    /// Returns false (and changes nothing) if the name is unknown.
    pub fn select_patient(&mut self, name: &str) -> bool {
        match self.fixture.patient_by_name(name).cloned() {
            Some(patient) => {
                self.render_patient_dashboard(&patient);
                true
            }
            None => {
                warn!("Unknown patient '{name}'");
                false
            }
        }
    }

    fn render_doctor_dashboard(&mut self, doctor: &Doctor) {
        let dash = dashboard::build_doctor(&self.fixture, doctor, self.clock.today());

        self.ui.set_text(slots::DOCTOR_NAME, &dash.doctor.name);
        self.ui
            .set_text(slots::DOCTOR_SPECIALTY, &dash.doctor.specialty);

        self.ui.set_text(
            slots::DOCTOR_APPOINTMENTS_TODAY,
            &dash.stats.appointments_today.to_string(),
        );
        self.ui.set_text(
            slots::DOCTOR_APPOINTMENTS_WEEK,
            &dash.stats.appointments_total.to_string(),
        );
        self.ui.set_text(
            slots::DOCTOR_PATIENTS,
            &dash.stats.distinct_patients.to_string(),
        );
        self.ui
            .set_text(slots::DOCTOR_AVAILABILITY, &dash.stats.availability);

        self.ui.set_markup(
            slots::DOCTOR_TODAY_APPOINTMENTS,
            &render::appointment_list(
                &dash.today_appointments,
                render::appointment_item,
                render::DOCTOR_TODAY_EMPTY,
            ),
        );
        self.ui.set_markup(
            slots::DOCTOR_UPCOMING_APPOINTMENTS,
            &render::appointment_list(
                &dash.upcoming_appointments,
                render::appointment_item,
                render::DOCTOR_UPCOMING_EMPTY,
            ),
        );
    }

    fn render_patient_dashboard(&mut self, patient: &Patient) {
        let dash = dashboard::build_patient(&self.fixture, patient);

        self.ui.set_text(slots::PATIENT_NAME, &dash.patient.name);
        self.ui.set_text(slots::PATIENT_EMAIL, &dash.patient.email);

        self.ui.set_markup(
            slots::PATIENT_APPOINTMENTS_LIST,
            &render::appointment_list(
                &dash.appointments,
                render::patient_appointment_item,
                render::PATIENT_EMPTY,
            ),
        );
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
