//! UI surface seam.
//!
//! The presentation layer is an external collaborator addressed through
//! named slots (the demo page's element ids). The core's whole
//! contract with it: write text or markup into a slot, toggle slot
//! visibility. Writes to unknown slots are silently dropped — a missing
//! element is never an error.

use std::collections::HashMap;

use crate::models::Role;

/// Slot ids, matching the demo page's element ids.
pub mod slots {
    pub const USER_TYPE_SELECTOR: &str = "userTypeSelector";

    pub const ADMIN_DASHBOARD: &str = "adminDashboard";
    pub const DOCTOR_DASHBOARD: &str = "doctorDashboard";
    pub const PATIENT_DASHBOARD: &str = "patientDashboard";

    pub const TOTAL_APPOINTMENTS: &str = "totalAppointments";
    pub const TODAY_APPOINTMENTS: &str = "todayAppointments";
    pub const TOTAL_DOCTORS: &str = "totalDoctors";
    pub const TOTAL_PATIENTS: &str = "totalPatients";
    pub const ADMIN_APPOINTMENTS_LIST: &str = "adminAppointmentsList";
    pub const ADMIN_DOCTORS_LIST: &str = "adminDoctorsList";

    pub const DOCTOR_NAME: &str = "doctorName";
    pub const DOCTOR_SPECIALTY: &str = "doctorSpecialty";
    pub const DOCTOR_APPOINTMENTS_TODAY: &str = "doctorAppointmentsToday";
    pub const DOCTOR_APPOINTMENTS_WEEK: &str = "doctorAppointmentsWeek";
    pub const DOCTOR_PATIENTS: &str = "doctorPatients";
    pub const DOCTOR_AVAILABILITY: &str = "doctorAvailability";
    pub const DOCTOR_TODAY_APPOINTMENTS: &str = "doctorTodayAppointments";
    pub const DOCTOR_UPCOMING_APPOINTMENTS: &str = "doctorUpcomingAppointments";

    pub const PATIENT_NAME: &str = "patientName";
    pub const PATIENT_EMAIL: &str = "patientEmail";
    pub const PATIENT_APPOINTMENTS_LIST: &str = "patientAppointmentsList";

    pub const DASHBOARDS: [&str; 3] = [ADMIN_DASHBOARD, DOCTOR_DASHBOARD, PATIENT_DASHBOARD];

    /// The dashboard container for a role.
    pub fn dashboard(role: super::Role) -> &'static str {
        match role {
            super::Role::Admin => ADMIN_DASHBOARD,
            super::Role::Doctor => DOCTOR_DASHBOARD,
            super::Role::Patient => PATIENT_DASHBOARD,
        }
    }
}

/// Presentation seam the controller writes through.
pub trait UiSurface {
    fn set_text(&mut self, slot: &str, text: &str);
    fn set_markup(&mut self, slot: &str, markup: &str);
    fn show(&mut self, slot: &str);
    fn hide(&mut self, slot: &str);
}

// ═══════════════════════════════════════════════════════════
// MemoryUi
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
struct Slot {
    text: String,
    markup: String,
    visible: bool,
}

/// In-memory surface over a fixed slot registry. Used by tests and by
/// any embedding shell that snapshots the page state.
#[derive(Debug, Clone, Default)]
pub struct MemoryUi {
    slots: HashMap<&'static str, Slot>,
}

impl MemoryUi {
    /// Empty surface with no slots: every write is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Surface with the full demo page registered: selector visible,
    /// dashboards hidden.
    pub fn with_default_page() -> Self {
        let mut ui = Self::default();
        ui.register(slots::USER_TYPE_SELECTOR, true);
        for dash in slots::DASHBOARDS {
            ui.register(dash, false);
        }
        for slot in [
            slots::TOTAL_APPOINTMENTS,
            slots::TODAY_APPOINTMENTS,
            slots::TOTAL_DOCTORS,
            slots::TOTAL_PATIENTS,
            slots::ADMIN_APPOINTMENTS_LIST,
            slots::ADMIN_DOCTORS_LIST,
            slots::DOCTOR_NAME,
            slots::DOCTOR_SPECIALTY,
            slots::DOCTOR_APPOINTMENTS_TODAY,
            slots::DOCTOR_APPOINTMENTS_WEEK,
            slots::DOCTOR_PATIENTS,
            slots::DOCTOR_AVAILABILITY,
            slots::DOCTOR_TODAY_APPOINTMENTS,
            slots::DOCTOR_UPCOMING_APPOINTMENTS,
            slots::PATIENT_NAME,
            slots::PATIENT_EMAIL,
            slots::PATIENT_APPOINTMENTS_LIST,
        ] {
            ui.register(slot, true);
        }
        ui
    }

    pub fn register(&mut self, slot: &'static str, visible: bool) {
        self.slots.insert(
            slot,
            Slot {
                visible,
                ..Slot::default()
            },
        );
    }

    // ── Inspection ───────────────────────────────────────

    pub fn text(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(|s| s.text.as_str())
    }

    pub fn markup(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(|s| s.markup.as_str())
    }

    /// Whether a slot is visible. Unknown slots report hidden.
    pub fn is_visible(&self, slot: &str) -> bool {
        self.slots.get(slot).map(|s| s.visible).unwrap_or(false)
    }

    /// Dashboard containers currently visible.
    pub fn visible_dashboards(&self) -> Vec<&'static str> {
        slots::DASHBOARDS
            .into_iter()
            .filter(|d| self.is_visible(d))
            .collect()
    }
}

impl UiSurface for MemoryUi {
    fn set_text(&mut self, slot: &str, text: &str) {
        match self.slots.get_mut(slot) {
            Some(s) => s.text = text.to_string(),
            None => tracing::debug!("set_text on unknown slot '{slot}', skipped"),
        }
    }

    fn set_markup(&mut self, slot: &str, markup: &str) {
        match self.slots.get_mut(slot) {
            Some(s) => s.markup = markup.to_string(),
            None => tracing::debug!("set_markup on unknown slot '{slot}', skipped"),
        }
    }

    fn show(&mut self, slot: &str) {
        if let Some(s) = self.slots.get_mut(slot) {
            s.visible = true;
        }
    }

    fn hide(&mut self, slot: &str) {
        if let Some(s) = self.slots.get_mut(slot) {
            s.visible = false;
        }
    }
}
