//! Markup construction for dashboard lists.
//!
//! Mirrors the demo page's string templates: each list item is the inner
//! HTML of an `appointment-item` / `doctor-item` entry, dates rendered in
//! long Spanish form.

use chrono::{Datelike, NaiveDate};

use crate::models::{Appointment, Doctor};

/// Empty-state copy per list.
pub const DOCTOR_TODAY_EMPTY: &str = "No hay citas programadas para hoy.";
pub const DOCTOR_UPCOMING_EMPTY: &str = "No hay próximas citas programadas.";
pub const PATIENT_EMPTY: &str = "No tienes citas programadas.";

fn month_name_es(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        _ => "diciembre",
    }
}

/// Long Spanish date: "15 de noviembre de 2023".
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        month_name_es(date.month()),
        date.year()
    )
}

/// Appointment entry as shown to admins and doctors: specialty heading,
/// participants, date/time, status badge.
pub fn appointment_item(apt: &Appointment) -> String {
    format!(
        "<div class=\"appointment-info\">\
            <h4>{}</h4>\
            <p>{} con {}</p>\
            <p>{} - {}</p>\
        </div>\
        <div class=\"appointment-actions\">\
            <span class=\"badge\">{}</span>\
        </div>",
        apt.specialty,
        apt.patient_name,
        apt.doctor_name,
        format_date(apt.date),
        apt.time,
        apt.status.as_str(),
    )
}

/// Appointment entry as shown to the patient: doctor instead of the
/// participant pair, cancel button instead of a status badge.
pub fn patient_appointment_item(apt: &Appointment) -> String {
    format!(
        "<div class=\"appointment-info\">\
            <h4>{}</h4>\
            <p>{}</p>\
            <p>{} - {}</p>\
        </div>\
        <div class=\"appointment-actions\">\
            <button class=\"btn btn-sm btn-danger\">Cancelar</button>\
        </div>",
        apt.specialty,
        apt.doctor_name,
        format_date(apt.date),
        apt.time,
    )
}

/// Doctor roster entry: name, specialty, scheduled count, edit button.
pub fn doctor_item(doctor: &Doctor) -> String {
    format!(
        "<div class=\"doctor-info\">\
            <h4>{}</h4>\
            <p>{}</p>\
            <p>{} citas programadas</p>\
        </div>\
        <div class=\"doctor-actions\">\
            <button class=\"btn btn-sm btn-outline\">Editar</button>\
        </div>",
        doctor.name, doctor.specialty, doctor.scheduled_appointments,
    )
}

/// `<li>` entries without an empty state (the admin list renders
/// nothing when there are no rows).
pub fn appointment_items(items: &[Appointment], item_markup: fn(&Appointment) -> String) -> String {
    items
        .iter()
        .map(|apt| format!("<li class=\"appointment-item\">{}</li>", item_markup(apt)))
        .collect()
}

/// A full appointment list: `<li>` per entry, or the empty-state
/// paragraph when there is nothing to show.
pub fn appointment_list(
    items: &[Appointment],
    item_markup: fn(&Appointment) -> String,
    empty_message: &str,
) -> String {
    if items.is_empty() {
        return format!("<p>{empty_message}</p>");
    }
    appointment_items(items, item_markup)
}

/// The doctor roster list. The fixture always has doctors, so there is
/// no empty state here.
pub fn doctor_list(doctors: &[Doctor]) -> String {
    doctors
        .iter()
        .map(|d| format!("<li class=\"doctor-item\">{}</li>", doctor_item(d)))
        .collect()
}
