//! Transient notification banners.
//!
//! A banner slides in 100 ms after creation, starts sliding out at 5 s,
//! and is removed 300 ms later. Rather than chaining wall-clock timers,
//! each banner is an explicit state machine driven by the injected clock:
//! Entering → Visible → Exiting → Removed. Notifications stack without
//! bound and advance independently; there is no cancellation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Delay before the enter animation fires.
pub const ENTER_DELAY_MS: i64 = 100;
/// How long after creation the exit animation starts.
pub const EXIT_AT_MS: i64 = 5_000;
/// Exit animation length; the banner is removed once it completes.
pub const EXIT_ANIMATION_MS: i64 = 300;

/// Banner severity, mapped to the page's CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// Lifecycle phase of one banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Exiting,
    Removed,
}

/// One banner with its precomputed deadlines.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
    enter_at: DateTime<Utc>,
    exit_at: DateTime<Utc>,
    remove_at: DateTime<Utc>,
}

impl Notification {
    fn new(id: u64, message: String, severity: Severity, pushed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            message,
            severity,
            phase: Phase::Entering,
            enter_at: pushed_at + Duration::milliseconds(ENTER_DELAY_MS),
            exit_at: pushed_at + Duration::milliseconds(EXIT_AT_MS),
            remove_at: pushed_at + Duration::milliseconds(EXIT_AT_MS + EXIT_ANIMATION_MS),
        }
    }

    fn phase_at(&self, now: DateTime<Utc>) -> Phase {
        if now < self.enter_at {
            Phase::Entering
        } else if now < self.exit_at {
            Phase::Visible
        } else if now < self.remove_at {
            Phase::Exiting
        } else {
            Phase::Removed
        }
    }
}

/// All live banners. Push whenever; tick with the current instant to
/// advance phases and drop removed banners.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a banner; its deadlines are fixed at push time.
    pub fn push(&mut self, message: &str, severity: Severity, now: DateTime<Utc>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items
            .push(Notification::new(id, message.to_string(), severity, now));
        tracing::debug!("Notification #{id} [{}]: {message}", severity.as_str());
        id
    }

    /// Advance every banner past its due deadlines and drop the removed.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        for item in &mut self.items {
            item.phase = item.phase_at(now);
        }
        self.items.retain(|item| item.phase != Phase::Removed);
    }

    /// All live banners, any phase.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Banners currently in the Visible phase.
    pub fn visible(&self) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| n.phase == Phase::Visible)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 11, 15, 9, 0, 0).unwrap()
    }

    fn at(ms: i64) -> DateTime<Utc> {
        start() + Duration::milliseconds(ms)
    }

    #[test]
    fn banner_walks_the_full_lifecycle() {
        let mut center = NotificationCenter::new();
        center.push("Sesión cerrada correctamente", Severity::Info, start());

        // Not yet slid in.
        center.tick(at(99));
        assert_eq!(center.items()[0].phase, Phase::Entering);
        assert!(center.visible().is_empty());

        // Visible from 100 ms.
        center.tick(at(100));
        assert_eq!(center.visible().len(), 1);

        // Sliding out from 5 000 ms.
        center.tick(at(5_000));
        assert_eq!(center.items()[0].phase, Phase::Exiting);
        assert!(center.visible().is_empty());

        // Gone at 5 300 ms.
        center.tick(at(5_300));
        assert!(center.is_empty());
    }

    #[test]
    fn banners_advance_independently() {
        let mut center = NotificationCenter::new();
        center.push("primera", Severity::Success, start());
        center.push("segunda", Severity::Info, at(4_950));

        center.tick(at(5_050));
        // First is exiting, second just became visible.
        assert_eq!(center.items().len(), 2);
        assert_eq!(center.items()[0].phase, Phase::Exiting);
        assert_eq!(center.items()[1].phase, Phase::Visible);

        center.tick(at(5_300));
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].message, "segunda");
    }

    #[test]
    fn stacking_is_unbounded() {
        let mut center = NotificationCenter::new();
        for i in 0..50 {
            center.push(&format!("aviso {i}"), Severity::Info, start());
        }
        center.tick(at(200));
        assert_eq!(center.visible().len(), 50);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut center = NotificationCenter::new();
        let a = center.push("a", Severity::Info, start());
        let b = center.push("b", Severity::Error, start());
        assert!(b > a);
    }

    #[test]
    fn severity_maps_to_css_class() {
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Info.as_str(), "info");
        assert_eq!(Severity::Error.as_str(), "error");
    }

    #[test]
    fn tick_is_idempotent_at_same_instant() {
        let mut center = NotificationCenter::new();
        center.push("a", Severity::Info, start());
        center.tick(at(150));
        center.tick(at(150));
        assert_eq!(center.visible().len(), 1);
    }
}
