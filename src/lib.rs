pub mod clock;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod fixtures;
pub mod models;
pub mod notification;
pub mod render;
pub mod session;
pub mod ui;

pub use controller::{AuthState, Controller};
pub use fixtures::FixtureData;
pub use models::Role;

use clock::SystemClock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use session::FileSessionStore;
use ui::UiSurface;

/// Default wiring: sample fixture, file-backed session store in the app
/// data directory, wall clock, entropy-seeded randomness.
pub type DefaultController<U> = Controller<FileSessionStore, SystemClock, StdRng, U>;

/// Build the controller an embedding shell runs: initializes tracing,
/// wires the default collaborators around the given UI surface, and
/// restores any persisted session. Call once at startup.
pub fn bootstrap<U: UiSurface>(ui: U) -> DefaultController<U> {
    config::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let mut controller = Controller::new(
        FixtureData::sample(),
        FileSessionStore::at_default_location(),
        SystemClock,
        StdRng::from_entropy(),
        ui,
    );
    controller.restore_session();
    controller
}
