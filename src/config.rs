use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Application-level constants
pub const APP_NAME: &str = "CaveroSalud";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage key for the persisted session record (one fixed key, no
/// schema versioning).
pub const SESSION_KEY: &str = "caverosalud_currentUser";

/// Get the application data directory
/// ~/CaveroSalud/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// Path of the single persisted session record.
pub fn session_file() -> PathBuf {
    app_data_dir().join(format!("{SESSION_KEY}.json"))
}

/// Default log filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "caverosalud_lib=info".to_string()
}

/// Initialize tracing for an embedding shell. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("CaveroSalud"));
    }

    #[test]
    fn session_file_under_app_data() {
        let file = session_file();
        assert!(file.starts_with(app_data_dir()));
        assert!(file.ends_with("caverosalud_currentUser.json"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
