//! Application directory paths.
//!
//! Single source of truth for filesystem locations, resolved through the
//! [`dirs`] crate for platform-appropriate defaults.
//!
//! # Environment Overrides
//!
//! Paths can be overridden for testing or custom deployments:
//! - `WEEKPLAN_CONFIG_DIR` overrides [`config_dir`]
//! - `WEEKPLAN_DATA_DIR` overrides [`data_dir`]

use std::path::PathBuf;

/// Application config directory.
///
/// Resolves to `dirs::config_dir()/weekplan/` by default (e.g.
/// `~/.config/weekplan/` on Linux). Override with `WEEKPLAN_CONFIG_DIR`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("WEEKPLAN_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("weekplan"))
        .unwrap_or_else(|| PathBuf::from("/tmp/weekplan-config"))
}

/// Application data directory, where persisted schedules live.
///
/// Resolves to `dirs::data_dir()/weekplan/` by default (e.g.
/// `~/.local/share/weekplan/` on Linux). Override with `WEEKPLAN_DATA_DIR`.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("WEEKPLAN_DATA_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_dir()
        .map(|d| d.join("weekplan"))
        .unwrap_or_else(|| PathBuf::from("/tmp/weekplan-data"))
}

/// Main config file path (`config_dir()/config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_is_nonempty() {
        assert!(!config_dir().as_os_str().is_empty());
    }

    #[test]
    fn data_dir_contains_weekplan() {
        let dir = data_dir();
        let s = dir.to_string_lossy();
        assert!(s.contains("weekplan"), "data_dir should contain 'weekplan': {s}");
    }

    #[test]
    fn config_file_ends_with_config_toml() {
        let path = config_file();
        let s = path.to_string_lossy();
        assert!(s.ends_with("config.toml"), "config_file: {s}");
    }

    // Override values keep "weekplan" in them so the assertions above hold
    // even if these tests interleave with them.

    #[test]
    fn data_dir_honors_environment_override() {
        let saved = std::env::var_os("WEEKPLAN_DATA_DIR");
        // SAFETY: the prior value is restored below before the test ends.
        unsafe { std::env::set_var("WEEKPLAN_DATA_DIR", "/tmp/weekplan-data-override") };
        let dir = data_dir();
        match saved {
            Some(value) => unsafe { std::env::set_var("WEEKPLAN_DATA_DIR", value) },
            None => unsafe { std::env::remove_var("WEEKPLAN_DATA_DIR") },
        }
        assert_eq!(dir, PathBuf::from("/tmp/weekplan-data-override"));
    }

    #[test]
    fn config_dir_honors_environment_override() {
        let saved = std::env::var_os("WEEKPLAN_CONFIG_DIR");
        // SAFETY: the prior value is restored below before the test ends.
        unsafe { std::env::set_var("WEEKPLAN_CONFIG_DIR", "/tmp/weekplan-config-override") };
        let dir = config_dir();
        match saved {
            Some(value) => unsafe { std::env::set_var("WEEKPLAN_CONFIG_DIR", value) },
            None => unsafe { std::env::remove_var("WEEKPLAN_CONFIG_DIR") },
        }
        assert_eq!(dir, PathBuf::from("/tmp/weekplan-config-override"));
    }
}
