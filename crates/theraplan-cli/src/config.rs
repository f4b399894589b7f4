//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `THERAPLAN_<SECTION>__<KEY>`, for example
//!    `THERAPLAN_SCHEDULING__REMINDER_HOUR=9`
//! 3. Config file: `--config FILE`, else the platform config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use theraplan_core::domain::{
    DEFAULT_REMINDER_HOUR, DEFAULT_SMS_MAX_LENGTH, DomainError, ReminderPolicy, THERAPY_MODULE,
};

const ENV_PREFIX: &str = "THERAPLAN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reminder scheduling.
    pub scheduling: SchedulingConfig,
    /// Where the ward data comes from.
    pub data: DataConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Hour of day (0-23) reminders are sent at.
    pub reminder_hour: u32,
    /// Maximum SMS body length in characters.
    pub sms_max_length: usize,
    /// Module name reminders are filed under.
    pub module: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Snapshot file; the demo ward is used when unset.
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            reminder_hour: DEFAULT_REMINDER_HOUR,
            sms_max_length: DEFAULT_SMS_MAX_LENGTH,
            module: THERAPY_MODULE.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl SchedulingConfig {
    /// Reminder policy for the configured hour and length.
    pub fn policy(&self) -> Result<ReminderPolicy, DomainError> {
        ReminderPolicy::new(self.reminder_hour, self.sms_max_length)
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.theraplan.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "theraplan", "theraplan")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".theraplan.toml"))
    }

    /// Snapshot to load: the CLI flag wins over the configured one.
    pub fn snapshot<'a>(&'a self, flag: Option<&'a Path>) -> Option<&'a Path> {
        flag.or(self.data.snapshot.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_match_scheduling_constants() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.scheduling.reminder_hour, 8);
        assert_eq!(cfg.scheduling.sms_max_length, 160);
        assert_eq!(cfg.scheduling.module, "therapy");
        assert!(cfg.data.snapshot.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("theraplan-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(
            &path,
            "[scheduling]\nreminder_hour = 9\n\n[data]\nsnapshot = \"ward.toml\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.scheduling.reminder_hour, 9);
        assert_eq!(cfg.scheduling.sms_max_length, 160);
        assert_eq!(cfg.data.snapshot, Some(PathBuf::from("ward.toml")));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/theraplan.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn out_of_range_hour_is_rejected_by_policy() {
        let scheduling = SchedulingConfig {
            reminder_hour: 24,
            ..SchedulingConfig::default()
        };
        assert!(scheduling.policy().is_err());
    }

    #[test]
    fn snapshot_flag_wins() {
        let mut cfg = AppConfig::default();
        cfg.data.snapshot = Some(PathBuf::from("configured.toml"));

        assert_eq!(
            cfg.snapshot(Some(Path::new("flag.toml"))),
            Some(Path::new("flag.toml"))
        );
        assert_eq!(cfg.snapshot(None), Some(Path::new("configured.toml")));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
