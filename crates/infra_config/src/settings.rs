//! Settings and configuration structures.

use crate::error::ConfigError;
use chrono::NaiveDate;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::debug;
use units_core::spec::DateSpecification;

/// Main application settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Business calendar configuration
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `BASEUNITS_ENV`)
    /// 3. Environment variables prefixed with `BASEUNITS_`
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("BASEUNITS_ENV").unwrap_or_else(|_| "development".into());
        debug!(environment = %env, "loading calendar settings");

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("BASEUNITS").separator("__"))
            .build()?;

        Self::from_config(config)
    }

    /// Load settings from an in-memory TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.calendar.validate()?;
        debug!(
            preset = ?settings.calendar.preset,
            holidays = settings.calendar.holidays.len(),
            annual_holidays = settings.calendar.annual_holidays.len(),
            "calendar settings loaded"
        );
        Ok(settings)
    }
}

/// Business calendar configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CalendarConfig {
    /// Preset calendar identifier (`weekend_only`, `target`, `new_york`, `tokyo`, `london`)
    #[serde(default)]
    pub preset: Option<String>,
    /// One-off holidays as ISO dates
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Holidays recurring on the same month and day every year
    #[serde(default)]
    pub annual_holidays: Vec<AnnualHoliday>,
}

impl CalendarConfig {
    /// Reject annual holidays whose month/day never occurs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for holiday in &self.annual_holidays {
            DateSpecification::annual(holiday.month, holiday.day).map_err(|err| {
                ConfigError::InvalidValue {
                    key: "calendar.annual_holidays".to_string(),
                    message: err.to_string(),
                }
            })?;
        }
        Ok(())
    }
}

/// A holiday on the same month and day every year.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct AnnualHoliday {
    pub month: u32,
    pub day: u32,
}
