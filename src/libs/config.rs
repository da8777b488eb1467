//! Configuration management for the zeitkonto application.
//!
//! The configuration is a small JSON document in the platform data directory
//! (see [`DataStorage`]) with two optional sections:
//!
//! - **backend**: URL and key of the hosted table store. Without it all data
//!   lives in a local SQLite file next to the configuration.
//! - **tracking**: daily target hours, the overtime display corridor and the
//!   employee whose rows are read.
//!
//! Values from the environment take precedence over the file, so a `.env`
//! file or CI secrets can point the tool at a backend without touching the
//! stored configuration:
//!
//! - `ZEITKONTO_API_URL` / `ZEITKONTO_API_KEY`
//! - `ZEITKONTO_EMPLOYEE_ID`
//!
//! ```rust,no_run
//! use zeitkonto::libs::config::Config;
//!
//! let config = Config::read()?.with_env_overrides();
//! let target = config.tracking().target_hours_per_day;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::overtime::Corridor;
use super::week::DEFAULT_TARGET_HOURS_PER_DAY;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_API_URL: &str = "ZEITKONTO_API_URL";
pub const ENV_API_KEY: &str = "ZEITKONTO_API_KEY";
pub const ENV_EMPLOYEE_ID: &str = "ZEITKONTO_EMPLOYEE_ID";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Connection parameters of the hosted table store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://project.example.co`.
    pub api_url: String,
    /// Key sent as `apikey` header and bearer token.
    pub api_key: String,
}

/// Parameters of the work-time summaries.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackingConfig {
    #[serde(default = "default_target_hours")]
    pub target_hours_per_day: f64,
    #[serde(default = "default_corridor_min")]
    pub corridor_min: f64,
    #[serde(default = "default_corridor_max")]
    pub corridor_max: f64,
    /// Only rows of this employee are read and written. `None` reads all rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

fn default_target_hours() -> f64 {
    DEFAULT_TARGET_HOURS_PER_DAY
}

fn default_corridor_min() -> f64 {
    Corridor::default().min
}

fn default_corridor_max() -> f64 {
    Corridor::default().max
}

impl Default for TrackingConfig {
    fn default() -> Self {
        TrackingConfig {
            target_hours_per_day: default_target_hours(),
            corridor_min: default_corridor_min(),
            corridor_max: default_corridor_max(),
            employee_id: None,
        }
    }
}

impl TrackingConfig {
    pub fn corridor(&self) -> Corridor {
        Corridor {
            min: self.corridor_min,
            max: self.corridor_max,
        }
    }
}

/// Root configuration. Unset sections are omitted from the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<TrackingConfig>,
}

impl Config {
    /// Reads the configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies `ZEITKONTO_*` environment variables on top of the file values.
    ///
    /// The backend is only replaced when both URL and key are present.
    pub fn with_env_overrides(mut self) -> Self {
        if let (Ok(api_url), Ok(api_key)) = (env::var(ENV_API_URL), env::var(ENV_API_KEY)) {
            self.backend = Some(BackendConfig { api_url, api_key });
        }
        if let Ok(employee_id) = env::var(ENV_EMPLOYEE_ID) {
            let mut tracking = self.tracking.unwrap_or_default();
            tracking.employee_id = Some(employee_id).filter(|id| !id.is_empty());
            self.tracking = Some(tracking);
        }
        self
    }

    /// The tracking section, or its defaults.
    pub fn tracking(&self) -> TrackingConfig {
        self.tracking.clone().unwrap_or_default()
    }

    pub fn employee_id(&self) -> Option<String> {
        self.tracking.as_ref().and_then(|tracking| tracking.employee_id.clone())
    }

    /// Runs the interactive setup wizard, starting from the stored values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "backend".to_string(),
                name: Message::ConfigModuleBackend.to_string(),
            },
            ConfigModule {
                key: "tracking".to_string(),
                name: Message::ConfigModuleTracking.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "backend" => {
                    let default = config.backend.clone().unwrap_or(BackendConfig {
                        api_url: "".to_string(),
                        api_key: "".to_string(),
                    });
                    msg_print!(Message::ConfigModuleBackend);
                    config.backend = Some(BackendConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBackendApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        api_key: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBackendApiKey.to_string())
                            .default(default.api_key)
                            .interact_text()?,
                    });
                }
                "tracking" => {
                    let default = config.tracking();
                    msg_print!(Message::ConfigModuleTracking);
                    let employee_id: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptEmployeeId.to_string())
                        .default(default.employee_id.clone().unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    config.tracking = Some(TrackingConfig {
                        target_hours_per_day: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTargetHours.to_string())
                            .default(default.target_hours_per_day)
                            .interact_text()?,
                        corridor_min: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCorridorMin.to_string())
                            .default(default.corridor_min)
                            .interact_text()?,
                        corridor_max: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCorridorMax.to_string())
                            .default(default.corridor_max)
                            .interact_text()?,
                        employee_id: Some(employee_id).filter(|id| !id.is_empty()),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
