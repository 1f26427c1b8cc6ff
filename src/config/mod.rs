use crate::errors::{AppError, AppResult};
use crate::models::employee::Roster;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the roster YAML file holding the employee list.
    #[serde(default = "default_roster_path")]
    pub roster: String,

    /// Hours implied by a grid cell with no stored value.
    #[serde(default = "default_norm_hours")]
    pub default_norm_hours: f64,

    /// Literal header label that anchors the spreadsheet import and is
    /// written by the template exporter.
    #[serde(default = "default_name_label")]
    pub name_column_label: String,

    /// Free text included in the template title row.
    #[serde(default)]
    pub organization: String,

    /// Marker appended to weekend day headers in terminal output.
    #[serde(default = "default_weekend_marker")]
    pub weekend_marker: String,
}

fn default_roster_path() -> String {
    Config::roster_file().to_string_lossy().to_string()
}

fn default_norm_hours() -> f64 {
    8.0
}

fn default_name_label() -> String {
    "name".to_string()
}

fn default_weekend_marker() -> String {
    "·".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: default_roster_path(),
            default_norm_hours: default_norm_hours(),
            name_column_label: default_name_label(),
            organization: String::new(),
            weekend_marker: default_weekend_marker(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Some(base) = dirs::config_dir() {
            base.join("shiftsheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftsheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftsheet.conf")
    }

    /// Return the default path of the roster file
    pub fn roster_file() -> PathBuf {
        Self::config_dir().join("roster.yaml")
    }

    /// Load the configuration from `override_path` when given, otherwise from
    /// the standard location. A missing file yields the defaults.
    pub fn load(override_path: Option<&str>) -> AppResult<Self> {
        let path = match override_path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// Serialize the configuration back to YAML (used by `config --print`).
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize the configuration file and a sample roster.
    /// With `is_test` the config file is not written, only the directory and
    /// the roster are prepared.
    pub fn init_all(is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let roster_path = Path::new(&config.roster).to_path_buf();
        if !roster_path.exists() {
            Roster::sample().save(&roster_path)?;
        }

        println!("✅ Roster:      {:?}", roster_path);

        Ok(())
    }
}
