use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::InputLimits;
use crate::model::{ElectionScope, SimulationInput, SyncType, TimeHorizon};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub limits: InputLimits,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Initial form values used when a command does not set a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_scope")]
    pub election_scope: ElectionScope,
    #[serde(default = "default_sync_type")]
    pub sync_type: SyncType,
    #[serde(default = "default_time_horizon")]
    pub time_horizon: TimeHorizon,
    #[serde(default = "default_cost_per_cycle")]
    pub cost_per_cycle: f64,
    #[serde(default = "default_mcc_duration")]
    pub mcc_duration: f64,
    #[serde(default = "default_participating_regions")]
    pub participating_regions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_session_db_path")]
    pub session_db_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub session_db_path: Option<String>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/election-sync-sim/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(path) = overrides.session_db_path {
            self.storage.session_db_path = path;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn resolved_session_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.session_db_path)
    }

    pub fn default_input(&self) -> SimulationInput {
        SimulationInput {
            election_scope: self.defaults.election_scope,
            sync_type: self.defaults.sync_type,
            time_horizon: self.defaults.time_horizon,
            cost_per_cycle: self.defaults.cost_per_cycle,
            mcc_duration: self.defaults.mcc_duration,
            participating_regions: self.defaults.participating_regions,
        }
    }

    pub fn default_template() -> String {
        let template = r#"# All figures are hypothetical and for illustration only.

[defaults]
election_scope = "national_and_regional"
sync_type = "none"
time_horizon = 10
cost_per_cycle = 4000.0
mcc_duration = 60.0
participating_regions = 28

[limits]
min_cost_per_cycle = 1000.0
max_cost_per_cycle = 10000.0
min_mcc_duration = 30.0
max_mcc_duration = 120.0
min_regions = 5
max_regions = 36

[storage]
session_db_path = "~/.local/share/election-sync-sim/session.db"

[output]
format = "table"
currency_symbol = "₹"
"#;
        template.to_string()
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            election_scope: default_scope(),
            sync_type: default_sync_type(),
            time_horizon: default_time_horizon(),
            cost_per_cycle: default_cost_per_cycle(),
            mcc_duration: default_mcc_duration(),
            participating_regions: default_participating_regions(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_db_path: default_session_db_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_scope() -> ElectionScope {
    SimulationInput::default().election_scope
}

fn default_sync_type() -> SyncType {
    SimulationInput::default().sync_type
}

fn default_time_horizon() -> TimeHorizon {
    SimulationInput::default().time_horizon
}

fn default_cost_per_cycle() -> f64 {
    SimulationInput::default().cost_per_cycle
}

fn default_mcc_duration() -> f64 {
    SimulationInput::default().mcc_duration
}

fn default_participating_regions() -> u32 {
    SimulationInput::default().participating_regions
}

fn default_session_db_path() -> String {
    "~/.local/share/election-sync-sim/session.db".to_string()
}

fn default_format() -> String {
    "table".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::model::{SimulationInput, TimeHorizon};

    #[test]
    fn template_parses_to_defaults() {
        let parsed: Config = toml::from_str(&Config::default_template()).expect("parse template");
        assert_eq!(parsed.default_input(), SimulationInput::default());
        assert_eq!(parsed.limits, crate::input::InputLimits::default());
        assert_eq!(parsed.output.format, "table");
    }

    #[test]
    fn partial_config_fills_missing_sections() {
        let parsed: Config = toml::from_str("[defaults]\ntime_horizon = 5\n").expect("parse");
        assert_eq!(parsed.defaults.time_horizon, TimeHorizon::FiveYears);
        assert_eq!(parsed.defaults.participating_regions, 28);
        assert!(parsed.storage.session_db_path.ends_with("session.db"));
    }

    #[test]
    fn rejects_unsupported_horizon() {
        assert!(toml::from_str::<Config>("[defaults]\ntime_horizon = 7\n").is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load(Some(&dir.path().join("absent.toml"))).expect("load");
        assert_eq!(config.default_input(), SimulationInput::default());
    }

    #[test]
    fn written_template_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("conf/config.toml");
        Config::write_template(&path).expect("write template");
        let config = Config::load(Some(&path)).expect("load");
        assert_eq!(config.output.currency_symbol, "₹");
    }
}
