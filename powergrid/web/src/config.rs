use config::{Config, ConfigError, Environment, File, FileFormat};
use powergrid_core::IdAssignment;
use serde::Deserialize;

const DEFAULTS: &str = include_str!("../powergrid.toml");
const ENV_PREFIX: &str = "POWERGRID";

/// Application settings, built from the bundled defaults and `POWERGRID_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum tracing level, e.g. `info` or `debug`.
    pub log_level: String,
    /// Whether the dashboard starts with the sample complaints.
    pub seed_sample_data: bool,
    pub id_assignment: IdAssignment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed_sample_data: true,
            id_assignment: IdAssignment::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the bundled defaults and the process environment
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::build(Environment::with_prefix(ENV_PREFIX))?)
    }

    fn build(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn tracing_level(&self) -> anyhow::Result<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid log level {:?}: {e}", self.log_level))
    }
}
