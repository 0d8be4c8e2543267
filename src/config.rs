use crate::application::default_logger::{default_pattern, select_sink_from};
use crate::common::LoggerResult;
use crate::domains::Logger;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Name of the library's logger.
pub const LOGGER_NAME: &str = "RMM";

/// Environment variable naming a file to append log output to.
pub const LOG_FILE_ENV: &str = "RMM_DEBUG_LOG_FILE";

/// How to build a logger. The `Default` is exactly what `default_logger()` uses;
/// hosts embedding RMM may deserialize their own from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub log_file_env: String,
    #[serde(with = "level_filter")]
    pub level: LevelFilter,
}

impl LoggerConfig {
    pub fn from_toml_str(content: &str) -> LoggerResult<Self> {
        let config: LoggerConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Select a sink from `log_file_env` and assemble a logger around it.
    pub fn build(&self) -> Logger {
        Logger::new(
            self.name.clone(),
            select_sink_from(&self.log_file_env),
            default_pattern(),
            self.level,
        )
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: LOGGER_NAME.to_string(),
            log_file_env: LOG_FILE_ENV.to_string(),
            level: LevelFilter::INFO,
        }
    }
}

mod level_filter {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use tracing::level_filters::LevelFilter;

    pub fn serialize<S: Serializer>(level: &LevelFilter, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(level)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LevelFilter, D::Error> {
        let raw = String::deserialize(deserializer)?;
        // Levels print as "warning"; accept that spelling too.
        let name = if raw.eq_ignore_ascii_case("warning") { "warn" } else { raw.as_str() };
        name.parse().map_err(de::Error::custom)
    }
}
