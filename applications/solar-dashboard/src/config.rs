use crate::error::{AppError, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub surfaces: SurfaceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

/// Where the forecast series are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// chrono format string for the system time display
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Shown as data timestamp when there is no power data
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_time_format() -> String {
    "%d/%m/%Y, %H:%M:%S".into()
}

fn default_placeholder() -> String {
    "-".into()
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            time_format: default_time_format(),
            placeholder: default_placeholder(),
        }
    }
}

impl ClockConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Reject settings a ticker cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(AppError::Config("Clock interval must be greater than 0".to_string()));
        }

        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!("Invalid clock time_format: {}", self.time_format)));
        }

        Ok(())
    }
}

/// Element ids of the dashboard page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub power_chart: String,
    pub yield_chart: String,
    pub weather_chart: String,
    pub system_time: String,
    pub data_timestamp: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            power_chart: "powerChart".into(),
            yield_chart: "yieldChart".into(),
            weather_chart: "weatherChart".into(),
            system_time: "systemTime".into(),
            data_timestamp: "dataTimestamp".into(),
        }
    }
}

impl SurfaceConfig {
    fn ids(&self) -> [&str; 5] {
        [
            self.power_chart.as_str(),
            self.yield_chart.as_str(),
            self.weather_chart.as_str(),
            self.system_time.as_str(),
            self.data_timestamp.as_str(),
        ]
    }
}

impl Config {
    /// Load configuration from a YAML file with environment variable substitution
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Expand environment variables in the format $(VAR_NAME)
        let expanded = expand_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&expanded)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config("Server port cannot be 0".to_string()));
        }

        if self.data.path.is_empty() {
            return Err(AppError::Config("Data path cannot be empty".to_string()));
        }

        self.clock.validate()?;

        let ids = self.surfaces.ids();
        if ids.iter().any(|id| id.is_empty()) {
            return Err(AppError::Config("Surface ids cannot be empty".to_string()));
        }
        let unique: HashSet<&str> = ids.iter().copied().collect();
        if unique.len() != ids.len() {
            return Err(AppError::Config("Surface ids must be unique".to_string()));
        }

        Ok(())
    }
}

/// Expand environment variables in the format $(VAR_NAME)
fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = content.to_string();

    let re = regex::Regex::new(r"\$\(([A-Z_][A-Z0-9_]*)\)")
        .map_err(|e| AppError::Internal(e.to_string()))?;

    for cap in re.captures_iter(content) {
        let full_match = &cap[0];
        let var_name = &cap[1];

        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(full_match, &value);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_expand_env_vars() {
        std::env::set_var("SOLAR_TEST_VAR", "test_value");

        let input = "path: $(SOLAR_TEST_VAR)";
        let output = expand_env_vars(input).unwrap();

        assert_eq!(output, "path: test_value");

        std::env::remove_var("SOLAR_TEST_VAR");
    }

    #[test]
    fn test_expand_env_vars_not_found() {
        let input = "path: $(NONEXISTENT_VAR)";
        let output = expand_env_vars(input).unwrap();

        // Should leave it unchanged if not found
        assert_eq!(output, "path: $(NONEXISTENT_VAR)");
    }

    #[test]
    fn test_defaults_for_optional_sections() {
        let config = Config::from_yaml(
            r#"
server:
  port: 9000
data:
  path: "data/dashboard.json"
"#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.clock.interval(), Duration::from_secs(1));
        assert_eq!(config.clock.placeholder, "-");
        assert_eq!(config.surfaces, SurfaceConfig::default());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = Config::from_yaml(
            r#"
server:
  port: 9000
data:
  path: "data/dashboard.json"
clock:
  interval_ms: 0
"#,
        );

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_time_format_rejected() {
        let result = Config::from_yaml(
            r#"
server:
  port: 9000
data:
  path: "data/dashboard.json"
clock:
  time_format: "%Q"
"#,
        );

        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("time_format")));
    }

    #[test]
    fn test_duplicate_surface_ids_rejected() {
        let result = Config::from_yaml(
            r#"
server:
  port: 9000
data:
  path: "data/dashboard.json"
surfaces:
  yield_chart: powerChart
"#,
        );

        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("unique")));
    }
}
