use crate::error::Result;
use crate::models::DashboardData;
use std::path::{Path, PathBuf};
use tracing::info;

/// Supplies the forecast series a dashboard is mounted with
pub trait DataProvider {
    fn load(&self) -> Result<DashboardData>;
}

/// Series already held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticProvider(pub DashboardData);

impl DataProvider for StaticProvider {
    fn load(&self) -> Result<DashboardData> {
        Ok(self.0.clone())
    }
}

/// Reads `{ "power_data": [...], "daily_data": [...], "weather_data": [...] }`
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataProvider for JsonFileProvider {
    fn load(&self) -> Result<DashboardData> {
        let content = std::fs::read_to_string(&self.path)?;
        let data: DashboardData = serde_json::from_str(&content)?;

        info!(
            "Loaded dashboard data from {}: {} power, {} daily, {} weather records",
            self.path.display(),
            data.power_data.len(),
            data.daily_data.len(),
            data.weather_data.len()
        );

        Ok(data)
    }
}
