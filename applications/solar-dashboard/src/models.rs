use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A numeric field as supplied by the data source.
///
/// Kept as raw JSON so that nulls or non-numeric values reach the chart
/// surface untouched.
pub type Reading = Value;

/// One hourly power prediction sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRecord {
    pub datetime: String,
    #[serde(rename = "predicted_power_W")]
    pub predicted_power_w: Reading,
}

/// Predicted energy yield for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    #[serde(rename = "predicted_daily_yield_Wh")]
    pub predicted_daily_yield_wh: Reading,
}

/// Daily yield together with the weather factors it was predicted from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: String,
    #[serde(rename = "predicted_daily_yield_Wh")]
    pub predicted_daily_yield_wh: Reading,
    pub sun_hours: Reading,
    /// Cloud coverage, 0-100
    pub clouds: Reading,
    /// Day temperature in °C
    pub temp_day: Reading,
}

/// The three series a dashboard is built from.
///
/// Supplied once at load and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub power_data: Vec<PowerRecord>,
    #[serde(default)]
    pub daily_data: Vec<DailyRecord>,
    #[serde(default)]
    pub weather_data: Vec<WeatherRecord>,
}

impl DashboardData {
    /// Datetime of the first power sample, if any
    pub fn latest_power_timestamp(&self) -> Option<&str> {
        latest_timestamp(&self.power_data)
    }
}

/// Datetime of the first record of a power series
pub fn latest_timestamp(power: &[PowerRecord]) -> Option<&str> {
    power.first().map(|r| r.datetime.as_str())
}
