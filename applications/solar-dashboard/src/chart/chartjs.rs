//! Chart.js configuration objects
//!
//! Only the subset of the Chart.js options the dashboard uses is modelled.
//! Colours follow the dark dashboard theme.

use crate::chart::spec::{Axis, AxisPosition, ChartSpec, Dataset, ScaleKind};
use crate::models::Reading;
use serde::Serialize;
use std::collections::BTreeMap;

pub const TEXT_COLOR: &str = "white";
pub const GRID_COLOR: &str = "rgba(255,255,255,0.3)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    pub label: String,
    pub data: Vec<Reading>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: BTreeMap<String, ScaleConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub labels: Colored,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colored {
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleConfig {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<ScaleTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Colored>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Colored>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleTitle {
    pub display: bool,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
}

impl ChartConfig {
    pub fn from_spec(spec: &ChartSpec) -> Self {
        let mut scales = BTreeMap::new();

        let (chart_type, labels, datasets) = match spec {
            ChartSpec::TimeSeries(chart) | ChartSpec::Bar(chart) => {
                scales.insert("x".to_string(), ScaleConfig::from_axis(&chart.x_axis));
                scales.insert("y".to_string(), ScaleConfig::from_axis(&chart.y_axis));
                let chart_type = if matches!(spec, ChartSpec::Bar(_)) {
                    "bar"
                } else {
                    "line"
                };
                (chart_type, &chart.labels, vec![&chart.dataset])
            }
            ChartSpec::MultiAxisTimeSeries(chart) => {
                scales.insert("x".to_string(), ScaleConfig::from_axis(&chart.x_axis));
                for named in &chart.y_axes {
                    scales.insert(named.id.clone(), ScaleConfig::from_axis(&named.axis));
                }
                ("line", &chart.labels, chart.datasets.iter().collect())
            }
        };

        Self {
            chart_type: chart_type.to_string(),
            data: ChartData {
                labels: labels.clone(),
                datasets: datasets.into_iter().map(DatasetConfig::from_dataset).collect(),
            },
            options: ChartOptions {
                responsive: true,
                plugins: Plugins {
                    legend: Legend {
                        labels: Colored::text(),
                    },
                },
                scales,
            },
        }
    }
}

impl DatasetConfig {
    fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            label: dataset.label.clone(),
            data: dataset.data.clone(),
            border_width: dataset.style.border_width,
            tension: dataset.style.tension,
            fill: dataset.style.fill.then_some(true),
            y_axis_id: dataset.y_axis_id.clone(),
            border_dash: dataset.style.border_dash.clone(),
        }
    }
}

impl ScaleConfig {
    fn from_axis(axis: &Axis) -> Self {
        if !axis.visible {
            return Self {
                display: Some(false),
                ..Self::default()
            };
        }

        let grid = if axis.grid_on_chart_area {
            GridConfig {
                color: Some(GRID_COLOR.to_string()),
                draw_on_chart_area: None,
            }
        } else {
            GridConfig {
                color: None,
                draw_on_chart_area: Some(false),
            }
        };

        Self {
            scale_type: axis.scale.map(|s| match s {
                ScaleKind::Linear => "linear".to_string(),
            }),
            position: axis.position.map(|p| match p {
                AxisPosition::Left => "left".to_string(),
                AxisPosition::Right => "right".to_string(),
            }),
            display: None,
            title: axis.title.as_ref().map(|text| ScaleTitle {
                display: true,
                text: text.clone(),
                color: TEXT_COLOR.to_string(),
            }),
            ticks: Some(Colored::text()),
            border: Some(Colored::text()),
            grid: Some(grid),
        }
    }
}

impl Colored {
    fn text() -> Self {
        Self {
            color: TEXT_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::{power_chart, weather_chart, yield_chart};
    use crate::models::{PowerRecord, WeatherRecord};
    use serde_json::json;

    #[test]
    fn test_power_chart_serialization() {
        let spec = power_chart(&[PowerRecord {
            datetime: "2024-01-01T10:00".into(),
            predicted_power_w: json!(150),
        }]);

        let value = serde_json::to_value(ChartConfig::from_spec(&spec)).unwrap();

        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["labels"], json!(["2024-01-01T10:00"]));
        let dataset = &value["data"]["datasets"][0];
        assert_eq!(dataset["label"], "Predicted Power (W)");
        assert_eq!(dataset["data"], json!([150]));
        assert_eq!(dataset["borderWidth"], 2);
        assert_eq!(dataset["tension"], 0.3);
        assert_eq!(dataset["fill"], true);
        assert!(dataset.get("yAxisID").is_none());

        assert_eq!(value["options"]["responsive"], true);
        assert_eq!(value["options"]["plugins"]["legend"]["labels"]["color"], "white");
        assert_eq!(value["options"]["scales"]["x"]["title"]["text"], "Time");
        assert_eq!(value["options"]["scales"]["y"]["title"]["text"], "Power (W)");
        assert_eq!(
            value["options"]["scales"]["y"]["grid"]["color"],
            "rgba(255,255,255,0.3)"
        );
    }

    #[test]
    fn test_bar_chart_has_no_tension_or_fill() {
        let value = serde_json::to_value(ChartConfig::from_spec(&yield_chart(&[]))).unwrap();

        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["labels"], json!([]));
        let dataset = &value["data"]["datasets"][0];
        assert_eq!(dataset["data"], json!([]));
        assert_eq!(dataset["borderWidth"], 1);
        assert!(dataset.get("tension").is_none());
        assert!(dataset.get("fill").is_none());
    }

    #[test]
    fn test_weather_scales() {
        let spec = weather_chart(&[WeatherRecord {
            date: "2024-01-01".into(),
            predicted_daily_yield_wh: json!(4200),
            sun_hours: json!(6.5),
            clouds: json!(20),
            temp_day: json!(29.1),
        }]);

        let config = ChartConfig::from_spec(&spec);
        let keys: Vec<&str> = config.options.scales.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["x", "yOther", "yTemp", "yWh"]);

        let value = serde_json::to_value(&config).unwrap();
        let scales = &value["options"]["scales"];
        assert_eq!(scales["yOther"], json!({ "display": false }));
        assert_eq!(scales["yWh"]["type"], "linear");
        assert_eq!(scales["yWh"]["position"], "left");
        assert_eq!(scales["yWh"]["title"]["text"], "Energy Yield (Wh)");
        assert_eq!(scales["yTemp"]["position"], "right");
        assert_eq!(scales["yTemp"]["grid"], json!({ "drawOnChartArea": false }));
        assert_eq!(scales["yTemp"]["border"]["color"], "white");

        let datasets = value["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 4);
        assert_eq!(datasets[2]["yAxisID"], "yOther");
        assert_eq!(datasets[3]["yAxisID"], "yTemp");
        assert_eq!(datasets[3]["borderDash"], json!([4, 4]));
    }
}
