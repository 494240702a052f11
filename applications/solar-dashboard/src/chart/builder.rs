use crate::chart::spec::{
    Axis, AxisPosition, ChartSpec, Dataset, LineStyle, MultiAxisChart, NamedAxis, SeriesChart,
};
use crate::models::{DailyRecord, PowerRecord, Reading, WeatherRecord};

pub const AXIS_ENERGY: &str = "yWh";
pub const AXIS_TEMPERATURE: &str = "yTemp";
pub const AXIS_OTHER: &str = "yOther";

/// Hourly predicted power as a filled line
pub fn power_chart(records: &[PowerRecord]) -> ChartSpec {
    ChartSpec::TimeSeries(SeriesChart {
        labels: records.iter().map(|r| r.datetime.clone()).collect(),
        dataset: Dataset {
            label: "Predicted Power (W)".into(),
            data: project(records, |r| &r.predicted_power_w),
            style: LineStyle::line().filled(),
            y_axis_id: None,
        },
        x_axis: Axis::titled("Time"),
        y_axis: Axis::titled("Power (W)"),
    })
}

/// Predicted daily energy as bars
pub fn yield_chart(records: &[DailyRecord]) -> ChartSpec {
    ChartSpec::Bar(SeriesChart {
        labels: records.iter().map(|r| r.date.clone()).collect(),
        dataset: Dataset {
            label: "Energy (Wh)".into(),
            data: project(records, |r| &r.predicted_daily_yield_wh),
            style: LineStyle::bar(),
            y_axis_id: None,
        },
        x_axis: Axis::titled("Date"),
        y_axis: Axis::titled("Energy (Wh)"),
    })
}

/// Daily yield plotted against the weather factors behind it.
///
/// Sun hours share the Wh axis with the yield. Cloud coverage gets its own
/// scale which is not drawn, temperature sits on the right.
pub fn weather_chart(records: &[WeatherRecord]) -> ChartSpec {
    let line = |label: &str, axis: &str, data: Vec<Reading>, style: LineStyle| Dataset {
        label: label.into(),
        data,
        style,
        y_axis_id: Some(axis.into()),
    };

    ChartSpec::MultiAxisTimeSeries(MultiAxisChart {
        labels: records.iter().map(|r| r.date.clone()).collect(),
        datasets: vec![
            line(
                "Daily Yield (Wh)",
                AXIS_ENERGY,
                project(records, |r| &r.predicted_daily_yield_wh),
                LineStyle::line(),
            ),
            line(
                "Sun Hours",
                AXIS_ENERGY,
                project(records, |r| &r.sun_hours),
                LineStyle::line(),
            ),
            line(
                "Cloud Coverage (%)",
                AXIS_OTHER,
                project(records, |r| &r.clouds),
                LineStyle::line(),
            ),
            line(
                "Temperature (°C)",
                AXIS_TEMPERATURE,
                project(records, |r| &r.temp_day),
                LineStyle::line().dashed(4, 4),
            ),
        ],
        x_axis: Axis::titled("Date"),
        y_axes: vec![
            NamedAxis::new(
                AXIS_ENERGY,
                Axis::linear("Energy Yield (Wh)", AxisPosition::Left),
            ),
            NamedAxis::new(
                AXIS_TEMPERATURE,
                Axis::linear("Temperature (°C)", AxisPosition::Right).without_chart_area_grid(),
            ),
            NamedAxis::new(AXIS_OTHER, Axis::hidden()),
        ],
    })
}

fn project<T>(records: &[T], field: impl Fn(&T) -> &Reading) -> Vec<Reading> {
    records.iter().map(|r| field(r).clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn power(datetime: &str, watts: f64) -> PowerRecord {
        PowerRecord {
            datetime: datetime.into(),
            predicted_power_w: json!(watts),
        }
    }

    fn weather(date: &str, wh: f64, sun: f64, clouds: f64, temp: f64) -> WeatherRecord {
        WeatherRecord {
            date: date.into(),
            predicted_daily_yield_wh: json!(wh),
            sun_hours: json!(sun),
            clouds: json!(clouds),
            temp_day: json!(temp),
        }
    }

    #[test]
    fn test_power_chart_preserves_length_and_order() {
        let records = vec![
            power("2024-01-01T12:00", 300.0),
            power("2024-01-01T10:00", 150.0),
            power("2024-01-01T11:00", 220.5),
        ];

        let spec = power_chart(&records);

        let ChartSpec::TimeSeries(chart) = spec else {
            panic!("Expected TimeSeries chart");
        };
        assert_eq!(
            chart.labels,
            vec!["2024-01-01T12:00", "2024-01-01T10:00", "2024-01-01T11:00"]
        );
        assert_eq!(
            chart.dataset.data,
            vec![json!(300.0), json!(150.0), json!(220.5)]
        );
        assert_eq!(chart.dataset.label, "Predicted Power (W)");
        assert_eq!(chart.dataset.style.border_width, 2);
        assert_eq!(chart.dataset.style.tension, Some(0.3));
        assert!(chart.dataset.style.fill);
    }

    #[test]
    fn test_single_power_point() {
        let spec = power_chart(&[PowerRecord {
            datetime: "2024-01-01T10:00".into(),
            predicted_power_w: json!(150),
        }]);

        assert_eq!(spec.labels(), ["2024-01-01T10:00"]);
        assert_eq!(spec.datasets()[0].data, vec![json!(150)]);
    }

    #[test]
    fn test_yield_chart_empty_input() {
        let spec = yield_chart(&[]);

        let ChartSpec::Bar(chart) = spec else {
            panic!("Expected Bar chart");
        };
        assert!(chart.labels.is_empty());
        assert!(chart.dataset.data.is_empty());
        assert_eq!(chart.dataset.label, "Energy (Wh)");
        assert_eq!(chart.dataset.style.border_width, 1);
        assert_eq!(chart.dataset.style.tension, None);
    }

    #[test]
    fn test_weather_chart_has_four_datasets_on_three_axes() {
        let records = vec![
            weather("2024-01-01", 4200.0, 6.5, 20.0, 29.0),
            weather("2024-01-02", 3100.0, 4.0, 65.0, 27.5),
        ];

        let ChartSpec::MultiAxisTimeSeries(chart) = weather_chart(&records) else {
            panic!("Expected MultiAxisTimeSeries chart");
        };

        assert_eq!(chart.datasets.len(), 4);
        let ids: Vec<&str> = chart.y_axes.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["yWh", "yTemp", "yOther"]);

        for dataset in &chart.datasets {
            assert_eq!(dataset.data.len(), records.len());
            let axis = dataset.y_axis_id.as_deref().unwrap();
            assert!(chart.axis(axis).is_some(), "unknown axis {axis}");
        }

        assert!(!chart.axis("yOther").unwrap().visible);
        let temp = chart.axis("yTemp").unwrap();
        assert_eq!(temp.position, Some(AxisPosition::Right));
        assert!(!temp.grid_on_chart_area);
        assert_eq!(chart.datasets[3].style.border_dash, Some(vec![4, 4]));
    }

    #[test]
    fn test_sun_hours_share_the_energy_axis() {
        // Sun hours and Wh are plotted on one scale despite differing units.
        let ChartSpec::MultiAxisTimeSeries(chart) =
            weather_chart(&[weather("2024-01-01", 4200.0, 6.5, 20.0, 29.0)])
        else {
            panic!("Expected MultiAxisTimeSeries chart");
        };

        let sun = chart
            .datasets
            .iter()
            .find(|d| d.label == "Sun Hours")
            .unwrap();
        assert_eq!(sun.y_axis_id.as_deref(), Some(AXIS_ENERGY));
        assert_eq!(chart.datasets[0].y_axis_id.as_deref(), Some(AXIS_ENERGY));
    }
}
