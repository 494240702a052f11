pub mod builder;
pub mod chartjs;
pub mod render;
pub mod spec;

pub use builder::{power_chart, weather_chart, yield_chart};
pub use chartjs::ChartConfig;
pub use render::{render_chart, ChartSurface};
pub use spec::{
    Axis, AxisPosition, ChartSpec, Dataset, LineStyle, MultiAxisChart, NamedAxis, SeriesChart,
};
