use crate::models::Reading;

/// Chart description independent of the drawing library.
///
/// Each variant carries its own dataset and axis payload. The payload is turned
/// into a library configuration by [`crate::chart::ChartConfig::from_spec`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    /// Single line over a category axis
    TimeSeries(SeriesChart),
    /// Single bar series over a category axis
    Bar(SeriesChart),
    /// Several lines sharing the category axis, spread over named value axes
    MultiAxisTimeSeries(MultiAxisChart),
}

impl ChartSpec {
    pub fn labels(&self) -> &[String] {
        match self {
            ChartSpec::TimeSeries(c) | ChartSpec::Bar(c) => &c.labels,
            ChartSpec::MultiAxisTimeSeries(c) => &c.labels,
        }
    }

    pub fn datasets(&self) -> Vec<&Dataset> {
        match self {
            ChartSpec::TimeSeries(c) | ChartSpec::Bar(c) => vec![&c.dataset],
            ChartSpec::MultiAxisTimeSeries(c) => c.datasets.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesChart {
    pub labels: Vec<String>,
    pub dataset: Dataset,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiAxisChart {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub x_axis: Axis,
    /// Value axes in declaration order; datasets refer to them by id
    pub y_axes: Vec<NamedAxis>,
}

impl MultiAxisChart {
    pub fn axis(&self, id: &str) -> Option<&Axis> {
        self.y_axes.iter().find(|a| a.id == id).map(|a| &a.axis)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Reading>,
    pub style: LineStyle,
    pub y_axis_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub border_width: u32,
    /// Bezier smoothing, `None` for bars
    pub tension: Option<f64>,
    pub fill: bool,
    pub border_dash: Option<Vec<u32>>,
}

impl LineStyle {
    pub fn line() -> Self {
        Self {
            border_width: 2,
            tension: Some(0.3),
            fill: false,
            border_dash: None,
        }
    }

    pub fn bar() -> Self {
        Self {
            border_width: 1,
            tension: None,
            fill: false,
            border_dash: None,
        }
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn dashed(mut self, dash: u32, gap: u32) -> Self {
        self.border_dash = Some(vec![dash, gap]);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub title: Option<String>,
    pub scale: Option<ScaleKind>,
    pub position: Option<AxisPosition>,
    pub visible: bool,
    /// Whether grid lines extend across the plotting area
    pub grid_on_chart_area: bool,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            scale: None,
            position: None,
            visible: true,
            grid_on_chart_area: true,
        }
    }

    pub fn linear(title: impl Into<String>, position: AxisPosition) -> Self {
        Self {
            scale: Some(ScaleKind::Linear),
            position: Some(position),
            ..Self::titled(title)
        }
    }

    /// Axis that scales its datasets but is never drawn
    pub fn hidden() -> Self {
        Self {
            title: None,
            scale: None,
            position: None,
            visible: false,
            grid_on_chart_area: false,
        }
    }

    pub fn without_chart_area_grid(mut self) -> Self {
        self.grid_on_chart_area = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedAxis {
    pub id: String,
    pub axis: Axis,
}

impl NamedAxis {
    pub fn new(id: impl Into<String>, axis: Axis) -> Self {
        Self {
            id: id.into(),
            axis,
        }
    }
}
