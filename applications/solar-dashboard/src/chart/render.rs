use crate::chart::chartjs::ChartConfig;
use crate::chart::spec::ChartSpec;
use crate::error::Result;

/// Something charts can be drawn onto, addressed by element id
pub trait ChartSurface {
    /// Draw a configuration on the surface with the given id.
    ///
    /// Fails with `SurfaceNotFound` when there is no such surface and with
    /// `SurfaceInUse` when it already holds a chart.
    fn draw_chart(&mut self, id: &str, config: ChartConfig) -> Result<()>;

    /// Remove whatever chart the surface holds
    fn clear_chart(&mut self, id: &str) -> Result<()>;
}

/// Turn a chart spec into its drawing configuration and put it on a surface
pub fn render_chart<S>(surfaces: &mut S, id: &str, spec: &ChartSpec) -> Result<()>
where
    S: ChartSurface + ?Sized,
{
    let config = ChartConfig::from_spec(spec);
    tracing::debug!(
        "Rendering {} chart on {} ({} labels, {} datasets)",
        config.chart_type,
        id,
        config.data.labels.len(),
        config.data.datasets.len()
    );
    surfaces.draw_chart(id, config)
}
