use std::sync::Arc;
use tracing::info;

use crate::chart::{power_chart, render_chart, weather_chart, yield_chart, ChartSurface};
use crate::config::{ClockConfig, SurfaceConfig};
use crate::error::Result;
use crate::models::DashboardData;
use crate::page::SharedPage;
use crate::ticker::{ClockTicker, TickerHandle};

/// Draw the power, yield and weather charts on their surfaces.
///
/// Stops at the first surface that cannot be drawn on.
pub fn render_charts<S>(surfaces: &mut S, ids: &SurfaceConfig, data: &DashboardData) -> Result<()>
where
    S: ChartSurface + ?Sized,
{
    render_chart(surfaces, &ids.power_chart, &power_chart(&data.power_data))?;
    render_chart(surfaces, &ids.yield_chart, &yield_chart(&data.daily_data))?;
    render_chart(surfaces, &ids.weather_chart, &weather_chart(&data.weather_data))?;
    Ok(())
}

/// A dashboard with its charts drawn and its clock running
pub struct Dashboard {
    page: SharedPage,
    ticker: TickerHandle,
}

impl Dashboard {
    /// Page-ready entry point: render every chart, then start the clock ticker
    pub fn mount(
        page: SharedPage,
        data: &DashboardData,
        surfaces: &SurfaceConfig,
        clock: &ClockConfig,
    ) -> Result<Self> {
        let mut target = page.clone();
        render_charts(&mut target, surfaces, data)?;
        info!("Rendered {} charts", page.lock()?.drawn_charts().len());

        let ticker = ClockTicker::new(
            Arc::new(page.clone()),
            data.power_data.clone().into(),
            surfaces,
            clock,
        )?
        .start()?;

        Ok(Self { page, ticker })
    }

    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Stop the clock ticker; the drawn charts stay on the page
    pub async fn shutdown(self) -> Result<u64> {
        self.ticker.stop().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{DailyRecord, PowerRecord};
    use crate::page::Page;
    use serde_json::json;

    fn sample_data() -> DashboardData {
        DashboardData {
            power_data: vec![PowerRecord {
                datetime: "2024-01-01T10:00".into(),
                predicted_power_w: json!(150),
            }],
            daily_data: vec![DailyRecord {
                date: "2024-01-01".into(),
                predicted_daily_yield_wh: json!(4200),
            }],
            weather_data: vec![],
        }
    }

    #[test]
    fn test_render_charts_on_dashboard_page() {
        let surfaces = SurfaceConfig::default();
        let mut page = Page::dashboard(&surfaces);

        render_charts(&mut page, &surfaces, &sample_data()).unwrap();

        assert_eq!(
            page.drawn_charts(),
            vec!["powerChart", "weatherChart", "yieldChart"]
        );
        assert_eq!(page.chart("yieldChart").unwrap().chart_type, "bar");
    }

    #[test]
    fn test_render_charts_missing_surface_aborts() {
        let surfaces = SurfaceConfig::default();
        let mut page = Page::new()
            .with_canvas("powerChart")
            .with_canvas("weatherChart");

        let err = render_charts(&mut page, &surfaces, &sample_data()).unwrap_err();

        assert!(matches!(err, AppError::SurfaceNotFound(id) if id == "yieldChart"));
        assert!(page.chart("weatherChart").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_fills_page() {
        let surfaces = SurfaceConfig::default();
        let page = SharedPage::new(Page::dashboard(&surfaces));

        let dashboard =
            Dashboard::mount(page, &sample_data(), &surfaces, &ClockConfig::default()).unwrap();

        {
            let page = dashboard.page().lock().unwrap();
            assert_eq!(page.drawn_charts().len(), 3);
            assert_eq!(page.text("dataTimestamp"), Some("2024-01-01T10:00"));
            assert!(!page.text("systemTime").unwrap().is_empty());
        }

        assert!(dashboard.is_running());
        assert_eq!(dashboard.shutdown().await.unwrap(), 1);
    }
}
