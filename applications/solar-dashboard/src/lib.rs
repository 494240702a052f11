pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod page;
pub mod provider;
pub mod ticker;

// Re-export commonly used items
pub use chart::{ChartConfig, ChartSpec};
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{AppError, Result};
pub use models::{DailyRecord, DashboardData, PowerRecord, WeatherRecord};
pub use page::{Page, SharedPage};
pub use provider::{DataProvider, JsonFileProvider, StaticProvider};
pub use ticker::{ClockTicker, TickerHandle};
