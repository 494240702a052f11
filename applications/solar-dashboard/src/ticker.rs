//! Clock ticker
//!
//! Refreshes the system time and data timestamp displays on a fixed interval.
//! A [`ClockTicker`] is idle until [`ClockTicker::start`] turns it into a
//! running [`TickerHandle`].

use chrono::{DateTime, Local};
use std::fmt::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, trace};

use crate::config::{ClockConfig, SurfaceConfig};
use crate::error::{AppError, Result};
use crate::models::{latest_timestamp, PowerRecord};
use crate::page::TextDisplay;

/// Source of wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

pub struct ClockTicker {
    display: Arc<dyn TextDisplay>,
    clock: Arc<dyn Clock>,
    power_data: Arc<[PowerRecord]>,
    system_time_id: String,
    data_timestamp_id: String,
    period: Duration,
    time_format: String,
    placeholder: String,
}

impl ClockTicker {
    /// Fails with `Config` when the clock settings cannot drive a ticker
    pub fn new(
        display: Arc<dyn TextDisplay>,
        power_data: Arc<[PowerRecord]>,
        surfaces: &SurfaceConfig,
        settings: &ClockConfig,
    ) -> Result<Self> {
        settings.validate()?;

        Ok(Self {
            display,
            clock: Arc::new(SystemClock),
            power_data,
            system_time_id: surfaces.system_time.clone(),
            data_timestamp_id: surfaces.data_timestamp.clone(),
            period: settings.interval(),
            time_format: settings.time_format.clone(),
            placeholder: settings.placeholder.clone(),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Text for the data timestamp display
    pub fn data_timestamp(&self) -> &str {
        latest_timestamp(&self.power_data).unwrap_or(self.placeholder.as_str())
    }

    /// Write the current time and the data timestamp once.
    ///
    /// Both displays are written even if the first write fails; the first
    /// error is returned.
    pub fn update(&self) -> Result<()> {
        let mut now = String::new();
        write!(now, "{}", self.clock.now().format(&self.time_format))?;

        let system_time = self.display.set_text(&self.system_time_id, &now);
        let data_timestamp = self.display.set_text(&self.data_timestamp_id, self.data_timestamp());
        system_time.and(data_timestamp)?;

        trace!("Clock ticked: {}", now);
        Ok(())
    }

    /// Refresh once right away, then keep refreshing every period.
    ///
    /// The first refresh runs before this returns and its error is returned,
    /// so a page without the displays is caught at startup. Later failures
    /// are logged and the ticker keeps going.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(self) -> Result<TickerHandle> {
        self.update()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        info!("Clock ticker started (interval: {}ms)", self.period.as_millis());
        let task = tokio::spawn(self.run(shutdown_rx));

        Ok(TickerHandle {
            shutdown: Some(shutdown_tx),
            task,
        })
    }

    async fn run(self, mut shutdown: oneshot::Receiver<()>) -> u64 {
        let mut ticks = interval(self.period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // The first tick completes immediately and the initial refresh already happened
        ticks.tick().await;

        let mut updates: u64 = 1;
        let mut detached = false;

        loop {
            tokio::select! {
                res = &mut shutdown, if !detached => {
                    match res {
                        Ok(()) => break,
                        // Handle dropped without stop: run for the lifetime of the runtime
                        Err(_) => detached = true,
                    }
                }
                _ = ticks.tick() => {
                    match self.update() {
                        Ok(()) => updates += 1,
                        Err(e) => error!("Clock ticker update failed: {}", e),
                    }
                }
            }
        }

        info!("Clock ticker stopped after {} updates", updates);
        updates
    }
}

/// A running ticker
pub struct TickerHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<u64>,
}

impl TickerHandle {
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the ticker and return how many refreshes completed without error
    pub async fn stop(mut self) -> Result<u64> {
        if let Some(tx) = self.shutdown.take() {
            // The task may already be gone; the join below reports why
            let _ = tx.send(());
        }

        self.task
            .await
            .map_err(|e| AppError::Internal(format!("clock ticker task failed: {}", e)))
    }
}
