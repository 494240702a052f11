//! In-memory dashboard document
//!
//! Holds the named elements the renderer and the ticker write to: chart
//! canvases and text displays.

use crate::chart::{ChartConfig, ChartSurface};
use crate::config::SurfaceConfig;
use crate::error::{AppError, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

/// Target for plain text updates, addressed by element id
pub trait TextDisplay: Send + Sync {
    fn set_text(&self, id: &str, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Canvas(Option<ChartConfig>),
    Text(String),
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with the three chart canvases and two text displays of the dashboard
    pub fn dashboard(surfaces: &SurfaceConfig) -> Self {
        Self::new()
            .with_canvas(&surfaces.power_chart)
            .with_canvas(&surfaces.yield_chart)
            .with_canvas(&surfaces.weather_chart)
            .with_text(&surfaces.system_time)
            .with_text(&surfaces.data_timestamp)
    }

    pub fn with_canvas(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string(), Element::Canvas(None));
        self
    }

    pub fn with_text(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string(), Element::Text(String::new()));
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn chart(&self, id: &str) -> Option<&ChartConfig> {
        match self.elements.get(id) {
            Some(Element::Canvas(chart)) => chart.as_ref(),
            _ => None,
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        match self.elements.get(id) {
            Some(Element::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Ids of canvases currently holding a chart, sorted
    pub fn drawn_charts(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .elements
            .iter()
            .filter(|(_, e)| matches!(e, Element::Canvas(Some(_))))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Every text display with its current content
    pub fn texts(&self) -> BTreeMap<String, String> {
        self.elements
            .iter()
            .filter_map(|(id, e)| match e {
                Element::Text(text) => Some((id.clone(), text.clone())),
                Element::Canvas(_) => None,
            })
            .collect()
    }

    pub fn write_text(&mut self, id: &str, text: &str) -> Result<()> {
        match self.elements.get_mut(id) {
            Some(Element::Text(current)) => {
                current.clear();
                current.push_str(text);
                Ok(())
            }
            Some(Element::Canvas(_)) => Err(AppError::WrongElement {
                id: id.to_string(),
                expected: "text display",
            }),
            None => Err(AppError::SurfaceNotFound(id.to_string())),
        }
    }

    fn canvas_mut(&mut self, id: &str) -> Result<&mut Option<ChartConfig>> {
        match self.elements.get_mut(id) {
            Some(Element::Canvas(chart)) => Ok(chart),
            Some(Element::Text(_)) => Err(AppError::WrongElement {
                id: id.to_string(),
                expected: "canvas",
            }),
            None => Err(AppError::SurfaceNotFound(id.to_string())),
        }
    }
}

impl ChartSurface for Page {
    fn draw_chart(&mut self, id: &str, config: ChartConfig) -> Result<()> {
        let canvas = self.canvas_mut(id)?;
        if canvas.is_some() {
            return Err(AppError::SurfaceInUse(id.to_string()));
        }
        *canvas = Some(config);
        Ok(())
    }

    fn clear_chart(&mut self, id: &str) -> Result<()> {
        *self.canvas_mut(id)? = None;
        Ok(())
    }
}

/// Page shared between the ticker and readers
#[derive(Debug, Clone, Default)]
pub struct SharedPage(Arc<Mutex<Page>>);

impl SharedPage {
    pub fn new(page: Page) -> Self {
        Self(Arc::new(Mutex::new(page)))
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, Page>> {
        self.0
            .lock()
            .map_err(|_| AppError::Internal("page lock poisoned".to_string()))
    }
}

impl TextDisplay for SharedPage {
    fn set_text(&self, id: &str, text: &str) -> Result<()> {
        self.lock()?.write_text(id, text)
    }
}

impl ChartSurface for SharedPage {
    fn draw_chart(&mut self, id: &str, config: ChartConfig) -> Result<()> {
        self.lock()?.draw_chart(id, config)
    }

    fn clear_chart(&mut self, id: &str) -> Result<()> {
        self.lock()?.clear_chart(id)
    }
}
