//! Charting collaborator - Datasets and the render/replace lifecycle.
//!
//! A page owns one [`ChartSlot`] per canvas. Showing new data destroys the
//! previous chart before rendering the replacement, so at most one chart
//! instance is ever live per slot.

pub mod datasets;

use crate::errors::{Error, Result};
use serde::Serialize;
use tracing::debug;

/// Chart styles used by the dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Ring split by share
    Doughnut,
    /// Vertical bars per label
    Bar,
    /// Points joined in label order
    Line,
    /// Filled circle split by share
    Pie,
}

/// Labels paired index-for-index with values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Caption above the chart
    pub title: String,
    /// How the values are drawn
    pub kind: ChartKind,
    /// One label per value
    pub labels: Vec<String>,
    /// Plotted values
    pub values: Vec<f64>,
}

impl ChartData {
    /// Builds a dataset from `(label, value)` pairs.
    pub fn from_pairs<L: Into<String>>(
        title: impl Into<String>,
        kind: ChartKind,
        pairs: impl IntoIterator<Item = (L, f64)>,
    ) -> Self {
        let (labels, values) = pairs.into_iter().map(|(l, v)| (l.into(), v)).unzip();
        Self {
            title: title.into(),
            kind,
            labels,
            values,
        }
    }

    /// Whether there is nothing to plot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checks that every label has exactly one value.
    pub fn validate(&self) -> Result<()> {
        if self.labels.len() != self.values.len() {
            return Err(Error::Chart {
                message: format!(
                    "'{}' has {} labels but {} values",
                    self.title,
                    self.labels.len(),
                    self.values.len()
                ),
            });
        }
        Ok(())
    }
}

/// Draws charts and releases them.
pub trait ChartRenderer {
    /// Live chart instance owned by the renderer
    type Handle;

    /// Draws `data` and returns the live instance.
    fn render(&mut self, data: &ChartData) -> Result<Self::Handle>;

    /// Releases a live instance.
    fn destroy(&mut self, handle: Self::Handle);
}

/// One chart position on a page.
pub struct ChartSlot<R: ChartRenderer> {
    renderer: R,
    live: Option<(R::Handle, ChartData)>,
}

impl<R: ChartRenderer> ChartSlot<R> {
    /// Creates an empty slot drawing through `renderer`.
    pub const fn new(renderer: R) -> Self {
        Self {
            renderer,
            live: None,
        }
    }

    /// Shows `data`, replacing any live chart.
    ///
    /// Returns `Ok(false)` without touching the renderer when `data` equals
    /// what is already shown. Malformed data is rejected before the live
    /// chart is destroyed.
    pub fn show(&mut self, data: ChartData) -> Result<bool> {
        data.validate()?;
        if self.current() == Some(&data) {
            return Ok(false);
        }

        self.clear();
        let handle = self.renderer.render(&data)?;
        debug!(title = %data.title, points = data.values.len(), "Rendered chart");
        self.live = Some((handle, data));
        Ok(true)
    }

    /// Destroys the live chart, if any.
    pub fn clear(&mut self) {
        if let Some((handle, data)) = self.live.take() {
            self.renderer.destroy(handle);
            debug!(title = %data.title, "Destroyed chart");
        }
    }

    /// Data of the live chart.
    #[must_use]
    pub fn current(&self) -> Option<&ChartData> {
        self.live.as_ref().map(|(_, data)| data)
    }

    /// The renderer drawing this slot.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: ChartRenderer> Drop for ChartSlot<R> {
    fn drop(&mut self) {
        self.clear();
    }
}
