//! The ordered series collection owning every series of a chart.

use crate::charts::series::{Series, SeriesOptions};
use crate::error::Result;

/// A chart, reduced to what its series need: the ordered collection that
/// assigns indices and owns the series for their whole lifetime.
///
/// The collection is the sole factory for series; there is no detach or
/// reattach, so an index handed out by [`Chart::add_series`] stays valid.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    series: Vec<Series>,
}

impl Chart {
    /// Create a chart with no series.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a series at the end of the collection and return it.
    ///
    /// The series' index is its final position, assigned here. Fails if the
    /// options carry an invalid order override.
    pub fn add_series(&mut self, options: SeriesOptions) -> Result<&mut Series> {
        let series = Series::new(self.series.len() as u32, options)?;
        self.series.push(series);
        let last = self.series.len() - 1;
        Ok(&mut self.series[last])
    }

    /// The series in attach order.
    #[inline]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Mutable access to the series in attach order.
    #[inline]
    pub fn series_mut(&mut self) -> &mut [Series] {
        &mut self.series
    }

    /// Number of series attached to this chart.
    #[inline]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}
