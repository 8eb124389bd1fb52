use crate::core::{ChartHandle, ChartPointContext, OpaqueHandle, SeriesHandle};

/// Position of a snapshotted point in its data source.
///
/// Holds references only. The chart and series handles are fixed at
/// construction; `index`, `data_source`, `visual` and `label` can be updated
/// later because the engine finalizes them in a later render phase than the
/// point itself.
#[derive(Debug, Clone)]
pub struct PointPositionContext {
    chart_handle: ChartHandle,
    series_handle: SeriesHandle,
    index: usize,
    data_source: Option<OpaqueHandle>,
    visual: Option<OpaqueHandle>,
    label: Option<OpaqueHandle>,
}

impl PointPositionContext {
    #[must_use]
    pub fn from_context(source: &ChartPointContext) -> Self {
        Self {
            chart_handle: source.chart.clone(),
            series_handle: source.series.clone(),
            index: source.index,
            data_source: source.data_source.clone(),
            visual: source.visual.clone(),
            label: source.label.clone(),
        }
    }

    #[must_use]
    pub fn chart_handle(&self) -> &ChartHandle {
        &self.chart_handle
    }

    #[must_use]
    pub fn series_handle(&self) -> &SeriesHandle {
        &self.series_handle
    }

    /// Position of the point in the collection used when it was drawn.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn data_source(&self) -> Option<&OpaqueHandle> {
        self.data_source.as_ref()
    }

    #[must_use]
    pub fn visual(&self) -> Option<&OpaqueHandle> {
        self.visual.as_ref()
    }

    #[must_use]
    pub fn label(&self) -> Option<&OpaqueHandle> {
        self.label.as_ref()
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn set_data_source(&mut self, data_source: Option<OpaqueHandle>) {
        self.data_source = data_source;
    }

    pub fn set_visual(&mut self, visual: Option<OpaqueHandle>) {
        self.visual = visual;
    }

    pub fn set_label(&mut self, label: Option<OpaqueHandle>) {
        self.label = label;
    }

    /// Re-copies the late-bound fields from the engine's context.
    ///
    /// Chart and series handles are left untouched.
    pub fn refresh_from(&mut self, source: &ChartPointContext) {
        self.index = source.index;
        self.data_source = source.data_source.clone();
        self.visual = source.visual.clone();
        self.label = source.label.clone();
    }
}
