use tracing::{trace, warn};

use crate::core::{ChartPoint, ChartPointRecord, ChartSeries, PointRef};
use crate::error::{ChartError, ChartResult, StaleTarget};

use super::{
    PointPositionContext, PointSnapshotView, SnapshotConfig, StackedAggregate, TextCapturePolicy,
};

#[derive(Debug, Clone)]
enum PointText {
    /// Back-reference to the record the snapshot was taken from.
    Live(PointRef),
    Frozen { tooltip: String, data_label: String },
}

/// Read-only view of a chart point at the moment a UI element shows it.
///
/// Scalars, stacking figures and position are copied at capture, so later
/// engine passes never leak into them and edits to the snapshot never reach
/// the engine. Text follows the [`TextCapturePolicy`] the snapshot was built
/// with: live snapshots format against the original record on every read,
/// frozen snapshots keep the text formatted at capture.
///
/// Snapshots are `!Send`; they must be built and read on the thread that owns
/// the chart. Use [`PointSnapshot::to_view`] to hand data to another thread.
#[derive(Debug, Clone)]
pub struct PointSnapshot {
    pub is_null: bool,
    pub primary_value: f64,
    pub secondary_value: f64,
    pub tertiary_value: f64,
    pub quaternary_value: f64,
    pub quinary_value: f64,
    /// `None` when the point does not belong to a stacked series.
    pub stacked: Option<StackedAggregate>,
    context: PointPositionContext,
    text: PointText,
}

impl PointSnapshot {
    /// Captures `point` with live text.
    pub fn new(point: &ChartPoint) -> ChartResult<Self> {
        Self::with_config(point, SnapshotConfig::default())
    }

    pub fn with_config(point: &ChartPoint, config: SnapshotConfig) -> ChartResult<Self> {
        let record = point
            .try_borrow()
            .map_err(|_| ChartError::RecordBorrowed)?;
        Self::from_record(&record, point.downgrade(), config)
    }

    /// Captures the point behind `source`.
    ///
    /// Fails with [`ChartError::InvalidRecord`] when the reference no longer
    /// (or never did) resolve to a live record.
    pub fn capture(source: &PointRef, config: SnapshotConfig) -> ChartResult<Self> {
        let point = source.upgrade().ok_or_else(|| {
            ChartError::InvalidRecord("reference does not resolve to a live chart point".to_owned())
        })?;
        Self::with_config(&point, config)
    }

    fn from_record(
        record: &ChartPointRecord,
        source: PointRef,
        config: SnapshotConfig,
    ) -> ChartResult<Self> {
        let text = match config.text_policy {
            TextCapturePolicy::Live => PointText::Live(source),
            TextCapturePolicy::Frozen => {
                let series = record.context.series.upgrade()?;
                PointText::Frozen {
                    tooltip: series.tooltip_text(record),
                    data_label: series.data_label_text(record),
                }
            }
        };

        trace!(
            index = record.context.index,
            policy = ?config.text_policy,
            stacked = record.stacked.is_some(),
            "captured point snapshot"
        );

        Ok(Self {
            is_null: record.is_null,
            primary_value: record.primary_value,
            secondary_value: record.secondary_value,
            tertiary_value: record.tertiary_value,
            quaternary_value: record.quaternary_value,
            quinary_value: record.quinary_value,
            stacked: record.stacked.as_ref().map(StackedAggregate::from_stacked),
            context: PointPositionContext::from_context(&record.context),
            text,
        })
    }

    #[must_use]
    pub fn context(&self) -> &PointPositionContext {
        &self.context
    }

    /// Mutable access for the engine to finish late-bound position fields.
    pub fn context_mut(&mut self) -> &mut PointPositionContext {
        &mut self.context
    }

    /// The five scalar measurements in order, primary first.
    #[must_use]
    pub fn values(&self) -> [f64; 5] {
        [
            self.primary_value,
            self.secondary_value,
            self.tertiary_value,
            self.quaternary_value,
            self.quinary_value,
        ]
    }

    #[must_use]
    pub fn text_policy(&self) -> TextCapturePolicy {
        match self.text {
            PointText::Live(_) => TextCapturePolicy::Live,
            PointText::Frozen { .. } => TextCapturePolicy::Frozen,
        }
    }

    /// Whether the record this snapshot was taken from is still alive.
    ///
    /// Always `false` for frozen snapshots, which keep no reference.
    #[must_use]
    pub fn is_live(&self) -> bool {
        match &self.text {
            PointText::Live(source) => source.is_alive(),
            PointText::Frozen { .. } => false,
        }
    }

    /// Tooltip text produced by the owning series.
    pub fn tooltip_text(&self) -> ChartResult<String> {
        match &self.text {
            PointText::Live(source) => {
                format_live(source, |series, record| series.tooltip_text(record))
            }
            PointText::Frozen { tooltip, .. } => Ok(tooltip.clone()),
        }
    }

    /// Data-label text produced by the owning series.
    pub fn data_label_text(&self) -> ChartResult<String> {
        match &self.text {
            PointText::Live(source) => {
                format_live(source, |series, record| series.data_label_text(record))
            }
            PointText::Frozen { data_label, .. } => Ok(data_label.clone()),
        }
    }

    /// Pulls `index`, `data_source`, `visual` and `label` from the live record.
    pub fn refresh_position(&mut self) -> ChartResult<()> {
        let PointText::Live(source) = &self.text else {
            return Err(ChartError::stale(StaleTarget::Record));
        };
        let point = source
            .upgrade()
            .ok_or_else(|| ChartError::stale(StaleTarget::Record))?;
        self.refresh_position_from(&point)
    }

    /// Same as [`PointSnapshot::refresh_position`] against an explicit point,
    /// usable for frozen snapshots.
    pub fn refresh_position_from(&mut self, point: &ChartPoint) -> ChartResult<()> {
        let record = point
            .try_borrow()
            .map_err(|_| ChartError::RecordBorrowed)?;
        self.context.refresh_from(&record.context);
        trace!(index = self.context.index(), "refreshed snapshot position");
        Ok(())
    }

    /// Plain, thread-safe copy with both texts resolved.
    ///
    /// A text that cannot be produced because its record or series is gone is
    /// left out instead of failing the whole view.
    #[must_use]
    pub fn to_view(&self) -> PointSnapshotView {
        let index = self.context.index();
        PointSnapshotView {
            is_null: self.is_null,
            primary_value: self.primary_value,
            secondary_value: self.secondary_value,
            tertiary_value: self.tertiary_value,
            quaternary_value: self.quaternary_value,
            quinary_value: self.quinary_value,
            stacked: self.stacked,
            index,
            has_data_source: self.context.data_source().is_some(),
            has_visual: self.context.visual().is_some(),
            has_label: self.context.label().is_some(),
            text_policy: self.text_policy(),
            tooltip_text: text_or_omit(self.tooltip_text(), "tooltip", index),
            data_label_text: text_or_omit(self.data_label_text(), "data_label", index),
        }
    }
}

impl TryFrom<&PointRef> for PointSnapshot {
    type Error = ChartError;

    fn try_from(source: &PointRef) -> ChartResult<Self> {
        Self::capture(source, SnapshotConfig::default())
    }
}

fn format_live<F>(source: &PointRef, format: F) -> ChartResult<String>
where
    F: FnOnce(&dyn ChartSeries, &ChartPointRecord) -> String,
{
    let point = source
        .upgrade()
        .ok_or_else(|| ChartError::stale(StaleTarget::Record))?;
    let record = point
        .try_borrow()
        .map_err(|_| ChartError::RecordBorrowed)?;
    let series = record.context.series.upgrade()?;
    Ok(format(&*series, &*record))
}

fn text_or_omit(result: ChartResult<String>, kind: &'static str, index: usize) -> Option<String> {
    match result {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(error = %err, kind, index, "omitting point text from snapshot view");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::PointSnapshot;
    use crate::api::{SnapshotConfig, TextCapturePolicy};
    use crate::core::{
        ChartHandle, ChartPoint, ChartPointContext, ChartPointRecord, FormattedSeries, PointRef,
        SeriesHandle,
    };
    use crate::error::ChartError;

    fn point(series: &Rc<FormattedSeries>) -> ChartPoint {
        let context =
            ChartPointContext::new(ChartHandle::detached(), SeriesHandle::new(series), 2);
        ChartPoint::new(ChartPointRecord::new(context).with_values(4.0, 1.0))
    }

    #[test]
    fn default_point_ref_is_invalid_record() {
        let err = PointSnapshot::try_from(&PointRef::default()).expect_err("uninitialized");
        assert!(matches!(err, ChartError::InvalidRecord(_)));
    }

    #[test]
    fn capture_while_engine_mutates_is_rejected() {
        let series = Rc::new(FormattedSeries::new("s"));
        let point = point(&series);

        let _guard = point.borrow_mut();
        let err = PointSnapshot::new(&point).expect_err("record borrowed");
        assert!(matches!(err, ChartError::RecordBorrowed));
    }

    #[test]
    fn live_text_read_during_engine_mutation_is_rejected() {
        let series = Rc::new(FormattedSeries::new("s"));
        let point = point(&series);
        let snapshot = PointSnapshot::new(&point).expect("snapshot");

        let _guard = point.borrow_mut();
        assert!(matches!(
            snapshot.tooltip_text(),
            Err(ChartError::RecordBorrowed)
        ));
    }

    #[test]
    fn frozen_snapshot_does_not_hold_the_record() {
        let series = Rc::new(FormattedSeries::new("s"));
        let point = point(&series);
        let snapshot =
            PointSnapshot::with_config(&point, SnapshotConfig::frozen()).expect("snapshot");
        drop(point);

        assert_eq!(snapshot.text_policy(), TextCapturePolicy::Frozen);
        assert!(!snapshot.is_live());
        assert_eq!(snapshot.tooltip_text().expect("frozen text"), "s: 4.00");
    }

    #[test]
    fn frozen_capture_fails_when_series_is_gone() {
        let series = Rc::new(FormattedSeries::new("s"));
        let point = point(&series);
        drop(series);

        let err = PointSnapshot::with_config(&point, SnapshotConfig::frozen())
            .expect_err("series torn down");
        assert!(err.is_stale_reference());
    }
}
