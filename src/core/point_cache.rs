use indexmap::IndexMap;
use indexmap::map::Values;
use tracing::{debug, trace};

use crate::core::{ChartPoint, ChartPointRecord, PointRef};

/// Per-series store of live chart points keyed by data index.
///
/// The cache is the single owner of its points; snapshots and UI layers only
/// hold [`PointRef`]s, so removing a point here tears it down for them.
#[derive(Debug, Default)]
pub struct PointCache {
    points: IndexMap<usize, ChartPoint>,
}

impl PointCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its context index, replacing any previous point.
    pub fn insert(&mut self, record: ChartPointRecord) -> PointRef {
        let index = record.context.index;
        let point = ChartPoint::new(record);
        let point_ref = point.downgrade();
        if self.points.insert(index, point).is_some() {
            debug!(index, "replaced cached chart point");
        } else {
            trace!(index, len = self.points.len(), "cached chart point");
        }
        point_ref
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ChartPoint> {
        self.points.get(&index)
    }

    #[must_use]
    pub fn point_ref(&self, index: usize) -> Option<PointRef> {
        self.points.get(&index).map(ChartPoint::downgrade)
    }

    /// Mutates a cached record in place, as a render pass would.
    ///
    /// Returns `false` when no point is cached under `index`.
    pub fn update<F>(&mut self, index: usize, update: F) -> bool
    where
        F: FnOnce(&mut ChartPointRecord),
    {
        let Some(point) = self.points.get(&index) else {
            return false;
        };
        update(&mut point.borrow_mut());
        true
    }

    /// Drops the visual and label handles of a point whose geometry was recycled.
    pub fn detach_visuals(&mut self, index: usize) -> bool {
        self.update(index, |record| {
            record.context.visual = None;
            record.context.label = None;
        })
    }

    pub fn remove(&mut self, index: usize) -> Option<ChartPoint> {
        let removed = self.points.shift_remove(&index);
        if removed.is_some() {
            debug!(index, "removed cached chart point");
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!(len = self.points.len(), "clearing chart point cache");
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order.
    pub fn iter(&self) -> Values<'_, usize, ChartPoint> {
        self.points.values()
    }
}
