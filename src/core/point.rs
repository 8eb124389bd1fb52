use std::cell::{BorrowError, Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use crate::core::ChartPointRecord;

/// Shared, engine-owned chart point.
///
/// The engine's point cache holds the owning `ChartPoint`; everything else
/// should keep a [`PointRef`].
#[derive(Debug, Clone)]
pub struct ChartPoint(Rc<RefCell<ChartPointRecord>>);

impl ChartPoint {
    #[must_use]
    pub fn new(record: ChartPointRecord) -> Self {
        Self(Rc::new(RefCell::new(record)))
    }

    /// Panics if the record is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, ChartPointRecord> {
        self.0.borrow()
    }

    pub fn try_borrow(&self) -> Result<Ref<'_, ChartPointRecord>, BorrowError> {
        self.0.try_borrow()
    }

    /// Panics if the record is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, ChartPointRecord> {
        self.0.borrow_mut()
    }

    #[must_use]
    pub fn downgrade(&self) -> PointRef {
        PointRef(Rc::downgrade(&self.0))
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Non-owning reference to a [`ChartPoint`].
///
/// `PointRef::default()` never resolves, standing in for an uninitialized
/// record.
#[derive(Debug, Clone, Default)]
pub struct PointRef(Weak<RefCell<ChartPointRecord>>);

impl PointRef {
    #[must_use]
    pub fn upgrade(&self) -> Option<ChartPoint> {
        self.0.upgrade().map(ChartPoint)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    #[must_use]
    pub fn points_to(&self, point: &ChartPoint) -> bool {
        Weak::as_ptr(&self.0) == Rc::as_ptr(&point.0)
    }
}
