//! Type-erased references to engine-owned entities.
//!
//! Points are shared across unrelated chart and series instantiations, so the
//! handles erase the concrete type behind `Any` and let the caller recover it
//! with a downcast.

use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::core::series::ChartSeries;
use crate::error::{ChartError, ChartResult, StaleTarget};

/// Non-owning reference to the chart that owns a point.
#[derive(Clone)]
pub struct ChartHandle(Weak<dyn Any>);

impl ChartHandle {
    #[must_use]
    pub fn new<T: Any>(chart: &Rc<T>) -> Self {
        let weak: Weak<T> = Rc::downgrade(chart);
        Self(weak)
    }

    /// Handle that never resolves, used for points built outside a chart.
    #[must_use]
    pub fn detached() -> Self {
        let weak: Weak<dyn Any> = Weak::<()>::new();
        Self(weak)
    }

    pub fn upgrade(&self) -> ChartResult<Rc<dyn Any>> {
        self.0
            .upgrade()
            .ok_or_else(|| ChartError::stale(StaleTarget::Chart))
    }

    /// Resolves the chart as `T`; `Ok(None)` when the chart is a different type.
    pub fn downcast<T: Any>(&self) -> ChartResult<Option<Rc<T>>> {
        Ok(self.upgrade()?.downcast::<T>().ok())
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ChartHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Non-owning reference to the series that owns a point.
///
/// This is also the route to the series' formatting contract.
#[derive(Clone)]
pub struct SeriesHandle(Weak<dyn ChartSeries>);

impl SeriesHandle {
    #[must_use]
    pub fn new<S: ChartSeries>(series: &Rc<S>) -> Self {
        let weak: Weak<S> = Rc::downgrade(series);
        Self(weak)
    }

    #[must_use]
    pub fn from_dyn(series: &Rc<dyn ChartSeries>) -> Self {
        Self(Rc::downgrade(series))
    }

    pub fn upgrade(&self) -> ChartResult<Rc<dyn ChartSeries>> {
        self.0
            .upgrade()
            .ok_or_else(|| ChartError::stale(StaleTarget::Series))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SeriesHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("SeriesHandle");
        match self.0.upgrade() {
            Some(series) => debug.field("name", &series.name()),
            None => debug.field("alive", &false),
        };
        debug.finish()
    }
}

/// Shared reference to a caller-defined value (data source, visual, label).
///
/// Cloning copies the reference, never the value.
#[derive(Clone)]
pub struct OpaqueHandle(Rc<dyn Any>);

impl OpaqueHandle {
    #[must_use]
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    #[must_use]
    pub fn from_rc<T: Any>(value: Rc<T>) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).downcast_ref::<T>()
    }

    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        (*self.0).is::<T>()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for OpaqueHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueHandle")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
