//! Engine-side model consumed by snapshots.
//!
//! These types stand for the charting engine's live state: records mutated on
//! every render pass, the series formatting contract and the point cache that
//! owns records between passes.

pub mod handles;
pub mod point;
pub mod point_cache;
pub mod primitives;
pub mod series;
pub mod types;

pub use handles::{ChartHandle, OpaqueHandle, SeriesHandle};
pub use point::{ChartPoint, PointRef};
pub use point_cache::PointCache;
pub use series::{ChartSeries, FormattedSeries, PointTextFormatterFn, PointValueFormat};
pub use types::{ChartPointContext, ChartPointRecord, StackedValue};
