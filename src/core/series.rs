use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ChartPointRecord;
use crate::core::primitives::format_fixed;

/// Formatters share the series' thread, so they may capture `Rc` state.
pub type PointTextFormatterFn = Rc<dyn Fn(&ChartPointRecord) -> String + 'static>;

/// Formatting contract a series exposes for its points.
///
/// Implementations receive the live engine record, so they can read any state
/// the snapshot does not carry.
pub trait ChartSeries: Any {
    fn name(&self) -> &str;
    fn tooltip_text(&self, point: &ChartPointRecord) -> String;
    fn data_label_text(&self, point: &ChartPointRecord) -> String;
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointValueFormat {
    pub precision: u8,
}

impl Default for PointValueFormat {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl PointValueFormat {
    #[must_use]
    pub fn new(precision: u8) -> Self {
        Self { precision }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        format_fixed(value, self.precision)
    }
}

/// Series with a configurable tooltip and data-label formatting pipeline.
///
/// Formatting state sits behind interior mutability because the engine shares
/// the series through `Rc` while points keep non-owning handles to it.
pub struct FormattedSeries {
    name: String,
    value_format: Cell<PointValueFormat>,
    tooltip_formatter: RefCell<Option<PointTextFormatterFn>>,
    data_label_formatter: RefCell<Option<PointTextFormatterFn>>,
    formatter_generation: Cell<u64>,
}

impl FormattedSeries {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_format: Cell::new(PointValueFormat::default()),
            tooltip_formatter: RefCell::new(None),
            data_label_formatter: RefCell::new(None),
            formatter_generation: Cell::new(0),
        }
    }

    #[must_use]
    pub fn with_value_format(self, format: PointValueFormat) -> Self {
        self.value_format.set(format);
        self
    }

    #[must_use]
    pub fn value_format(&self) -> PointValueFormat {
        self.value_format.get()
    }

    pub fn set_value_format(&self, format: PointValueFormat) {
        self.value_format.set(format);
        self.bump_formatter_generation();
    }

    pub fn set_tooltip_formatter(&self, formatter: PointTextFormatterFn) {
        *self.tooltip_formatter.borrow_mut() = Some(formatter);
        self.bump_formatter_generation();
    }

    pub fn clear_tooltip_formatter(&self) {
        *self.tooltip_formatter.borrow_mut() = None;
        self.bump_formatter_generation();
    }

    pub fn set_data_label_formatter(&self, formatter: PointTextFormatterFn) {
        *self.data_label_formatter.borrow_mut() = Some(formatter);
        self.bump_formatter_generation();
    }

    pub fn clear_data_label_formatter(&self) {
        *self.data_label_formatter.borrow_mut() = None;
        self.bump_formatter_generation();
    }

    /// Counter bumped on every formatting change; lets UI layers tell whether
    /// cached text may be outdated.
    #[must_use]
    pub fn formatter_generation(&self) -> u64 {
        self.formatter_generation.get()
    }

    fn bump_formatter_generation(&self) {
        let generation = self.formatter_generation.get().wrapping_add(1);
        self.formatter_generation.set(generation);
        debug!(series = %self.name, generation, "series formatter changed");
    }

    fn default_tooltip_text(&self, point: &ChartPointRecord) -> String {
        let format = self.value_format.get();
        let value = if point.is_null {
            "-".to_owned()
        } else {
            format.format(point.primary_value)
        };

        let mut text = if self.name.is_empty() {
            value
        } else {
            format!("{}: {value}", self.name)
        };
        let share = point
            .stacked
            .and_then(|stacked| stacked.share(point.primary_value));
        if let (Some(share), false) = (share, point.is_null) {
            text.push_str(&format!(" ({}%)", format_fixed(share * 100.0, 0)));
        }
        text
    }

    fn default_data_label_text(&self, point: &ChartPointRecord) -> String {
        if point.is_null {
            return String::new();
        }
        self.value_format.get().format(point.primary_value)
    }
}

impl ChartSeries for FormattedSeries {
    fn name(&self) -> &str {
        &self.name
    }

    fn tooltip_text(&self, point: &ChartPointRecord) -> String {
        // Clone the Rc so a formatter may reconfigure the series re-entrantly.
        let formatter = self.tooltip_formatter.borrow().clone();
        match formatter {
            Some(formatter) => formatter(point),
            None => self.default_tooltip_text(point),
        }
    }

    fn data_label_text(&self, point: &ChartPointRecord) -> String {
        let formatter = self.data_label_formatter.borrow().clone();
        match formatter {
            Some(formatter) => formatter(point),
            None => self.default_data_label_text(point),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
