use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Formats `value` with a fixed number of decimals.
///
/// Non-finite values are rendered as `-` so tooltips never show `NaN`.
#[must_use]
pub fn format_fixed(value: f64, precision: u8) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }
    format!("{value:.prec$}", prec = usize::from(precision))
}

#[cfg(test)]
mod tests {
    use super::{datetime_to_unix_seconds, decimal_to_f64, format_fixed};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    #[test]
    fn decimal_converts_to_f64() {
        let value = decimal_to_f64(Decimal::new(1_225, 2), "primary").expect("convert");
        assert_eq!(value, 12.25);
    }

    #[test]
    fn datetime_maps_to_fractional_seconds() {
        let time = Utc
            .timestamp_millis_opt(1_700_000_000_500)
            .single()
            .expect("valid timestamp");
        assert_eq!(datetime_to_unix_seconds(time), 1_700_000_000.5);
    }

    #[test]
    fn fixed_format_respects_precision_and_non_finite() {
        assert_eq!(format_fixed(10.0, 2), "10.00");
        assert_eq!(format_fixed(7.25, 0), "7");
        assert_eq!(format_fixed(f64::NAN, 2), "-");
        assert_eq!(format_fixed(f64::INFINITY, 1), "-");
    }
}
