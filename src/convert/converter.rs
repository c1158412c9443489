use crate::config::{Config, MAX_UNIT_PRECISION};
use std::borrow::Cow;

/// Unit emitted for converted lengths
pub const TARGET_UNIT: &str = "rem";

/// Round `value` to `precision` fractional digits.
///
/// Truncates at one extra digit first, then rounds that to the requested
/// precision. Plain fixed-point rounding would give different results for
/// inputs carrying binary representation error (0.1, 0.7, ...).
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let exponent = i32::try_from(precision)
        .unwrap_or(i32::MAX)
        .saturating_add(1);
    let multiplier = 10f64.powi(exponent);
    let whole_number = (value * multiplier).floor();
    (whole_number / 10.0).round() * 10.0 / multiplier
}

/// Shortest decimal form, switching to exponent notation outside
/// `[1e-6, 1e21)` the way CSS-producing JS code prints numbers.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        format!("{}", value)
    }
}

/// Decides whether a scanned length is eligible and rewrites it.
#[derive(Debug, Clone)]
pub struct Converter {
    root_value: f64,
    unit_precision: u32,
    min_pixel_value: f64,
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        Self {
            root_value: config.root_value,
            // Unvalidated configs can reach here through install; more
            // digits than this cannot change an f64 result anyway.
            unit_precision: config.unit_precision.min(MAX_UNIT_PRECISION),
            min_pixel_value: config.min_pixel_value,
        }
    }

    /// Rewrite one scanner match. `captured` is `None` for skipped spans.
    pub fn convert<'h>(&self, full_match: &'h str, captured: Option<&str>) -> Cow<'h, str> {
        let Some(digits) = captured else {
            return Cow::Borrowed(full_match);
        };
        let pixels = match digits.parse::<f64>() {
            Ok(pixels) => pixels,
            Err(_) => return Cow::Borrowed(full_match),
        };
        if pixels <= self.min_pixel_value {
            return Cow::Borrowed(full_match);
        }

        let fixed = round_to_precision(pixels / self.root_value, self.unit_precision);
        if fixed == 0.0 {
            Cow::Borrowed("0")
        } else {
            Cow::Owned(format!("{}{}", format_number(fixed), TARGET_UNIT))
        }
    }
}
