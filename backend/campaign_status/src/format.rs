//! Human-readable renderings: compact durations, percentages and
//! fixed-point amounts.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Largest power of ten a `u128` holds is `10^38`.
pub(crate) const MAX_DECIMALS: u32 = 38;

/// Render a duration using its largest one or two non-zero units.
///
/// | Remaining        | Rendering |
/// |------------------|-----------|
/// | `>= 1 day`       | `2d 4h`, `2d` |
/// | `>= 1 hour`      | `4h 35m`, `4h` |
/// | `>= 1 minute`    | `35m` |
/// | under a minute   | `<1m` |
/// | zero             | `0m` |
pub fn format_duration_short(duration: Duration) -> String {
    let secs = duration.as_secs();
    let days = secs / SECS_PER_DAY;
    let hours = (secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;

    match (days, hours, minutes) {
        (0, 0, 0) if secs > 0 => "<1m".to_string(),
        (0, 0, m) => format!("{m}m"),
        (0, h, 0) => format!("{h}h"),
        (0, h, m) => format!("{h}h {m}m"),
        (d, 0, _) => format!("{d}d"),
        (d, h, _) => format!("{d}d {h}h"),
    }
}

/// A percentage held as a fixed-point integer with `precision` fraction digits.
///
/// `Percent { scaled: 3333, precision: 2 }` is 33.33%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Percent {
    pub scaled: u128,
    pub precision: u32,
}

impl Percent {
    /// The percentage rounded to a whole number.
    ///
    /// `precision` above 38 is treated as 38.
    pub fn whole(&self) -> u128 {
        let unit = pow10(self.precision.min(MAX_DECIMALS));
        let whole = self.scaled / unit;
        if (self.scaled % unit) * 2 >= unit {
            whole + 1
        } else {
            whole
        }
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fixed_point(self.scaled, self.precision, false))
    }
}

/// Display label for percent of goal, with a neutral label for the
/// undefined (zero goal) case.
pub fn format_percent_label(percent: Option<Percent>) -> String {
    match percent {
        Some(p) => format!("{p}% of goal"),
        None => "No goal set".to_string(),
    }
}

/// Scale an amount of base units down by `asset_decimals` and render it
/// with at most `display_decimals` fraction digits.
///
/// `asset_decimals` above 38 is treated as 38. Rounds half-up, strips trailing zeros and groups thousands with commas:
/// `1_234_500_000_000_000_000_000` wei renders as `1,234.5`.
pub fn format_units(amount: u128, asset_decimals: u32, display_decimals: u32) -> String {
    let asset_decimals = asset_decimals.min(MAX_DECIMALS);
    let display_decimals = display_decimals.min(asset_decimals);
    let drop = pow10(asset_decimals - display_decimals);
    let mut kept = amount / drop;
    if (amount % drop) >= drop - drop / 2 && drop > 1 {
        kept = kept.saturating_add(1);
    }
    fixed_point(kept, display_decimals, true)
}

/// `"<amount> <symbol> Raised"`
pub fn format_raised(
    amount: u128,
    symbol: &str,
    asset_decimals: u32,
    display_decimals: u32,
) -> String {
    format!(
        "{} {symbol} Raised",
        format_units(amount, asset_decimals, display_decimals)
    )
}

/// `10^exp`, saturating at `10^38`.
pub(crate) fn pow10(exp: u32) -> u128 {
    10u128.pow(exp.min(MAX_DECIMALS))
}

fn fixed_point(scaled: u128, precision: u32, group: bool) -> String {
    let precision = precision.min(MAX_DECIMALS);
    let unit = pow10(precision);
    let whole = scaled / unit;
    let frac = scaled % unit;

    let whole = if group {
        group_thousands(whole)
    } else {
        whole.to_string()
    };
    if precision == 0 || frac == 0 {
        return whole;
    }

    let digits = format!("{frac:0width$}", width = precision as usize);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
