use super::types::TimeInstant;

const UNITS: [(TimeInstant, &str); 3] = [
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "K"),
];

/// Formats a year magnitude with a `B`/`M`/`K` suffix.
///
/// Values are rounded half-up to one decimal in their unit using integer
/// arithmetic; exact values render without a decimal (`"5B"`, not `"5.0B"`).
/// Magnitudes below one thousand render as plain integers.
#[must_use]
pub fn format_magnitude(years: TimeInstant) -> String {
    let sign = if years < 0 { "-" } else { "" };
    let magnitude = years.unsigned_abs();

    for (unit, suffix) in UNITS {
        let unit = unit.unsigned_abs();
        if magnitude < unit {
            continue;
        }

        let tenths = (magnitude.saturating_mul(10) + unit / 2) / unit;
        let whole = tenths / 10;
        let fraction = tenths % 10;
        return if fraction == 0 {
            format!("{sign}{whole}{suffix}")
        } else {
            format!("{sign}{whole}.{fraction}{suffix}")
        };
    }

    format!("{sign}{magnitude}")
}
