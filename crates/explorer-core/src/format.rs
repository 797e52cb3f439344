// File: crates/explorer-core/src/format.rs
// Summary: Number and label formatting for inspector tooltips and default axis/series labels.

use crate::axis::Axis;

/// Magnitudes at or beyond these bounds switch to exponential notation.
pub const EXP_UPPER: f64 = 10_000.0;
pub const EXP_LOWER: f64 = 0.001;

/// Tooltip text for a data value: `d.ddde±N` for very large/small magnitudes,
/// otherwise 4 significant digits without trailing zeros.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() { return v.to_string(); }
    let a = v.abs();
    if a >= EXP_UPPER || a <= EXP_LOWER {
        to_exponential(v, 3)
    } else {
        to_precision_trimmed(v, 4)
    }
}

/// Mantissa with `digits` decimals and an explicitly signed exponent (`1.235e+4`).
pub fn to_exponential(v: f64, digits: usize) -> String {
    let s = format!("{:.*e}", digits, v);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

/// `sig` significant digits, trailing fractional zeros removed.
pub fn to_precision_trimmed(v: f64, sig: usize) -> String {
    if v == 0.0 { return "0".to_string(); }
    let exp = v.abs().log10().floor() as i32;
    let decimals = (sig as i32 - 1 - exp).max(0) as usize;
    let s = format!("{:.*}", decimals, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Human label from a column name: drop a leading `log` (any case) with the
/// separators after it, then turn underscores into spaces.
pub fn clean_column_name(name: &str) -> String {
    let rest = match name.get(..3) {
        Some(head) if head.eq_ignore_ascii_case("log") => {
            name[3..].trim_start_matches(|c: char| c == '_' || c.is_whitespace())
        }
        _ => name,
    };
    rest.replace('_', " ")
}

/// Label shown for an axis: its own label text, else the cleaned column name.
pub fn axis_label(axis: &Axis) -> String {
    let label = axis.label.trim();
    if !label.is_empty() { return label.to_string(); }
    axis.column.as_deref().map(clean_column_name).unwrap_or_default()
}
