/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use caddie_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(6500.0, 0), "6,500");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    // Handle the sign separately so the thousands grouping works on the
    // absolute value.
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Round to the requested decimal places.
    // Add a tiny epsilon (half ULP at the target precision) before rounding
    // to avoid IEEE 754 binary-representation issues at exact midpoints.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let frac_part = rounded - rounded.trunc();

    // Build the thousands-separated integer portion.
    let int_str = integer_part.to_string();
    let grouped = group_thousands(&int_str);

    let result = if decimals == 0 {
        grouped
    } else {
        // Format the fractional part to the exact number of decimals.
        let frac_str = format!("{:.prec$}", frac_part, prec = decimals as usize);
        // `frac_str` starts with "0.", e.g. "0.50". Strip the leading "0".
        let decimal_digits = &frac_str[1..]; // ".50"
        format!("{}{}", grouped, decimal_digits)
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format a distance in yards with one decimal place and a unit suffix.
///
/// # Examples
///
/// ```
/// use caddie_core::formatting::format_yards;
///
/// assert_eq!(format_yards(245.25), "245.3 yd");
/// assert_eq!(format_yards(0.0), "0.0 yd");
/// ```
pub fn format_yards(value: f64) -> String {
    format!("{} yd", format_number(value, 1))
}

/// Format a signed offline distance using the range convention:
/// magnitude plus `L` (left of target) or `R` (right of target).
///
/// Values whose magnitude rounds to zero at one decimal are shown as a bare
/// `"0.0"` with no direction letter.
///
/// # Examples
///
/// ```
/// use caddie_core::formatting::format_offline;
///
/// assert_eq!(format_offline(-8.5), "8.5 L");
/// assert_eq!(format_offline(12.25), "12.3 R");
/// assert_eq!(format_offline(0.0), "0.0");
/// ```
pub fn format_offline(value: f64) -> String {
    if value.abs() < 0.05 {
        return "0.0".to_string();
    }
    let side = if value < 0.0 { "L" } else { "R" };
    format!("{} {}", format_number(value.abs(), 1), side)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
