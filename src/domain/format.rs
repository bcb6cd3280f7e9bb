// Display formatters for counts and durations

/// Shorten a count for display: `999`, `1.5K`, `2.5M`.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{}M", one_decimal_of_ratio(n, 1_000_000))
    } else if n >= 1_000 {
        format!("{}K", one_decimal_of_ratio(n, 1_000))
    } else {
        n.to_string()
    }
}

/// Render a duration given in hours: `5.0h`, `1d`, `1d 6.0h`.
pub fn format_duration(hours: f64) -> String {
    if !hours.is_finite() {
        return "-".to_string();
    }

    if hours < 24.0 {
        return format!("{}h", one_decimal(hours));
    }

    let days = (hours / 24.0).floor();
    let remaining_hours = hours % 24.0;
    if remaining_hours > 0.0 {
        format!("{}d {}h", days, one_decimal(remaining_hours))
    } else {
        format!("{}d", days)
    }
}

/// `n / divisor` with one decimal, rounding half up in exact integer arithmetic.
fn one_decimal_of_ratio(n: u64, divisor: u64) -> String {
    let step = divisor / 10;
    let tenths = (n as u128 + step as u128 / 2) / step as u128;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// One decimal of the stored value. Exact ties (odd multiples of 0.25) go away from zero.
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (value * 10.0).round() / 10.0);
    }
    format!("{:.1}", value)
}
