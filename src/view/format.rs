//! Label formatting helpers for KPI tiles and chart text labels.

/// Compact SI notation with one decimal, trailing ".0" trimmed:
/// 3_200_000_000 -> "3.2B", 420_000_000 -> "420M", 950 -> "950".
pub fn compact(value: f64) -> String {
    let negative = value < 0.0;
    let magnitude = value.abs();

    let (scaled, suffix) = if magnitude >= 1e9 {
        (magnitude / 1e9, "B")
    } else if magnitude >= 1e6 {
        (magnitude / 1e6, "M")
    } else if magnitude >= 1e3 {
        (magnitude / 1e3, "K")
    } else {
        (magnitude, "")
    };

    let mut body = format!("{:.1}", scaled);
    if let Some(stripped) = body.strip_suffix(".0") {
        body = stripped.to_owned();
    }
    format!("{}{}{}", if negative { "-" } else { "" }, body, suffix)
}

/// Currency-prefixed compact notation: 9_600_000 -> "$9.6M".
pub fn usd_compact(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", compact(-value))
    } else {
        format!("${}", compact(value))
    }
}

/// Thousands-grouped integer: 4485 -> "4,485".
pub fn grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Full-precision currency for revenue KPIs: 71_100_000 -> "$71,100,000".
pub fn usd_grouped(value: f64) -> String {
    format!("${}", grouped(value.round() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_covers_the_count_scales() {
        assert_eq!(compact(3_200_000_000.0), "3.2B");
        assert_eq!(compact(437_900_000.0), "437.9M");
        assert_eq!(compact(420_000_000.0), "420M");
        assert_eq!(compact(1_500.0), "1.5K");
        assert_eq!(compact(950.0), "950");
        assert_eq!(compact(0.0), "0");
    }

    #[test]
    fn usd_compact_prefixes_currency() {
        assert_eq!(usd_compact(9_600_000.0), "$9.6M");
        assert_eq!(usd_compact(71_100_000.0), "$71.1M");
    }

    #[test]
    fn grouped_inserts_thousand_separators() {
        assert_eq!(grouped(4_485), "4,485");
        assert_eq!(grouped(71_100_000), "71,100,000");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(0), "0");
    }

    #[test]
    fn usd_grouped_rounds_to_whole_dollars() {
        assert_eq!(usd_grouped(71_100_000.0), "$71,100,000");
        assert_eq!(usd_grouped(7_110_000.4), "$7,110,000");
    }
}
