//! Shared formatting helpers for GHCN station search crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Format a compact "YYYYMMDD" date as "YYYY-MM-DD".
    /// Anything that is not exactly 8 ASCII characters is returned unchanged.
    pub fn format_date_for_display(date: &str) -> String {
        if date.len() != 8 || !date.is_ascii() {
            return date.to_string();
        }
        format!("{}-{}-{}", &date[0..4], &date[4..6], &date[6..8])
    }

    /// Format an observation time "HHMM" as "HH:MM".
    ///
    /// Missing or empty times render as "N/A"; anything that is not exactly
    /// 4 ASCII characters is returned unchanged.
    pub fn format_obs_time(obs_time: Option<&str>) -> String {
        match obs_time {
            None | Some("") => "N/A".to_string(),
            Some(t) if t.len() != 4 || !t.is_ascii() => t.to_string(),
            Some(t) => format!("{}:{}", &t[0..2], &t[2..4]),
        }
    }

    /// Convert a date-picker value ("YYYY-MM-DD") to the API form ("YYYYMMDD").
    pub fn date_input_to_compact(value: &str) -> String {
        value.replace('-', "")
    }

    /// Format a NaiveDate as "YYYY-MM-DD" for HTML date inputs
    pub fn format_date_for_input(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

}

/// Number formatting for status and chart text
pub mod numbers {
    const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

    /// Group digits in threes with commas, e.g. 1234567 -> "1,234,567".
    pub fn with_thousands(n: u64) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    /// Render a percentage without a trailing ".0" for whole numbers.
    pub fn format_percent(p: f64) -> String {
        if p.is_finite() && p.fract() == 0.0 {
            format!("{}", p as i64)
        } else {
            format!("{}", p)
        }
    }

    /// Bytes expressed in MiB with two decimals ("MB" in the UI).
    pub fn bytes_to_mib(bytes: u64) -> String {
        format!("{:.2}", bytes as f64 / BYTES_PER_MIB)
    }

    /// Parse the longest numeric prefix of `s`, skipping leading whitespace.
    ///
    /// Mirrors how browsers read numbers out of loosely typed values:
    /// "12abc" parses as 12, "abc" does not parse at all.
    pub fn parse_leading_float(s: &str) -> Option<f64> {
        let s = s.trim_start();
        let bytes = s.as_bytes();
        let mut end = 0;

        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end = 1;
        }
        if s[end..].starts_with("Infinity") {
            return s[..end + "Infinity".len()].parse().ok();
        }

        let int_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut mantissa_digits = end - int_start;

        if end < bytes.len() && bytes[end] == b'.' {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            mantissa_digits += frac_end - frac_start;
            if mantissa_digits > 0 {
                end = frac_end;
            }
        }
        if mantissa_digits == 0 {
            return None;
        }

        if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }

        s[..end].parse().ok()
    }

}
