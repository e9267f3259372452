//! Formatting utilities used for terminal output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "2.5 oz", "0 oz". Trailing zeros are dropped by `f64`'s Display.
pub fn oz(value: f64) -> String {
    format!("{value} oz")
}

/// Seconds as "1h 02m 05s" / "2m 05s" / "5s" for status lines.
pub fn secs2readable(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;

    if h > 0 {
        format!("{}h {:02}m {:02}s", h, m, s)
    } else if m > 0 {
        format!("{}m {:02}s", m, s)
    } else {
        format!("{}s", s)
    }
}

/// Text shown for an empty optional field.
pub fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}
