//! Lenient duration and set-count entry, and their display format
//!
//! Values typed by a user never fail to parse: anything malformed reads as
//! zero and the timer decides what to do with it.

/// Parse a typed duration into tenths of a second.
///
/// Everything except digits, `:` and `.` is dropped. `m:s` reads as minutes
/// and seconds, a lone number as seconds; fractional seconds are rounded to
/// the nearest whole second. More than one `:`, or a part that is not a
/// number, yields 0.
pub fn parse_duration(input: &str) -> u32 {
    let filtered: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ':' || *c == '.')
        .collect();
    if filtered.is_empty() {
        return 0;
    }

    let parts: Option<Vec<u32>> = filtered.split(':').map(whole_seconds).collect();
    match parts.as_deref() {
        Some([seconds]) => seconds.saturating_mul(10),
        Some([minutes, seconds]) => minutes
            .saturating_mul(60)
            .saturating_add(*seconds)
            .saturating_mul(10),
        _ => 0,
    }
}

fn whole_seconds(part: &str) -> Option<u32> {
    let value: f64 = part.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.round().min(f64::from(u32::MAX)) as u32)
}

/// Format tenths of a second: `6.5` under a minute, `1:05` from a minute on
pub fn format_duration(tenths: u32) -> String {
    if tenths < 600 {
        format!("{:.1}", f64::from(tenths) / 10.0)
    } else {
        let seconds = tenths / 10;
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }
}

/// Parse a typed set count, ignoring anything but digits. Invalid input is 0.
pub fn parse_sets(input: &str) -> u32 {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Set progress as shown to the user, e.g. `2 of 5`
pub fn format_sets(current: u32, total: u32) -> String {
    format!("{} of {}", current, total)
}
