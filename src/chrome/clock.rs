const MINUTE_MS: i64 = 60_000;
const DAY_MINUTES: i64 = 24 * 60;

/// Render `utc_ms` shifted by `offset_minutes` as `hh:mm AM <label>`.
pub fn format_clock(utc_ms: f64, offset_minutes: i32, label: &str) -> String {
    let minutes = (utc_ms as i64).div_euclid(MINUTE_MS) + offset_minutes as i64;
    let of_day = minutes.rem_euclid(DAY_MINUTES);
    let (hour, minute) = (of_day / 60, of_day % 60);

    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12:02}:{minute:02} {suffix} {label}")
}
