/// Format seconds as `M:SS`
///
/// Zero, NaN, negative and infinite input render as `0:00`. There is no hours
/// component: an hour and a bit renders as `61:01`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total_secs = seconds.floor() as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", mins, secs)
}

pub fn format_time_opt(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| "0:00".to_string(), format_time)
}
