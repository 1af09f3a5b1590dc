use super::{check_arity, FunctionError};
use crate::ast::Value;
use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Current UTC time as RFC 3339: now -> "2024-05-01T12:00:00Z"
pub fn now(args: &[String]) -> Result<Value, FunctionError> {
    check_arity("now", args, 0, 0, "no")?;
    Ok(Value::Text(format_rfc3339(Utc::now())))
}

/// Current UTC time plus a duration: future 30d -> "2024-05-31T12:00:00Z"
pub fn future(args: &[String]) -> Result<Value, FunctionError> {
    check_arity("future", args, 1, 1, "exactly 1 (duration)")?;

    let offset = parse_duration(&args[0]).ok_or_else(|| FunctionError::InvalidArgument {
        function: "future",
        message: format!(
            "invalid duration '{}' (expected <n><unit>, unit one of s, m, h, d, w)",
            args[0]
        ),
    })?;

    let at = Utc::now()
        .checked_add_signed(offset)
        .ok_or_else(|| FunctionError::Failed {
            function: "future",
            message: format!("duration '{}' is out of range", args[0]),
        })?;

    Ok(Value::Text(format_rfc3339(at)))
}

/// Parse `<n><unit>` where unit is one of s, m, h, d, w
pub fn parse_duration(text: &str) -> Option<Duration> {
    let text = text.trim();
    let unit = text.chars().last()?;
    let amount: i64 = text[..text.len() - unit.len_utf8()].parse().ok()?;

    match unit {
        's' => Duration::try_seconds(amount),
        'm' => Duration::try_minutes(amount),
        'h' => Duration::try_hours(amount),
        'd' => Duration::try_days(amount),
        'w' => Duration::try_weeks(amount),
        _ => None,
    }
}

fn format_rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
