use chrono::{DateTime, Duration, Utc};

/*-------------------------------------------------------------------------------------------------
  Query Start Time
-------------------------------------------------------------------------------------------------*/

/// Minute-precision timestamp format accepted by the `starttime` query parameter.
pub const STARTTIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format the start of the query window: `now` minus `lookback_hours`.
pub fn start_time(now: DateTime<Utc>, lookback_hours: u32) -> String {
    let start = now - Duration::hours(i64::from(lookback_hours));
    start.format(STARTTIME_FORMAT).to_string()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
