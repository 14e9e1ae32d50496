use chrono::{DateTime, Utc};

/// Current UTC time
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC timestamp in seconds
pub fn now_secs() -> i64 {
    Utc::now().timestamp()
}
