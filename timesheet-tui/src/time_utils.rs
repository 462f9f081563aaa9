use time::{Date, OffsetDateTime, UtcOffset};

pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

pub fn local_today() -> Date {
    to_local_time(OffsetDateTime::now_utc()).date()
}
