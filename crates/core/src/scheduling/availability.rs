use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::errors::{TourError, TourResult};

use super::{registry::BookingRegistry, slots, timezone::REFERENCE_ZONE};

/// First date open for booking: the day after "today" as seen in the
/// reference zone, regardless of the caller's own timezone.
pub fn first_bookable_date(now_utc: DateTime<Utc>) -> NaiveDate {
    now_utc.with_timezone(&REFERENCE_ZONE).date_naive() + Duration::days(1)
}

pub fn parse_request_date(raw: &str) -> TourResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TourError::Validation("date is required".to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| TourError::Validation(format!("invalid date: {raw}")))
}

pub fn parse_request_time(raw: &str) -> TourResult<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TourError::Validation("time is required".to_string()));
    }
    let time = NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| TourError::Validation(format!("invalid time: {raw}")))?;
    if !slots::is_grid_slot(time) {
        return Err(TourError::Validation(format!(
            "time {raw} is outside the booking grid"
        )));
    }
    Ok(time)
}

pub fn ensure_bookable_date(date: NaiveDate, now_utc: DateTime<Utc>) -> TourResult<()> {
    if date < first_bookable_date(now_utc) {
        return Err(TourError::Policy(
            "bookings are allowed from tomorrow onwards".to_string(),
        ));
    }
    Ok(())
}

/// Computes the open slots for `raw_date`, ascending. A slot is open iff it
/// and both of its grid neighbors are unreserved; boundary slots only check
/// the neighbors that exist. An empty result is success, not an error.
pub fn available_slots(
    raw_date: &str,
    now_utc: DateTime<Utc>,
    registry: &BookingRegistry,
) -> TourResult<Vec<NaiveTime>> {
    let date = parse_request_date(raw_date)?;
    ensure_bookable_date(date, now_utc)?;

    let taken = registry.booked_for(date);
    let grid = slots::daily_slots();

    let mut open = Vec::new();
    for (i, slot) in grid.iter().enumerate() {
        let prev_taken = i > 0 && taken.contains(&grid[i - 1]);
        let next_taken = i + 1 < grid.len() && taken.contains(&grid[i + 1]);
        if !taken.contains(slot) && !prev_taken && !next_taken {
            open.push(*slot);
        }
    }
    Ok(open)
}

/// Full reservation path used by the contact handler: validates both inputs,
/// re-checks the advance window, then hands off to the registry's atomic
/// check-then-reserve.
pub fn reserve_slot(
    raw_date: &str,
    raw_time: &str,
    now_utc: DateTime<Utc>,
    registry: &BookingRegistry,
) -> TourResult<(NaiveDate, NaiveTime)> {
    let date = parse_request_date(raw_date)?;
    let time = parse_request_time(raw_time)?;
    ensure_bookable_date(date, now_utc)?;
    registry.reserve(date, time)?;
    Ok((date, time))
}
