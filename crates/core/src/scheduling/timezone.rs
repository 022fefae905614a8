use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// All booking state is wall clock in IST (UTC+5:30, no DST).
pub const REFERENCE_ZONE: Tz = chrono_tz::Asia::Kolkata;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDisplay {
    pub ist: String,
    pub user: String,
}

/// Builds the pair of display labels for a booked slot: the reference-zone
/// label, and the same instant projected into the user's zone. An absent or
/// unrecognized zone falls back to the reference label; display never fails.
pub fn slot_display(date: NaiveDate, time: NaiveTime, user_time_zone: Option<&str>) -> SlotDisplay {
    let ist = format!("{} {} IST", date.format("%Y-%m-%d"), time.format("%H:%M"));

    let user_zone = user_time_zone.and_then(|name| name.trim().parse::<Tz>().ok());
    let instant = REFERENCE_ZONE.from_local_datetime(&date.and_time(time)).earliest();

    let user = match (user_zone, instant) {
        (Some(zone), Some(instant)) => {
            let local = instant.with_timezone(&zone);
            local.format("%Y-%m-%d %H:%M %Z").to_string()
        }
        _ => ist.clone(),
    };

    SlotDisplay { ist, user }
}
