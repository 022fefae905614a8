use chrono::NaiveTime;

/// Booking grid bounds, minutes from midnight in the reference zone.
/// The closing slot is included: the grid runs 07:00..=23:30.
pub const GRID_START_MINUTES: u32 = 7 * 60;
pub const GRID_END_MINUTES: u32 = 23 * 60 + 30;
pub const GRID_STEP_MINUTES: u32 = 30;

/// Generates the daily slot grid: every half-hour mark from 07:00 through
/// 23:30 inclusive, ascending. Stateless; a fresh vector per call.
pub fn daily_slots() -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    let mut minutes = GRID_START_MINUTES;
    while minutes <= GRID_END_MINUTES {
        if let Some(slot) = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0) {
            slots.push(slot);
        }
        minutes += GRID_STEP_MINUTES;
    }
    slots
}

pub fn is_grid_slot(time: NaiveTime) -> bool {
    daily_slots().contains(&time)
}

/// Renders a slot the way it travels over the wire: `HH:MM`.
pub fn format_slot(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
