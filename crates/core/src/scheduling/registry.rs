use chrono::{Duration, NaiveDate, NaiveTime};
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use crate::errors::{TourError, TourResult};

/// In-process record of reserved slots per calendar date. The sole piece of
/// shared mutable state in the booking engine; every check-then-act runs
/// under one lock acquisition so concurrent reserves for the same slot can
/// never both succeed.
#[derive(Debug, Clone, Default)]
pub struct BookingRegistry {
    booked: Arc<Mutex<HashMap<NaiveDate, HashSet<NaiveTime>>>>,
}

impl BookingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the registry from persisted submissions at boot. Dates before
    /// `today` are dropped; they can no longer collide with anything.
    pub fn preload<I>(&self, entries: I, today: NaiveDate)
    where
        I: IntoIterator<Item = (NaiveDate, NaiveTime)>,
    {
        let mut booked = self.booked.lock().unwrap();
        for (date, time) in entries {
            if date >= today {
                booked.entry(date).or_default().insert(time);
            }
        }
    }

    /// Snapshot of the reserved slots for one date.
    pub fn booked_for(&self, date: NaiveDate) -> HashSet<NaiveTime> {
        self.booked
            .lock()
            .unwrap()
            .get(&date)
            .cloned()
            .unwrap_or_default()
    }

    /// Reserves `time` on `date`. Rejects an exact collision and, so that a
    /// caller skipping the availability query cannot sit adjacent to an
    /// existing meeting, also re-derives the 30-minute gap rule before
    /// inserting. Both rejections surface the same client-facing message.
    pub fn reserve(&self, date: NaiveDate, time: NaiveTime) -> TourResult<()> {
        let step = Duration::minutes(30);
        let mut booked = self.booked.lock().unwrap();
        let taken = booked.entry(date).or_default();

        // Neighbor arithmetic wraps at midnight, but 06:30 and 00:00 are
        // outside the grid and can never be present in `taken`.
        if taken.contains(&time) || taken.contains(&(time - step)) || taken.contains(&(time + step))
        {
            return Err(TourError::Conflict(
                "selected time slot is not available".to_string(),
            ));
        }

        taken.insert(time);
        Ok(())
    }
}
