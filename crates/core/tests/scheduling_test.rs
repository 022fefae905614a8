use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tripsync_core::errors::TourError;
use tripsync_core::scheduling::{
    availability::{available_slots, first_bookable_date, reserve_slot},
    clock::{Clock, FixedClock, SystemClock},
    registry::BookingRegistry,
    slots::{daily_slots, format_slot, is_grid_slot},
    timezone::{REFERENCE_ZONE, slot_display},
};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// Reference "now" from the spec scenarios: 2024-01-10 15:00 IST.
fn reference_now() -> DateTime<Utc> {
    REFERENCE_ZONE
        .with_ymd_and_hms(2024, 1, 10, 15, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn grid_has_thirty_four_half_hour_slots() {
    let grid = daily_slots();

    assert_eq!(grid.len(), 34);
    assert_eq!(grid[0], t(7, 0));
    assert_eq!(grid[grid.len() - 1], t(23, 30));

    for window in grid.windows(2) {
        assert_eq!(window[1] - window[0], chrono::Duration::minutes(30));
    }
}

#[test]
fn grid_is_deterministic_and_restartable() {
    let first = daily_slots();
    let mut second = daily_slots();

    assert_eq!(first, second);

    // Mutating one call's vector must not leak into the next.
    second.clear();
    assert_eq!(daily_slots(), first);
}

#[test]
fn grid_membership() {
    assert!(is_grid_slot(t(7, 0)));
    assert!(is_grid_slot(t(23, 30)));
    assert!(!is_grid_slot(t(6, 30)));
    assert!(!is_grid_slot(t(10, 15)));
}

#[test]
fn slot_wire_format() {
    assert_eq!(format_slot(t(7, 0)), "07:00");
    assert_eq!(format_slot(t(23, 30)), "23:30");
}

#[test]
fn first_bookable_date_is_tomorrow_in_ist() {
    assert_eq!(first_bookable_date(reference_now()), d(2024, 1, 11));

    // 20:00 UTC on Jan 10 is already Jan 11 in IST, so Jan 12 opens up.
    let late_utc = Utc.with_ymd_and_hms(2024, 1, 10, 20, 0, 0).unwrap();
    assert_eq!(first_bookable_date(late_utc), d(2024, 1, 12));
}

#[rstest]
#[case("2024-01-10")]
#[case("2024-01-09")]
#[case("2023-12-31")]
fn window_rejects_today_and_earlier(#[case] date: &str) {
    let registry = BookingRegistry::new();
    let result = available_slots(date, reference_now(), &registry);
    assert!(matches!(result, Err(TourError::Policy(_))));
}

#[rstest]
#[case("2024-01-11")]
#[case("2024-01-12")]
#[case("2024-06-01")]
fn window_accepts_tomorrow_onwards(#[case] date: &str) {
    let registry = BookingRegistry::new();
    let slots = available_slots(date, reference_now(), &registry).unwrap();
    assert_eq!(slots.len(), 34);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("10-01-2024")]
#[case("not-a-date")]
fn missing_or_malformed_date_is_a_validation_error(#[case] date: &str) {
    let registry = BookingRegistry::new();
    let result = available_slots(date, reference_now(), &registry);
    assert!(matches!(result, Err(TourError::Validation(_))));
}

#[test]
fn booked_slot_excludes_both_neighbors() {
    let registry = BookingRegistry::new();
    registry.reserve(d(2024, 2, 1), t(10, 0)).unwrap();

    let open = available_slots("2024-02-01", reference_now(), &registry).unwrap();

    assert!(!open.contains(&t(9, 30)));
    assert!(!open.contains(&t(10, 0)));
    assert!(!open.contains(&t(10, 30)));
    assert!(open.contains(&t(9, 0)));
    assert!(open.contains(&t(11, 0)));
    assert_eq!(open.len(), 31);
}

#[test]
fn boundary_slots_only_check_existing_neighbors() {
    let registry = BookingRegistry::new();
    registry.reserve(d(2024, 2, 1), t(7, 0)).unwrap();

    let open = available_slots("2024-02-01", reference_now(), &registry).unwrap();
    assert!(!open.contains(&t(7, 0)));
    assert!(!open.contains(&t(7, 30)));
    assert!(open.contains(&t(8, 0)));
    assert_eq!(open.len(), 32);

    let registry = BookingRegistry::new();
    registry.reserve(d(2024, 2, 1), t(23, 30)).unwrap();

    let open = available_slots("2024-02-01", reference_now(), &registry).unwrap();
    assert!(!open.contains(&t(23, 30)));
    assert!(!open.contains(&t(23, 0)));
    assert!(open.contains(&t(22, 30)));
    assert_eq!(open.len(), 32);
}

#[test]
fn bookings_on_distinct_dates_are_independent() {
    let registry = BookingRegistry::new();
    registry.reserve(d(2024, 2, 1), t(10, 0)).unwrap();

    let open = available_slots("2024-02-02", reference_now(), &registry).unwrap();
    assert_eq!(open.len(), 34);
}

#[test]
fn second_reserve_of_the_same_slot_fails() {
    let registry = BookingRegistry::new();

    registry.reserve(d(2024, 2, 1), t(12, 0)).unwrap();
    let err = registry.reserve(d(2024, 2, 1), t(12, 0)).unwrap_err();

    match err {
        TourError::Conflict(message) => {
            assert_eq!(message, "selected time slot is not available");
        }
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[test]
fn concurrent_duplicate_reserves_admit_exactly_one() {
    let registry = BookingRegistry::new();
    let date = d(2024, 2, 1);
    let slot = t(12, 0);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || registry.reserve(date, slot).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|&success| success)
        .count();

    assert_eq!(successes, 1);
}

#[test]
fn reserve_rejects_adjacent_slots_without_an_availability_query() {
    let registry = BookingRegistry::new();
    registry.reserve(d(2024, 2, 1), t(10, 0)).unwrap();

    assert!(matches!(
        registry.reserve(d(2024, 2, 1), t(10, 30)),
        Err(TourError::Conflict(_))
    ));
    assert!(matches!(
        registry.reserve(d(2024, 2, 1), t(9, 30)),
        Err(TourError::Conflict(_))
    ));
    registry.reserve(d(2024, 2, 1), t(11, 0)).unwrap();
}

#[test]
fn reserve_slot_validates_inputs_and_window() {
    let registry = BookingRegistry::new();
    let now = reference_now();

    assert!(matches!(
        reserve_slot("2024-02-01", "10:15", now, &registry),
        Err(TourError::Validation(_))
    ));
    assert!(matches!(
        reserve_slot("2024-02-01", "", now, &registry),
        Err(TourError::Validation(_))
    ));
    assert!(matches!(
        reserve_slot("2024-01-10", "10:00", now, &registry),
        Err(TourError::Policy(_))
    ));

    let (date, time) = reserve_slot("2024-02-01", "10:00", now, &registry).unwrap();
    assert_eq!(date, d(2024, 2, 1));
    assert_eq!(time, t(10, 0));
}

#[test]
fn preload_seeds_future_dates_and_drops_past_ones() {
    let registry = BookingRegistry::new();
    registry.preload(
        vec![
            (d(2024, 1, 5), t(10, 0)),
            (d(2024, 1, 10), t(11, 0)),
            (d(2024, 1, 15), t(12, 0)),
        ],
        d(2024, 1, 10),
    );

    assert!(registry.booked_for(d(2024, 1, 5)).is_empty());
    assert!(registry.booked_for(d(2024, 1, 10)).contains(&t(11, 0)));
    assert!(registry.booked_for(d(2024, 1, 15)).contains(&t(12, 0)));
}

#[test]
fn timezone_round_trip_to_new_york() {
    // 14:00 IST on 2024-03-01 is 08:30 UTC, i.e. 03:30 EST (before US DST).
    let display = slot_display(d(2024, 3, 1), t(14, 0), Some("America/New_York"));

    assert_eq!(display.ist, "2024-03-01 14:00 IST");
    assert_eq!(display.user, "2024-03-01 03:30 EST");
}

#[test]
fn timezone_honors_target_zone_dst() {
    // After the US spring-forward the same slot lands in EDT.
    let display = slot_display(d(2024, 3, 20), t(14, 0), Some("America/New_York"));
    assert_eq!(display.user, "2024-03-20 04:30 EDT");
}

#[rstest]
#[case(None)]
#[case(Some("Not/AZone"))]
#[case(Some(""))]
fn missing_or_invalid_zone_falls_back_to_ist(#[case] zone: Option<&str>) {
    let display = slot_display(d(2024, 3, 1), t(14, 0), zone);
    assert_eq!(display.user, display.ist);
    assert_eq!(display.ist, "2024-03-01 14:00 IST");
}

#[test]
fn clocks_report_time() {
    let fixed = FixedClock(reference_now());
    assert_eq!(fixed.now_utc(), reference_now());

    let system = SystemClock;
    let before = Utc::now();
    let now = system.now_utc();
    assert!(now >= before);
}
