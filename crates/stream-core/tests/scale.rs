// File: crates/stream-core/tests/scale.rs
// Purpose: Linear/time scale mapping, tick selection and label formatting.

use chrono::{NaiveDate, NaiveDateTime};
use stream_core::scale::{format_grouped, nice_ticks, LinearScale, TimeInterval, TimeScale};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

#[test]
fn linear_maps_and_inverts() {
    let s = LinearScale::new((0.0, 50.0), (420.0, 0.0));
    assert_eq!(s.map(0.0), 420.0);
    assert_eq!(s.map(50.0), 0.0);
    assert_eq!(s.map(25.0), 210.0);
    assert_eq!(s.invert(210.0), 25.0);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let s = LinearScale::new((3.0, 3.0), (100.0, 0.0));
    assert_eq!(s.map(3.0), 50.0);
    assert_eq!(s.map(-7.0), 50.0);
}

#[test]
fn nice_ticks_use_one_two_five_steps() {
    assert_eq!(nice_ticks(0.0, 10.0, 10.0), (0..=10).map(f64::from).collect::<Vec<_>>());
    assert_eq!(nice_ticks(0.0, 10_000.0, 5.0), vec![0.0, 2_000.0, 4_000.0, 6_000.0, 8_000.0, 10_000.0]);
    assert_eq!(nice_ticks(0.0, 60.0, 10.0), vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0]);
    assert_eq!(nice_ticks(2.0, 2.0, 10.0), vec![2.0]);
    assert!(nice_ticks(0.0, 1.0, 0.0).is_empty());
}

#[test]
fn tick_labels_group_thousands() {
    let s = LinearScale::new((0.0, 10_000.0), (140.0, 0.0));
    let labels: Vec<String> = s.tick_labels(5).into_iter().map(|(_, l)| l).collect();
    assert_eq!(labels, ["0", "2,000", "4,000", "6,000", "8,000", "10,000"]);
    assert_eq!(format_grouped(1_234_567.891, 2), "1,234,567.89");
    assert_eq!(format_grouped(-950.0, 0), "-950");
    assert_eq!(format_grouped(-0.0001, 1), "0.0");
}

#[test]
fn monthly_span_ticks_every_month() {
    let s = TimeScale::new((at(2024, 1, 1), at(2024, 12, 1)), (0.0, 300.0));
    let ticks = s.month_ticks(10);
    let labels: Vec<&str> = ticks.iter().map(|(_, l)| l.as_str()).collect();
    assert_eq!(labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]);
    assert_eq!(s.map(at(2024, 1, 1)), 0.0);
    assert_eq!(s.map(at(2024, 12, 1)), 300.0);
}

#[test]
fn interval_choice_follows_span() {
    assert_eq!(TimeInterval::for_span(at(2024, 1, 1), at(2024, 1, 2), 10), TimeInterval::Hour(3));
    assert_eq!(TimeInterval::for_span(at(2024, 1, 1), at(2024, 1, 11), 10), TimeInterval::Day(1));
    assert_eq!(TimeInterval::for_span(at(2020, 1, 1), at(2024, 1, 1), 10), TimeInterval::Month(3));
    assert_eq!(TimeInterval::for_span(at(1990, 1, 1), at(2024, 1, 1), 10), TimeInterval::Year(5));
}

#[test]
fn quarterly_ticks_land_on_quarter_starts() {
    let ticks = TimeInterval::Month(3).range(at(2023, 2, 15), at(2024, 1, 1));
    assert_eq!(ticks, vec![at(2023, 4, 1), at(2023, 7, 1), at(2023, 10, 1), at(2024, 1, 1)]);
}

#[test]
fn weekly_ticks_start_on_sunday() {
    // 2024-01-03 is a Wednesday
    let ticks = TimeInterval::Week.range(at(2024, 1, 3), at(2024, 1, 21));
    assert_eq!(ticks, vec![at(2024, 1, 7), at(2024, 1, 14), at(2024, 1, 21)]);
}

#[test]
fn single_instant_off_the_hour_still_gets_a_tick() {
    let t = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(6, 30, 0).unwrap();
    let s = TimeScale::new((t, t), (0.0, 300.0));
    let ticks = s.month_ticks(10);
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].0, t);
    assert_eq!(ticks[0].1, "May");

    // an hour boundary inside the span is used as usual
    let end = t + chrono::Duration::minutes(45);
    assert_eq!(s.ticks(10).len(), 1);
    assert_eq!(TimeScale::new((t, end), (0.0, 300.0)).ticks(10), vec![at(2024, 5, 1) + chrono::Duration::hours(7)]);
}
