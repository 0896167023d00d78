use ilars_charting::normalize::{Aligned, SeriesPoint, align, parse_point_date};
use jiff::civil::{Date, date};

fn point(d: Date, value: f64) -> SeriesPoint {
    SeriesPoint { date: d, value }
}

#[test]
fn missing_days_become_gaps_not_zeros() {
    let d1 = date(2026, 8, 1);
    let d2 = date(2026, 8, 2);
    let d3 = date(2026, 8, 3);

    let lars = vec![point(d1, 31.0), point(d3, 27.0)];
    let steps = vec![point(d1, 4200.0), point(d2, 6100.0), point(d3, 5800.0)];

    let aligned = align(&[lars, steps]);

    assert_eq!(aligned.axis, vec![d1, d2, d3]);
    assert_eq!(aligned.series[0], vec![Some(31.0), None, Some(27.0)]);
    assert_eq!(
        aligned.series[1],
        vec![Some(4200.0), Some(6100.0), Some(5800.0)]
    );
}

#[test]
fn zero_is_a_real_measurement() {
    let d1 = date(2026, 8, 1);
    let aligned = align(&[vec![point(d1, 0.0)]]);
    assert_eq!(aligned.series[0], vec![Some(0.0)]);
}

#[test]
fn aligning_identical_date_sets_is_identity() {
    let d1 = date(2026, 8, 1);
    let d2 = date(2026, 8, 8);
    let a = vec![point(d1, 12.0), point(d2, 15.0)];
    let b = vec![point(d1, 3.0), point(d2, 4.0)];

    let aligned = align(&[a, b]);

    assert_eq!(aligned.axis, vec![d1, d2]);
    assert_eq!(aligned.series[0], vec![Some(12.0), Some(15.0)]);
    assert_eq!(aligned.series[1], vec![Some(3.0), Some(4.0)]);
}

#[test]
fn no_series_yields_empty_output() {
    let aligned = align(&[]);
    assert_eq!(
        aligned,
        Aligned {
            axis: vec![],
            series: vec![]
        }
    );
}

#[test]
fn one_empty_series_yields_empty_axis() {
    let aligned = align(&[vec![]]);
    assert!(aligned.axis.is_empty());
    assert_eq!(aligned.series, vec![Vec::<Option<f64>>::new()]);
}

#[test]
fn single_point_series_yields_axis_of_one() {
    let d = date(2026, 8, 15);
    let aligned = align(&[vec![point(d, 18.0)]]);
    assert_eq!(aligned.axis, vec![d]);
    assert_eq!(aligned.series[0], vec![Some(18.0)]);
}

#[test]
fn unsorted_input_is_sorted_on_the_axis() {
    let d1 = date(2026, 7, 30);
    let d2 = date(2026, 8, 2);
    let aligned = align(&[vec![point(d2, 2.0), point(d1, 1.0)]]);
    assert_eq!(aligned.axis, vec![d1, d2]);
    assert_eq!(aligned.series[0], vec![Some(1.0), Some(2.0)]);
}

#[test]
fn duplicate_days_keep_the_last_value() {
    let d = date(2026, 8, 1);
    let aligned = align(&[vec![point(d, 10.0), point(d, 12.0)]]);
    assert_eq!(aligned.axis, vec![d]);
    assert_eq!(aligned.series[0], vec![Some(12.0)]);
}

#[test]
fn point_dates_reduce_to_calendar_days() {
    assert_eq!(parse_point_date("2026-08-25"), Some(date(2026, 8, 25)));
    assert_eq!(
        parse_point_date("2026-08-25T14:03:00Z"),
        Some(date(2026, 8, 25))
    );
    assert_eq!(parse_point_date("not a date"), None);
    assert_eq!(parse_point_date(""), None);
}

#[test]
fn timestamped_and_plain_dates_land_on_the_same_day() {
    let lars_day = parse_point_date("2026-08-25T23:59:00").unwrap();
    let steps_day = parse_point_date("2026-08-25").unwrap();

    let aligned = align(&[vec![point(lars_day, 30.0)], vec![point(steps_day, 7000.0)]]);
    assert_eq!(aligned.axis.len(), 1);
    assert_eq!(aligned.series[0], vec![Some(30.0)]);
    assert_eq!(aligned.series[1], vec![Some(7000.0)]);
}
