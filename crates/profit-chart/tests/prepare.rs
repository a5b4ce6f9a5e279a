// File: crates/profit-chart/tests/prepare.rs
// Purpose: Validate sorting, statistics and input validation of the prepare step.

use profit_chart::{prepare, ChartError, ProfitPoint};

fn sample() -> Vec<ProfitPoint> {
    [
        (1000.0, 150.0),
        (2000.0, 280.0),
        (3000.0, 450.0),
        (4000.0, 580.0),
        (5000.0, 750.0),
        (6000.0, 820.0),
        (7000.0, 950.0),
        (8000.0, 1100.0),
        (9000.0, 1180.0),
        (10000.0, 1350.0),
    ]
    .iter()
    .map(|&(a, p)| ProfitPoint::new(a, p))
    .collect()
}

#[test]
fn sorts_ascending_and_keeps_multiset() {
    let mut shuffled = sample();
    shuffled.swap(0, 7);
    shuffled.swap(2, 9);
    shuffled.swap(4, 1);

    let prepared = prepare(&shuffled).expect("prepare");

    assert!(prepared
        .points
        .windows(2)
        .all(|w| w[0].input_amount <= w[1].input_amount));

    // Same multiset of points as the input
    let mut got: Vec<_> = prepared
        .points
        .iter()
        .map(|p| (p.input_amount, p.profit))
        .collect();
    let mut want: Vec<_> = shuffled.iter().map(|p| (p.input_amount, p.profit)).collect();
    got.sort_by(|a, b| a.partial_cmp(b).unwrap());
    want.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(got, want);
}

#[test]
fn statistics_match_aggregates() {
    let prepared = prepare(&sample()).expect("prepare");
    assert_eq!(prepared.stats.max, 1350.0);
    assert_eq!(prepared.stats.min, 150.0);
    // sum of the sample profits is 7610
    assert!((prepared.stats.mean - 761.0).abs() < 1e-9);
}

#[test]
fn statistics_are_order_independent() {
    let sorted = prepare(&sample()).expect("prepare sorted");
    let mut reversed_input = sample();
    reversed_input.reverse();
    let reversed = prepare(&reversed_input).expect("prepare reversed");
    assert_eq!(sorted.stats, reversed.stats);
}

#[test]
fn sorted_input_comes_back_unchanged() {
    let input = sample();
    let prepared = prepare(&input).expect("prepare");
    let got: Vec<_> = prepared
        .points
        .iter()
        .map(|p| (p.input_amount, p.profit))
        .collect();
    let want: Vec<_> = input.iter().map(|p| (p.input_amount, p.profit)).collect();
    assert_eq!(got, want);
}

#[test]
fn single_point_stats() {
    let prepared = prepare(&[ProfitPoint::new(5.0, 10.0)]).expect("prepare");
    assert_eq!(prepared.stats.max, 10.0);
    assert_eq!(prepared.stats.min, 10.0);
    assert_eq!(prepared.stats.mean, 10.0);
}

#[test]
fn empty_dataset_is_rejected() {
    let err = prepare(&[]).unwrap_err();
    assert!(matches!(err, ChartError::Validation(_)));
}

#[test]
fn non_finite_values_are_rejected() {
    let err = prepare(&[ProfitPoint::new(1.0, f64::NAN)]).unwrap_err();
    assert!(matches!(err, ChartError::Validation(_)));

    let err = prepare(&[ProfitPoint::new(f64::INFINITY, 1.0)]).unwrap_err();
    assert!(matches!(err, ChartError::Validation(_)));
}

#[test]
fn equal_input_amounts_keep_input_order() {
    let pts = [
        ProfitPoint::new(5.0, 1.0),
        ProfitPoint::new(5.0, 2.0),
        ProfitPoint::new(1.0, 3.0),
    ];
    let prepared = prepare(&pts).expect("prepare");
    assert_eq!(prepared.points[0].profit, 3.0);
    assert_eq!(prepared.points[1].profit, 1.0);
    assert_eq!(prepared.points[2].profit, 2.0);
}

#[test]
fn caller_slice_is_untouched() {
    let input = vec![ProfitPoint::new(2.0, 1.0), ProfitPoint::new(1.0, 2.0)];
    let _ = prepare(&input).expect("prepare");
    assert_eq!(input[0].input_amount, 2.0);
    assert_eq!(input[1].input_amount, 1.0);
}
