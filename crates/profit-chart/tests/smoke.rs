// File: crates/profit-chart/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG through the report pipeline.

use profit_chart::{ProfitPoint, ProfitReporter, Theme};

#[test]
fn generate_writes_png_with_configured_size() {
    let points = vec![
        ProfitPoint::new(0.0, 0.0),
        ProfitPoint::new(1.0, 2.0),
        ProfitPoint::new(2.0, 1.0),
        ProfitPoint::new(3.0, 3.5),
        ProfitPoint::new(4.0, 2.5),
    ];

    let reporter = ProfitReporter::new().with_size(400, 300);
    let written = reporter
        .generate(&points, "target/test_out/smoke.png")
        .expect("generate should succeed");

    let bytes = std::fs::read(&written).expect("output exists");
    assert!(!bytes.is_empty(), "png should be non-empty");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.width(), 400);
    assert_eq!(img.height(), 300);
}

#[test]
fn single_point_renders() {
    let reporter = ProfitReporter::new()
        .with_size(320, 240)
        .with_theme(Theme::light());
    let written = reporter
        .generate(&[ProfitPoint::new(5.0, 10.0)], "target/test_out/single.png")
        .expect("single point should render");

    let meta = std::fs::metadata(written).expect("output exists");
    assert!(meta.len() > 0);
}

#[test]
fn negative_profits_render() {
    // losses put the line below zero; the y range has to follow
    let points = vec![
        ProfitPoint::new(100.0, -50.0),
        ProfitPoint::new(200.0, -10.0),
        ProfitPoint::new(300.0, 40.0),
    ];
    let reporter = ProfitReporter::new().with_size(320, 240);
    reporter
        .generate(&points, "target/test_out/losses.png")
        .expect("negative profits should render");
}
