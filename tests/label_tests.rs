use approx::assert_abs_diff_eq;
use profile_chart::core::{AggregationMode, ChartData, Color, LineKind, RawSeries};
use profile_chart::{ChartError, PresentationData, ValueFormatter};

fn chart(lines: Vec<RawSeries>, mode: AggregationMode) -> PresentationData {
    let data = ChartData::new(vec![0.0, 10.0, 20.0], lines, mode).expect("chart data");
    PresentationData::new(data, |v: f64| format!("{v}")).expect("presentation")
}

fn series(name: &str, values: Vec<i64>) -> RawSeries {
    RawSeries::new(name, Color::rgb(0.0, 0.0, 1.0), LineKind::Line, values)
}

struct Kilometers;

impl ValueFormatter for Kilometers {
    fn format(&self, value: f64) -> String {
        format!("{:.1} km", value / 1000.0)
    }

    fn format_sample(&self, value: i64) -> String {
        format!("{value} m")
    }
}

#[test]
fn labels_are_formatted_per_sample() {
    let chart = chart(vec![series("a", vec![1, 2, 3])], AggregationMode::Plain);
    assert_eq!(chart.labels(), &["0", "10", "20"]);
}

#[test]
fn label_at_interpolates_between_samples() {
    let chart = chart(vec![series("a", vec![1, 2, 3])], AggregationMode::Plain);

    assert_eq!(chart.label_at(1.5).expect("label"), "15");
    assert_eq!(chart.label_at(0.25).expect("label"), "2.5");
    assert_eq!(chart.label_at(0.0).expect("label"), "0");
    assert_eq!(chart.label_at(2.0).expect("label"), "20");
}

#[test]
fn label_at_rejects_out_of_range_indices() {
    let chart = chart(vec![series("a", vec![1, 2, 3])], AggregationMode::Plain);

    for index in [-0.5, 2.01, 3.0, f64::NAN, f64::INFINITY] {
        let err = chart.label_at(index).expect_err("out of range");
        assert!(matches!(err, ChartError::FractionalIndexOutOfRange { .. }));
    }
}

#[test]
fn custom_formatter_is_used_for_labels_and_samples() {
    let lines = vec![series("altitude", vec![120, 150, 90])];
    let data = ChartData::new(vec![0.0, 1500.0, 3000.0], lines, AggregationMode::Plain)
        .expect("chart data");
    let chart = PresentationData::new(data, Kilometers).expect("presentation");

    assert_eq!(chart.labels(), &["0.0 km", "1.5 km", "3.0 km"]);
    assert_eq!(chart.label_at(0.5).expect("label"), "0.8 km");

    let info = chart.point_info(1.2).expect("info");
    assert_eq!(info.lines[0].formatted_value, "150 m");
}

#[test]
fn point_info_reports_visible_lines_in_path_space() {
    let mut chart = chart(
        vec![series("a", vec![10, 20, 30]), series("b", vec![1, 2, 3])],
        AggregationMode::Plain,
    );

    let info = chart.point_info(0.5).expect("info");
    assert_eq!(info.label, "5");
    assert_eq!(info.lines.len(), 2);
    assert_eq!(info.lines[0].line_index, 0);
    assert_eq!(info.lines[0].name, "a");
    assert_abs_diff_eq!(info.lines[0].point.x, 0.5);
    assert_abs_diff_eq!(info.lines[0].point.y, 5.0, epsilon = 1e-9);
    assert_eq!(info.lines[0].formatted_value, "20");
    assert_abs_diff_eq!(info.lines[1].point.y, 0.5, epsilon = 1e-9);
    assert_eq!(info.lines[1].formatted_value, "2");

    chart.set_visible(false, 0).expect("hide a");
    let info = chart.point_info(0.5).expect("info");
    assert_eq!(info.lines.len(), 1);
    assert_eq!(info.lines[0].line_index, 1);
}

#[test]
fn point_info_follows_stacked_percentages() {
    let chart = chart(
        vec![series("a", vec![1, 1, 1]), series("b", vec![1, 3, 0])],
        AggregationMode::Percentage,
    );

    let info = chart.point_info(1.0).expect("info");
    assert_abs_diff_eq!(info.lines[0].point.y, 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(info.lines[1].point.y, 100.0, epsilon = 1e-9);
    assert_eq!(info.lines[1].formatted_value, "3");
}

#[test]
fn point_info_rejects_out_of_range_indices() {
    let chart = chart(vec![series("a", vec![1, 2, 3])], AggregationMode::Plain);
    assert!(matches!(
        chart.point_info(-1.0),
        Err(ChartError::FractionalIndexOutOfRange { .. })
    ));
}
