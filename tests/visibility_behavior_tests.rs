use std::cell::RefCell;
use std::rc::Rc;

use profile_chart::core::{AggregationMode, ChartData, Color, LineKind, RawSeries};
use profile_chart::{PresentationData, VisibilityListener};

#[derive(Default)]
struct RecordingListener {
    events: RefCell<Vec<(bool, usize, f64, bool)>>,
}

impl VisibilityListener for RecordingListener {
    fn on_line_visibility_changed(&self, data: &PresentationData, visible: bool, index: usize) {
        let applied = data.is_visible(index).unwrap_or(!visible) == visible;
        self.events
            .borrow_mut()
            .push((visible, index, data.upper(), applied));
    }
}

fn chart(mode: AggregationMode) -> PresentationData {
    let lines = vec![
        RawSeries::new("a", Color::rgb(1.0, 0.0, 0.0), LineKind::Line, vec![1, 5, 3]),
        RawSeries::new("b", Color::rgb(0.0, 1.0, 0.0), LineKind::Line, vec![40, 10, 20]),
    ];
    let data = ChartData::new(vec![0.0, 1.0, 2.0], lines, mode).expect("chart data");
    PresentationData::new(data, |v: f64| format!("{v:.1}")).expect("presentation")
}

#[test]
fn hiding_the_last_visible_line_is_ignored() {
    let mut chart = chart(AggregationMode::Plain);
    assert!(chart.set_visible(false, 0).expect("hide a"));
    let (lower, upper) = (chart.lower(), chart.upper());

    assert!(!chart.set_visible(false, 1).expect("hide b"));
    assert!(chart.is_visible(1).expect("visible"));
    assert_eq!(chart.visible_count(), 1);
    assert_eq!((chart.lower(), chart.upper()), (lower, upper));
}

#[test]
fn hidden_line_can_always_be_shown() {
    let mut chart = chart(AggregationMode::Percentage);
    chart.set_visible(false, 1).expect("hide b");
    assert!(!chart.is_visible(1).expect("hidden"));

    assert!(chart.set_visible(true, 1).expect("show b"));
    assert!(chart.is_visible(1).expect("visible"));
    assert_eq!(chart.visible_count(), 2);
}

#[test]
fn listener_is_notified_after_recalculation() {
    let mut chart = chart(AggregationMode::Plain);
    let listener = Rc::new(RecordingListener::default());
    chart.set_listener(&listener);
    assert!(chart.has_listener());

    chart.set_visible(false, 1).expect("hide b");
    chart.set_visible(true, 1).expect("show b");

    let events = listener.events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], (false, 1, 5.0, true));
    assert_eq!(events[1], (true, 1, 40.0, true));
}

#[test]
fn ignored_hide_does_not_notify() {
    let mut chart = chart(AggregationMode::Plain);
    chart.set_visible(false, 0).expect("hide a");

    let listener = Rc::new(RecordingListener::default());
    chart.set_listener(&listener);
    assert!(!chart.set_visible(false, 1).expect("hide b"));
    assert!(listener.events.borrow().is_empty());
}

#[test]
fn listener_is_not_kept_alive_by_chart() {
    let mut chart = chart(AggregationMode::Plain);
    let listener = Rc::new(RecordingListener::default());
    chart.set_listener(&listener);
    assert_eq!(Rc::strong_count(&listener), 1);

    drop(listener);
    assert!(!chart.has_listener());
    assert!(chart.set_visible(false, 0).expect("hide a"));
}

#[test]
fn cleared_listener_receives_nothing() {
    let mut chart = chart(AggregationMode::Plain);
    let listener = Rc::new(RecordingListener::default());
    chart.set_listener(&listener);
    chart.clear_listener();

    chart.set_visible(false, 0).expect("hide a");
    assert!(listener.events.borrow().is_empty());
    assert!(!chart.has_listener());
}

#[test]
fn plain_round_trip_restores_geometry_and_bounds() {
    let mut chart = chart(AggregationMode::Plain);
    let before = chart.snapshot();

    chart.set_visible(false, 0).expect("hide a");
    chart.set_visible(true, 0).expect("show a");
    assert_eq!(chart.snapshot(), before);
}

#[test]
fn hiding_an_already_hidden_line_with_one_visible_is_ignored() {
    let mut chart = chart(AggregationMode::Percentage);
    assert!(chart.set_visible(false, 0).expect("hide a"));
    let before = chart.snapshot();

    let listener = Rc::new(RecordingListener::default());
    chart.set_listener(&listener);
    assert!(!chart.set_visible(false, 0).expect("hide a again"));

    assert!(listener.events.borrow().is_empty());
    assert!(!chart.is_visible(0).expect("hidden"));
    assert_eq!(chart.snapshot(), before);
}
