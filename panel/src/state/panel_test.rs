use super::*;

#[test]
fn new_state_takes_initial_zoom() {
    let options = PanelOptions { zoom: 35.0, ..PanelOptions::default() };
    let state = PanelState::new(&options);
    assert_eq!(state.zoom, 35.0);
    assert!(state.error.is_none());
    assert!(state.drag_origin.is_none());
}

#[test]
fn drag_reports_incremental_deltas() {
    let mut state = PanelState::new(&PanelOptions::default());
    assert_eq!(state.drag_to(5.0, 5.0), None);
    state.begin_drag(10.0, 20.0);
    assert_eq!(state.drag_to(15.0, 18.0), Some((5.0, -2.0)));
    assert_eq!(state.drag_to(15.0, 28.0), Some((0.0, 10.0)));
    state.end_drag();
    assert_eq!(state.drag_to(0.0, 0.0), None);
}

#[test]
fn errors_can_be_cleared_by_their_source() {
    let mut state = PanelState::new(&PanelOptions::default());
    state.record_error(ErrorSource::Mount, "render context unavailable");
    assert_eq!(state.error_message(), Some("render context unavailable"));
    state.clear_error(ErrorSource::Mount);
    assert!(state.error.is_none());
}

#[test]
fn successful_resize_keeps_data_error() {
    let mut state = PanelState::new(&PanelOptions::default());
    state.record_error(ErrorSource::Data, "render context unavailable");
    state.clear_error(ErrorSource::Mount);
    assert_eq!(state.error.as_ref().map(|error| error.source), Some(ErrorSource::Data));
    state.clear_error(ErrorSource::Data);
    assert_eq!(state.error_message(), None);
}

#[test]
fn later_error_replaces_earlier_one() {
    let mut state = PanelState::new(&PanelOptions::default());
    state.record_error(ErrorSource::Data, "first");
    state.record_error(ErrorSource::Mount, "second");
    assert_eq!(state.error_message(), Some("second"));
    state.clear_error(ErrorSource::Data);
    assert_eq!(state.error_message(), Some("second"));
}
