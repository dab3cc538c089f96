use super::*;

const RANGE: RangeInclusive<f32> = 10.0..=100.0;

#[test]
fn parses_slider_values() {
    assert_eq!(parse_zoom_input("50", &RANGE), Some(50.0));
    assert_eq!(parse_zoom_input(" 12.5 ", &RANGE), Some(12.5));
}

#[test]
fn clamps_out_of_range_values() {
    assert_eq!(parse_zoom_input("5", &RANGE), Some(10.0));
    assert_eq!(parse_zoom_input("1000", &RANGE), Some(100.0));
}

#[test]
fn rejects_garbage() {
    assert_eq!(parse_zoom_input("", &RANGE), None);
    assert_eq!(parse_zoom_input("abc", &RANGE), None);
    assert_eq!(parse_zoom_input("NaN", &RANGE), None);
    assert_eq!(parse_zoom_input("inf", &RANGE), None);
}

#[test]
fn readout_drops_trailing_zeroes() {
    assert_eq!(format_zoom(50.0), "50");
    assert_eq!(format_zoom(12.4), "12.4");
}
