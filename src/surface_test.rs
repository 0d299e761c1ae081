use super::*;

#[test]
fn recording_surface_starts_empty() {
    let s = RecordingSurface::new();
    assert!(s.calls.is_empty());
    assert!(s.arcs().is_empty());
    assert!(s.texts().is_empty());
}

#[test]
fn recording_surface_keeps_call_order() {
    let mut s = RecordingSurface::new();
    let arc = Arc { center: Point::new(1.0, 2.0), radius: 24.0, start: 0.5, end: 1.5 };
    assert!(s.clear_background(Size::new(10.0, 10.0), "#fff").is_ok());
    assert!(s.stroke_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), "#f00").is_ok());
    assert!(s.stroke_arc(&arc, "#f00").is_ok());
    assert!(s.draw_text("12.0°", Point::new(3.0, 4.0), "#f00", "14px sans-serif").is_ok());

    assert_eq!(s.calls.len(), 4);
    assert!(matches!(s.calls[0], DrawCall::ClearBackground { .. }));
    assert!(matches!(s.calls[1], DrawCall::Line { .. }));
    assert_eq!(s.arcs(), vec![arc]);
    assert_eq!(s.texts(), vec!["12.0°"]);
}

#[test]
fn recording_surface_captures_rect_styles() {
    let mut s = RecordingSurface::new();
    assert!(s.fill_rect(Point::new(5.0, 5.0), 12.0, "#ff8888").is_ok());
    assert!(s.stroke_rect(Point::new(5.0, 5.0), 12.0, "#000", 1.0).is_ok());
    assert_eq!(
        s.calls[1],
        DrawCall::StrokeRect { center: Point::new(5.0, 5.0), size: 12.0, color: "#000".into(), line_width: 1.0 }
    );
}
