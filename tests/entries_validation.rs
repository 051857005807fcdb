use legend_rs::LegendError;
use legend_rs::entries::{Entry, LineDash, LineEntry, MarkerEntry, MarkerShape, RectangleEntry};
use plotters::style::RGBAColor;

fn rgb(c: RGBAColor) -> (u8, u8, u8) {
    (c.0, c.1, c.2)
}

fn missing_field(err: LegendError) -> &'static str {
    match err {
        LegendError::MissingField { field, .. } => field,
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn line_requires_label_and_color() {
    let err = LineEntry::builder().color("r").build().unwrap_err();
    assert_eq!(missing_field(err), "label");

    let err = LineEntry::builder().label("Test Line").build().unwrap_err();
    assert_eq!(missing_field(err), "color");

    let err = LineEntry::builder().label("   ").color("r").build().unwrap_err();
    assert_eq!(missing_field(err), "label");
}

#[test]
fn missing_field_message_names_the_field() {
    let err = MarkerEntry::builder()
        .label("Samples")
        .facecolor("b")
        .build()
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("`marker`"), "message was: {msg}");
    assert!(msg.contains("has to be set"), "message was: {msg}");
}

#[test]
fn line_defaults_and_options() {
    let entry = LineEntry::builder()
        .label("Measured")
        .color("r")
        .linestyle("--")
        .marker("o")
        .build()
        .unwrap();
    let Entry::Line(line) = entry else {
        panic!("expected a line entry");
    };
    assert_eq!(line.label, "Measured");
    assert_eq!(rgb(line.color), (255, 0, 0));
    assert_eq!(line.linestyle, LineDash::Dash);
    assert_eq!(line.marker, Some(MarkerShape::Circle));
    assert!((line.linewidth - 1.5).abs() < 1e-9);
    assert!((line.markersize - 6.0).abs() < 1e-9);
}

#[test]
fn line_marker_colors_default_to_line_color() {
    let Entry::Line(line) = LineEntry::builder()
        .label("Measured")
        .color("r")
        .marker("o")
        .build()
        .unwrap()
    else {
        panic!("expected a line entry");
    };
    assert_eq!(line.markerfacecolor, line.color);
    assert_eq!(line.markeredgecolor, line.color);
    assert!((line.markeredgewidth - 1.0).abs() < 1e-9);
}

#[test]
fn line_marker_can_be_hollow_with_its_own_edge() {
    let Entry::Line(line) = LineEntry::builder()
        .label("Fit")
        .color("r")
        .marker("s")
        .markerfacecolor("none")
        .markeredgecolor("k")
        .markeredgewidth(2.0)
        .linewidth(0.0)
        .build()
        .unwrap()
    else {
        panic!("expected a line entry");
    };
    assert_eq!(line.markerfacecolor.3, 0.0);
    assert_eq!(rgb(line.markeredgecolor), (0, 0, 0));
    assert!((line.markeredgewidth - 2.0).abs() < 1e-9);
    assert_eq!(line.linewidth, 0.0);

    let err = LineEntry::builder()
        .label("Fit")
        .color("r")
        .markeredgecolor("not-a-color")
        .build()
        .unwrap_err();
    assert!(matches!(err, LegendError::InvalidColor { field: "markeredgecolor", .. }));

    let err = LineEntry::builder()
        .label("Fit")
        .color("r")
        .markeredgewidth(-1.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, LegendError::InvalidValue { field: "markeredgewidth", .. }));
}

#[test]
fn marker_facecolor_only_mirrors_to_edge() {
    let Entry::Marker(m) = MarkerEntry::builder()
        .label("Samples")
        .marker("s")
        .facecolor("b")
        .build()
        .unwrap()
    else {
        panic!("expected a marker entry");
    };
    assert_eq!(rgb(m.facecolor), (0, 0, 255));
    assert_eq!(rgb(m.edgecolor), (0, 0, 255));
}

#[test]
fn marker_edgecolor_only_mirrors_to_face() {
    let Entry::Marker(m) = MarkerEntry::builder()
        .label("Samples")
        .marker("^")
        .edgecolor("g")
        .build()
        .unwrap()
    else {
        panic!("expected a marker entry");
    };
    assert_eq!(rgb(m.facecolor), (0, 128, 0));
    assert_eq!(rgb(m.edgecolor), (0, 128, 0));
    assert_eq!(m.marker, MarkerShape::TriangleUp);
}

#[test]
fn marker_keeps_distinct_face_and_edge() {
    let Entry::Marker(m) = MarkerEntry::builder()
        .label("Test Marker")
        .marker("o")
        .facecolor("b")
        .edgecolor("g")
        .build()
        .unwrap()
    else {
        panic!("expected a marker entry");
    };
    assert_eq!(rgb(m.facecolor), (0, 0, 255));
    assert_eq!(rgb(m.edgecolor), (0, 128, 0));
}

#[test]
fn generic_color_fills_face_and_edge() {
    let Entry::Rectangle(r) = RectangleEntry::builder()
        .label("Test Rect")
        .color("#111111")
        .build()
        .unwrap()
    else {
        panic!("expected a rectangle entry");
    };
    assert_eq!(rgb(r.facecolor), (17, 17, 17));
    assert_eq!(rgb(r.edgecolor), (17, 17, 17));

    let Entry::Marker(m) = MarkerEntry::builder()
        .label("Dots")
        .marker("o")
        .color("C1")
        .build()
        .unwrap()
    else {
        panic!("expected a marker entry");
    };
    assert_eq!(rgb(m.facecolor), (255, 127, 14));
    assert_eq!(rgb(m.edgecolor), (255, 127, 14));
}

#[test]
fn rectangle_edgecolor_only_mirrors_to_face() {
    let Entry::Rectangle(r) = RectangleEntry::builder()
        .label("Band")
        .edgecolor("k")
        .build()
        .unwrap()
    else {
        panic!("expected a rectangle entry");
    };
    assert_eq!(rgb(r.facecolor), (0, 0, 0));
    assert_eq!(rgb(r.edgecolor), (0, 0, 0));
}

#[test]
fn face_and_edge_required_without_any_color() {
    let err = RectangleEntry::builder().label("Band").build().unwrap_err();
    assert_eq!(missing_field(err), "facecolor");

    let err = MarkerEntry::builder()
        .label("Dots")
        .marker("o")
        .build()
        .unwrap_err();
    assert_eq!(missing_field(err), "facecolor");
}

#[test]
fn generic_color_conflicts_with_face_or_edge() {
    let err = MarkerEntry::builder()
        .label("Dots")
        .marker("o")
        .facecolor("r")
        .color("b")
        .build()
        .unwrap_err();
    assert!(matches!(err, LegendError::ConflictingColors { entry: "marker" }));

    let err = RectangleEntry::builder()
        .label("Band")
        .edgecolor("r")
        .color("b")
        .build()
        .unwrap_err();
    assert!(matches!(err, LegendError::ConflictingColors { entry: "rectangle" }));
}

#[test]
fn invalid_values_are_rejected() {
    let err = LineEntry::builder()
        .label("Line")
        .color("definitely-not-a-color")
        .build()
        .unwrap_err();
    assert!(matches!(err, LegendError::InvalidColor { field: "color", .. }));

    let err = MarkerEntry::builder()
        .label("Dots")
        .marker("?")
        .color("r")
        .build()
        .unwrap_err();
    assert!(matches!(err, LegendError::UnknownMarker(_)));

    let err = LineEntry::builder()
        .label("Line")
        .color("r")
        .linestyle("~~")
        .build()
        .unwrap_err();
    assert!(matches!(err, LegendError::UnknownLineStyle(_)));

    let err = LineEntry::builder()
        .label("Line")
        .color("r")
        .linewidth(-1.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, LegendError::InvalidValue { field: "linewidth", .. }));

    let err = RectangleEntry::builder()
        .label("Band")
        .color("r")
        .alpha(1.5)
        .build()
        .unwrap_err();
    assert!(matches!(err, LegendError::InvalidValue { field: "alpha", .. }));
}

#[test]
fn marker_codes_and_names_parse() {
    let cases = [
        ("o", MarkerShape::Circle),
        ("circle", MarkerShape::Circle),
        ("s", MarkerShape::Square),
        ("D", MarkerShape::Diamond),
        ("d", MarkerShape::ThinDiamond),
        ("x", MarkerShape::X),
        ("+", MarkerShape::Plus),
        ("*", MarkerShape::Star),
        ("h", MarkerShape::Hexagon),
    ];
    for (code, expected) in cases {
        assert_eq!(code.parse::<MarkerShape>().unwrap(), expected, "code {code}");
    }
}
