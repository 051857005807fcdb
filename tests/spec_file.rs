use legend_rs::LegendError;
use legend_rs::spec_file::LegendFile;
use legend_rs::style::{FontSize, FontWeight, LegendStyle, TextSlant};

const SAMPLE: &str = r##"{
  "style": { "ncol": 2, "shadow": true, "fontsize": "large", "fontweight": "bold" },
  "figsize": [3.0, 1.5],
  "entries": [
    { "kind": "line", "label": "Measured", "color": "r", "linestyle": "--" },
    { "kind": "marker", "label": "Samples", "marker": "o", "facecolor": "b" },
    { "kind": "rectangle", "label": "Range", "color": "#111111" }
  ]
}"##;

#[test]
fn parses_style_figsize_and_entries() {
    let file = LegendFile::from_json_str(SAMPLE).unwrap();
    assert_eq!(file.figsize, Some((3.0, 1.5)));
    assert_eq!(file.style.ncol, 2);
    assert!(file.style.shadow);
    assert_eq!(file.style.fontsize, FontSize::Large);
    assert_eq!(file.style.fontweight, FontWeight::Bold);
    // Unspecified fields keep their defaults.
    assert!(file.style.border);
    assert_eq!(file.style.fontstyle, TextSlant::Normal);
    assert!((file.style.columnspacing - 2.0).abs() < 1e-9);

    let legend = file.into_legend().unwrap();
    let labels: Vec<&str> = legend.entries().iter().map(|e| e.label()).collect();
    assert_eq!(labels, ["Measured", "Samples", "Range"]);
}

#[test]
fn missing_field_reports_the_builder_error() {
    let json = r#"{ "entries": [ { "kind": "line", "color": "r" } ] }"#;
    let err = LegendFile::from_json_str(json)
        .unwrap()
        .into_legend()
        .unwrap_err();
    assert!(matches!(err, LegendError::MissingField { field: "label", .. }));
}

#[test]
fn unknown_kind_is_a_parse_error() {
    let json = r#"{ "entries": [ { "kind": "circle", "label": "x" } ] }"#;
    let err = LegendFile::from_json_str(json).unwrap_err();
    assert!(matches!(err, LegendError::Json(_)));
}

#[test]
fn numeric_font_settings() {
    let style: LegendStyle =
        serde_json::from_str(r#"{ "fontsize": 14, "fontweight": 700 }"#).unwrap();
    assert_eq!(style.fontsize, FontSize::Points(14.0));
    assert!((style.font_points() - 14.0).abs() < 1e-9);
    assert!(style.fontweight.is_bold());

    assert!(serde_json::from_str::<LegendStyle>(r#"{ "fontsize": "huge" }"#).is_err());
}

#[test]
fn empty_file_gives_default_legend() {
    let file = LegendFile::from_json_str("{}").unwrap();
    assert_eq!(file.style, LegendStyle::default());
    let legend = file.into_legend().unwrap();
    assert!(legend.entries().is_empty());
}

#[test]
fn load_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legend.json");
    std::fs::write(&path, SAMPLE).unwrap();
    let file = LegendFile::load(&path).unwrap();
    assert_eq!(file.entries.len(), 3);

    let err = LegendFile::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, LegendError::Io(_)));
}

#[test]
fn misspelled_entry_key_is_a_parse_error() {
    let json = r#"{ "entries": [
        { "kind": "marker", "label": "Samples", "marker": "o", "facecolor": "b", "edgecolr": "g" }
    ] }"#;
    let err = LegendFile::from_json_str(json).unwrap_err();
    assert!(matches!(err, LegendError::Json(_)));
    assert!(err.to_string().contains("edgecolr"), "message was: {err}");
}

#[test]
fn line_marker_options_are_read_from_the_file() {
    let json = r#"{ "entries": [
        { "kind": "line", "label": "Fit", "color": "r", "linewidth": 0, "marker": "o",
          "markerfacecolor": "none", "markeredgecolor": "k", "markeredgewidth": 2 }
    ] }"#;
    let legend = LegendFile::from_json_str(json).unwrap().into_legend().unwrap();
    assert_eq!(legend.entries().len(), 1);
}

#[test]
fn bold_weight_takes_precedence_over_slant() {
    use plotters::style::FontStyle;

    let italic: LegendStyle = serde_json::from_str(r#"{ "fontstyle": "italic" }"#).unwrap();
    assert!(matches!(italic.plotters_font_style(), FontStyle::Italic));

    let bold_italic: LegendStyle =
        serde_json::from_str(r#"{ "fontstyle": "italic", "fontweight": "bold" }"#).unwrap();
    assert!(matches!(bold_italic.plotters_font_style(), FontStyle::Bold));
}
