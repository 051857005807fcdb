use legend_rs::entries::{Entry, LineEntry, MarkerEntry, RectangleEntry};
use legend_rs::layout::{column_sizes, layout};
use legend_rs::style::FontSize;
use legend_rs::{Legend, LegendError, LegendStyle};

fn line(label: &str) -> Entry {
    LineEntry::builder().label(label).color("r").build().unwrap()
}

fn labels(n: usize) -> Vec<Entry> {
    (0..n).map(|i| line(&format!("Entry {i}"))).collect()
}

#[test]
fn column_split_matches_fill_rules() {
    assert_eq!(column_sizes(5, 3), vec![2, 2, 1]);
    assert_eq!(column_sizes(6, 3), vec![2, 2, 2]);
    assert_eq!(column_sizes(2, 4), vec![1, 1]);
    assert_eq!(column_sizes(3, 1), vec![3]);
    assert!(column_sizes(0, 2).is_empty());
}

#[test]
fn entries_keep_insertion_order() {
    let mut legend = Legend::default();
    legend.add_entry(line("Test Line"));
    legend.add_entry(
        MarkerEntry::builder()
            .label("Test Marker")
            .marker("o")
            .facecolor("b")
            .edgecolor("g")
            .build()
            .unwrap(),
    );
    legend.add_entry(
        RectangleEntry::builder()
            .label("Test Rect")
            .color("#111111")
            .build()
            .unwrap(),
    );

    let figure = legend.create(Some((2.0, 2.0))).unwrap();
    let order: Vec<&str> = figure.items.iter().map(|i| i.entry.label()).collect();
    assert_eq!(order, ["Test Line", "Test Marker", "Test Rect"]);
    for (i, item) in figure.items.iter().enumerate() {
        assert_eq!(item.index, i);
    }
    // Single column: strictly top to bottom.
    for pair in figure.items.windows(2) {
        assert!(pair[0].handle.y < pair[1].handle.y);
    }
}

#[test]
fn multi_column_fill_is_column_major() {
    let style = LegendStyle {
        ncol: 3,
        ..LegendStyle::default()
    };
    let figure = layout(&labels(5), &style, None, 100.0).unwrap();
    assert_eq!(
        figure.column_labels(),
        vec![
            vec!["Entry 0", "Entry 1"],
            vec!["Entry 2", "Entry 3"],
            vec!["Entry 4"],
        ]
    );
    // Columns advance left to right; rows share a top edge.
    let first_col = &figure.items[0];
    let second_col = &figure.items[2];
    assert!(second_col.handle.x > first_col.label.right());
    assert!((first_col.handle.y - second_col.handle.y).abs() < 1e-9);
}

#[test]
fn fewer_entries_than_columns_drops_empty_columns() {
    let style = LegendStyle {
        ncol: 4,
        ..LegendStyle::default()
    };
    let figure = layout(&labels(2), &style, None, 100.0).unwrap();
    assert_eq!(figure.columns(), 2);
}

#[test]
fn tight_figure_wraps_the_frame() {
    let figure = layout(&[line("abc")], &LegendStyle::default(), None, 100.0).unwrap();
    // 10pt font: pad 4, handle 20, text pad 8, text 18 -> frame 54 x 18 points.
    assert!((figure.frame.w - 54.0).abs() < 1e-6, "frame w {}", figure.frame.w);
    assert!((figure.frame.h - 18.0).abs() < 1e-6, "frame h {}", figure.frame.h);
    // Plus borderpad (0.4) inches on each axis.
    assert!((figure.width_in - (54.0 / 72.0 + 0.4)).abs() < 1e-9);
    assert!((figure.height_in - (18.0 / 72.0 + 0.4)).abs() < 1e-9);
    // Centered.
    let (cx, cy) = figure.frame.center();
    assert!((cx - figure.width_pt() / 2.0).abs() < 1e-9);
    assert!((cy - figure.height_pt() / 2.0).abs() < 1e-9);
}

#[test]
fn tight_figure_grows_with_rows_and_label_length() {
    let style = LegendStyle::default();
    let short = layout(&[line("a")], &style, None, 100.0).unwrap();
    let long = layout(&[line("a much longer label")], &style, None, 100.0).unwrap();
    let tall = layout(&labels(4), &style, None, 100.0).unwrap();
    assert!(long.width_in > short.width_in);
    assert!(tall.height_in > short.height_in);
}

#[test]
fn explicit_figsize_is_kept_and_pixels_follow_dpi() {
    let figure = layout(&labels(2), &LegendStyle::default(), Some((2.0, 1.5)), 100.0).unwrap();
    assert_eq!(figure.width_in, 2.0);
    assert_eq!(figure.height_in, 1.5);
    assert_eq!(figure.size_px(100.0).unwrap(), (200, 150));
    assert_eq!(figure.size_px(200.0).unwrap(), (400, 300));
}

#[test]
fn larger_font_gives_larger_frame() {
    let small = layout(&labels(2), &LegendStyle::default(), None, 100.0).unwrap();
    let style = LegendStyle {
        fontsize: FontSize::XLarge,
        ..LegendStyle::default()
    };
    let large = layout(&labels(2), &style, None, 100.0).unwrap();
    assert!(large.frame.w > small.frame.w);
    assert!(large.frame.h > small.frame.h);
}

#[test]
fn multi_line_labels_make_taller_rows() {
    let style = LegendStyle::default();
    let one = layout(&[line("one")], &style, None, 100.0).unwrap();
    let two = layout(&[line("one\ntwo")], &style, None, 100.0).unwrap();
    assert_eq!(two.items[0].lines, vec!["one", "two"]);
    assert!(two.frame.h > one.frame.h);
}

#[test]
fn empty_legend_still_creates() {
    let mut legend = Legend::default();
    let figure = legend.create(None).unwrap();
    assert!(figure.items.is_empty());
    assert!(figure.width_in > 0.0 && figure.height_in > 0.0);
}

#[test]
fn invalid_geometry_is_rejected() {
    let err = layout(&labels(1), &LegendStyle::default(), Some((0.0, 2.0)), 100.0).unwrap_err();
    assert!(matches!(err, LegendError::InvalidValue { field: "figsize", .. }));

    let style = LegendStyle {
        ncol: 0,
        ..LegendStyle::default()
    };
    let err = layout(&labels(1), &style, None, 100.0).unwrap_err();
    assert!(matches!(err, LegendError::InvalidValue { field: "ncol", .. }));
}

#[test]
fn create_again_picks_up_new_entries() {
    let mut legend = Legend::default();
    legend.add_entry(line("first"));
    assert_eq!(legend.create(None).unwrap().items.len(), 1);
    legend.add_entry(line("second"));
    assert_eq!(legend.figure().unwrap().items.len(), 1);
    assert_eq!(legend.create(None).unwrap().items.len(), 2);
}

#[test]
fn oversized_figure_is_rejected_before_rendering() {
    let err = layout(&labels(1), &LegendStyle::default(), Some((1e5, 1e5)), 100.0).unwrap_err();
    assert!(matches!(err, LegendError::InvalidValue { field: "figsize", .. }));

    let mut legend = Legend::default();
    legend.add_entry(line("huge"));
    assert!(legend.create(Some((1e5, 1e5))).is_err());
    assert!(legend.figure().is_none());

    // Within the side limit but above the area limit.
    let err = layout(&labels(1), &LegendStyle::default(), Some((160.0, 160.0)), 100.0).unwrap_err();
    assert!(matches!(err, LegendError::InvalidValue { field: "figsize", .. }));

    let figure = layout(&labels(1), &LegendStyle::default(), Some((2.0, 2.0)), 100.0).unwrap();
    assert!(matches!(
        figure.size_px(1e6),
        Err(LegendError::InvalidValue { field: "figsize", .. })
    ));
}
