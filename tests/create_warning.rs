use std::sync::Mutex;

use legend_rs::Legend;
use legend_rs::entries::LineEntry;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Collects every record so the test can inspect what was logged.
struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.0.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

fn take_warnings() -> Vec<String> {
    let mut records = CAPTURE.0.lock().unwrap();
    records
        .drain(..)
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, msg)| msg)
        .collect()
}

// Single test in this binary: the logger is process-global.
#[test]
fn output_before_create_warns_once_per_call() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let dir = tempfile::tempdir().unwrap();
    let mut legend = Legend::default();
    legend.add_entry(LineEntry::builder().label("Line").color("r").build().unwrap());
    take_warnings();

    legend.save(dir.path().join("legend.svg")).unwrap();
    let warnings = take_warnings();
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("Use `create` method"), "{warnings:?}");

    legend.show().unwrap();
    let warnings = take_warnings();
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("Use `create` method"), "{warnings:?}");

    assert!(legend.render_rgb().unwrap().is_none());
    let warnings = take_warnings();
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("Use `create` method"), "{warnings:?}");

    // Once created, saving is silent.
    legend.create(None).unwrap();
    legend.save(dir.path().join("legend.svg")).unwrap();
    assert!(take_warnings().is_empty());
    assert!(dir.path().join("legend.svg").exists());
}
