mod common;
use babylog::errors::AppError;
use babylog::export::layout::PageGeometry;
use babylog::export::{
    DocumentSink, DrawCommand, ExportFormat, ExportLogic, ExportRecord, LogKind, PageCursor,
    PdfSink, layout, replay,
};
use babylog::imaging::{self, EncodedImage, ImageFormat};
use babylog::models::{DiaperKind, DiaperLogEntry, FeedingLogEntry, SleepLogEntry};
use chrono::NaiveTime;
use common::{RecordingSink, png_fixture, ts};
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn feeding(h: u32) -> FeedingLogEntry {
    FeedingLogEntry {
        timestamp: ts(h, 0),
        left_time_seconds: 125,
        right_time_seconds: 0,
        formula_oz: 2.5,
        pumped_milk_oz: 0.0,
        notes: String::new(),
    }
}

fn sleep(h: u32) -> SleepLogEntry {
    SleepLogEntry {
        timestamp: ts(h, 0),
        start_time: t(21, 5),
        end_time: t(6, 0),
        duration_text: "8h 55m".to_string(),
        duration_minutes: 535,
        notes: "slept well".to_string(),
    }
}

fn diaper(kind: DiaperKind, image: Option<Arc<EncodedImage>>) -> DiaperLogEntry {
    DiaperLogEntry {
        timestamp: ts(14, 20),
        kind,
        image,
        notes: String::new(),
    }
}

fn fake_jpeg(width: u32, height: u32) -> Arc<EncodedImage> {
    Arc::new(EncodedImage {
        bytes: vec![0xFF, 0xD8, 0xFF, 0xD9],
        width,
        height,
        format: ImageFormat::Jpeg,
    })
}

fn texts(cmds: &[DrawCommand]) -> Vec<(&str, f32)> {
    cmds.iter()
        .filter_map(|c| match c {
            DrawCommand::Text { content, y, .. } => Some((content.as_str(), *y)),
            _ => None,
        })
        .collect()
}

fn page_breaks(cmds: &[DrawCommand]) -> usize {
    cmds.iter().filter(|c| **c == DrawCommand::NewPage).count()
}

// ---------------------------
// Entry lines
// ---------------------------

#[test]
fn test_feeding_lines_use_placeholders() {
    let lines = feeding(9).lines(1);
    assert_eq!(
        lines,
        vec![
            "Date: 2025-03-14 09:00:00",
            "Left Breast Time: 02:05",
            "Right Breast Time: 00:00",
            "Formula: 2.5 oz",
            "Pumped Milk: N/A",
            "Notes: None",
        ]
    );
}

#[test]
fn test_sleep_lines_use_twelve_hour_clock() {
    let lines = sleep(7).lines(1);
    assert_eq!(lines[1], "Start Time: 9:05 PM");
    assert_eq!(lines[2], "End Time: 6:00 AM");
    assert_eq!(lines[3], "Sleep Duration: 8h 55m");
    assert_eq!(lines[4], "Notes: slept well");
}

#[test]
fn test_diaper_lines_are_numbered() {
    let lines = diaper(DiaperKind::Both, None).lines(3);
    assert_eq!(lines[0], "Log #3");
    assert_eq!(lines[1], "Diaper Type: both");
    assert_eq!(lines[2], "Timestamp: 2025-03-14 14:20:00");
    assert_eq!(lines[3], "Notes: No notes provided");
}

#[test]
fn test_file_names_per_log() {
    assert_eq!(LogKind::Feeding.file_name(ExportFormat::Pdf), "feeding_logs.pdf");
    assert_eq!(LogKind::Sleep.file_name(ExportFormat::Csv), "sleep_logs.csv");
    assert_eq!(
        LogKind::Diaper.file_name(ExportFormat::Json),
        "diaper_change_logs.json"
    );
    assert_eq!(LogKind::Diaper.title(), "Diaper Change Logs");
}

// ---------------------------
// Pagination
// ---------------------------

#[test]
fn test_page_break_before_overflowing_line() {
    // printable height 270, top 20, 10 per line: 25 lines fit
    let geo = PageGeometry {
        height: 290.0,
        bottom_margin: 20.0,
        ..PageGeometry::default()
    };
    let mut cursor = PageCursor::new(&geo);
    for i in 0..25 {
        cursor.line(format!("line {i}"));
    }
    assert_eq!(page_breaks(cursor.commands()), 0);
    assert_eq!(cursor.y(), 270.0);

    cursor.line("line 25");
    let cmds = cursor.finish();
    assert_eq!(page_breaks(&cmds), 1);
    assert_eq!(cmds[cmds.len() - 2], DrawCommand::NewPage);
    assert_eq!(texts(&cmds).last(), Some(&("line 25", 20.0)));
}

#[test]
fn test_no_text_below_printable_area() {
    let geo = PageGeometry::default();
    let entries: Vec<_> = (0..12).map(|i| feeding(6 + i)).collect();
    let cmds = layout(&entries, &geo);

    assert!(page_breaks(&cmds) >= 2);
    for (content, y) in texts(&cmds) {
        assert!(
            y + geo.line_height <= geo.printable_height(),
            "{content} at {y}"
        );
        assert!(y >= geo.top);
    }
}

#[test]
fn test_fifth_sleep_entry_starts_a_new_page() {
    let geo = PageGeometry::default();
    let entries: Vec<_> = (0..5).map(|i| sleep(7 + i)).collect();
    let cmds = layout(&entries, &geo);

    assert_eq!(cmds[0], DrawCommand::SetFontSize(12.0));
    assert_eq!(page_breaks(&cmds), 1);

    let pos = cmds
        .iter()
        .position(|c| *c == DrawCommand::NewPage)
        .unwrap();
    match &cmds[pos + 1] {
        DrawCommand::Text { content, y, .. } => {
            assert_eq!(content, "Date: 2025-03-14 11:00:00");
            assert_eq!(*y, 20.0);
        }
        other => panic!("unexpected command after page break: {other:?}"),
    }
}

#[test]
fn test_entry_may_split_across_pages() {
    let geo = PageGeometry::default();
    let entries: Vec<_> = (0..4).map(|i| feeding(8 + i)).collect();
    let cmds = layout(&entries, &geo);

    assert_eq!(page_breaks(&cmds), 1);
    let pos = cmds
        .iter()
        .position(|c| *c == DrawCommand::NewPage)
        .unwrap();

    let before = texts(&cmds[..pos]);
    assert_eq!(before.last(), Some(&("Right Breast Time: 00:00", 260.0)));
    let after = texts(&cmds[pos..]);
    assert_eq!(after.first(), Some(&("Formula: 2.5 oz", 20.0)));
}

#[test]
fn test_layout_is_deterministic() {
    let geo = PageGeometry::default();
    let entries: Vec<_> = (0..9).map(sleep).collect();
    assert_eq!(layout(&entries, &geo), layout(&entries, &geo));
}

#[test]
fn test_image_follows_entry_lines() {
    let geo = PageGeometry::default();
    let entries = vec![diaper(DiaperKind::Poop, Some(fake_jpeg(800, 600)))];
    let cmds = layout(&entries, &geo);

    let DrawCommand::Image { format, x, y, w, h, .. } = cmds.last().unwrap() else {
        panic!("last command should be the image");
    };
    assert_eq!(*format, ImageFormat::Jpeg);
    assert_eq!((*x, *y), (10.0, 70.0));
    assert_eq!((*w, *h), (50.0, 37.5));

    let notes_y = texts(&cmds)
        .into_iter()
        .find(|(c, _)| c.starts_with("Notes:"))
        .map(|(_, y)| y);
    assert_eq!(notes_y, Some(60.0));
}

#[test]
fn test_portrait_image_is_fitted_by_height() {
    let geo = PageGeometry::default();
    let entries = vec![diaper(DiaperKind::Pee, Some(fake_jpeg(300, 600)))];
    let cmds = layout(&entries, &geo);

    let Some(DrawCommand::Image { w, h, .. }) = cmds.last() else {
        panic!("last command should be the image");
    };
    assert_eq!((*w, *h), (25.0, 50.0));
}

// ---------------------------
// Sinks
// ---------------------------

#[test]
fn test_replay_preserves_command_order() {
    let geo = PageGeometry::default();
    let entries: Vec<_> = (0..5).map(|i| sleep(7 + i)).collect();
    let cmds = layout(&entries, &geo);

    let mut sink = RecordingSink::new(geo.height);
    replay(&cmds, &mut sink);

    assert_eq!(sink.calls.len(), cmds.len());
    assert_eq!(sink.calls[0], "font 12");
    assert_eq!(sink.calls[1], "text 10,20 Sleep Logs");
    assert_eq!(sink.pages(), 2);
}

#[test]
fn test_pdf_sink_writes_a_pdf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let img = imaging::compress(&png_fixture(120, 80), 800, 0.7).unwrap();
    let geo = PageGeometry::default();
    let mut entries: Vec<_> = (0..6)
        .map(|_| diaper(DiaperKind::Pee, Some(Arc::new(img.clone()))))
        .collect();
    entries.push(diaper(DiaperKind::Poop, None));

    let cmds = layout(&entries, &geo);
    let mut sink = PdfSink::new();
    replay(&cmds, &mut sink);
    assert_eq!(sink.page_count(), 1 + page_breaks(&cmds));
    assert_eq!(sink.page_height(), 297.0);

    sink.save(&path).unwrap();
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.windows(b"DCTDecode".len()).any(|w| w == b"DCTDecode"));
}

#[test]
fn test_empty_pdf_still_has_a_page() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.pdf");

    let mut sink = PdfSink::default();
    assert_eq!(sink.page_count(), 0);
    sink.save(&path).unwrap();
    assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
}

// ---------------------------
// ExportLogic
// ---------------------------

#[test]
fn test_export_empty_log_is_rejected() {
    let dir = tempdir().unwrap();
    let entries: Vec<SleepLogEntry> = Vec::new();

    let err = ExportLogic::export(
        &entries,
        ExportFormat::Pdf,
        dir.path(),
        &PageGeometry::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::EmptyLog("sleep")));
    assert!(!dir.path().join("sleep_logs.pdf").exists());
}

#[test]
fn test_export_pdf_to_fixed_file_name() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nested");
    let entries = vec![feeding(9)];

    let path = ExportLogic::export(&entries, ExportFormat::Pdf, &out, &PageGeometry::default())
        .unwrap();
    assert_eq!(path, out.join("feeding_logs.pdf"));
    assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_export_csv_has_header_and_rows() {
    let dir = tempdir().unwrap();
    let entries = vec![
        diaper(DiaperKind::Pee, None),
        diaper(DiaperKind::Both, Some(fake_jpeg(10, 10))),
    ];

    let path = ExportLogic::export(
        &entries,
        ExportFormat::Csv,
        dir.path(),
        &PageGeometry::default(),
    )
    .unwrap();
    let text = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "timestamp,kind,has_image,notes");
    assert_eq!(lines[1], "2025-03-14 14:20:00,pee,false,");
    assert_eq!(lines[2], "2025-03-14 14:20:00,both,true,");
}

#[test]
fn test_export_json_rows() {
    let dir = tempdir().unwrap();
    let entries = vec![sleep(7)];

    let path = ExportLogic::export(
        &entries,
        ExportFormat::Json,
        dir.path(),
        &PageGeometry::default(),
    )
    .unwrap();
    assert!(path.ends_with("sleep_logs.json"));

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(rows[0]["start_time"], "21:05");
    assert_eq!(rows[0]["duration"], "8h 55m");
    assert_eq!(rows[0]["duration_minutes"], 535);
}
