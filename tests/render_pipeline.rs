//! End-to-end: YAML event list through layout to a drawing surface

use chrono::Weekday;
use weekgrid::parsers::{palette, read_events, FULL_WEEK};
use weekgrid::render::{
    DrawOp, PageSetup, PageTransform, PdfSurface, RecordingSurface, RenderOptions, StandardFont,
};
use weekgrid::types::{PageBox, Rgb, Schedule, WeekgridError};

const EPS: f64 = 1e-9;

fn filled_rects(ops: &[DrawOp]) -> Vec<(f64, f64, f64, f64)> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                fill: true,
                ..
            } => Some((*x, *y, *width, *height)),
            _ => None,
        })
        .collect()
}

fn schedule_from(input: &str, days: &[Weekday]) -> Schedule {
    let mut schedule = Schedule::new(days.iter().copied());
    schedule.extend(read_events(input, palette(false)).unwrap());
    schedule
}

// ========== layout ==========

#[test]
fn test_single_event_two_days() {
    let schedule = schedule_from(
        r#"[{"name": "Math", "days": "M", "time": "9:00-10:00"}]"#,
        &[Weekday::Mon, Weekday::Tue],
    );
    let area = PageBox::new(0.0, 500.0, 400.0, 500.0);
    let mut surface = RecordingSurface::new(10.0);

    let layout = schedule
        .render(&mut surface, area, 10.0, &RenderOptions::default())
        .unwrap();

    assert!((layout.range.min - 8.5).abs() < EPS);
    assert!((layout.range.max - 10.5).abs() < EPS);
    assert_eq!(layout.hours, vec![9, 10]);

    let rects = filled_rects(surface.ops());
    assert_eq!(rects.len(), 1);
    let (x, y, w, h) = rects[0];
    assert!((x - layout.column_x(0)).abs() < EPS);
    assert!((w - layout.day_width).abs() < EPS);
    assert!((h - layout.hour_height).abs() < EPS);
    // top edge half an hour below the top of the grid body
    let top = layout.body.uly - 0.5 * layout.hour_height;
    assert!((y + h - top).abs() < EPS);

    assert_eq!(surface.centred_strings(), vec!["Monday", "Tuesday", "Math"]);
}

#[test]
fn test_dark_event_color_gets_white_text() {
    let schedule = schedule_from(
        r##"[{"name": "Night class", "days": "M", "time": "19-21", "color": "#000000"}]"##,
        &[Weekday::Mon],
    );
    let area = PageBox::new(0.0, 500.0, 400.0, 500.0);
    let mut surface = RecordingSurface::new(10.0);
    schedule
        .render(&mut surface, area, 10.0, &RenderOptions::default())
        .unwrap();

    let ops = surface.ops();
    assert!(ops.contains(&DrawOp::FillColor(Rgb::BLACK)));
    let text_at = ops
        .iter()
        .position(|op| matches!(op, DrawOp::CentredString { text, .. } if text == "Night class"))
        .unwrap();
    let last_fill = ops[..text_at]
        .iter()
        .rev()
        .find_map(|op| match op {
            DrawOp::FillColor(c) => Some(*c),
            _ => None,
        });
    assert_eq!(last_fill, Some(Rgb::WHITE));
}

#[test]
fn test_yaml_block_names_render_each_line() {
    let schedule = schedule_from(
        "- name: |\n    Chem\n    Lab B\n  days: T\n  time: 10:30-11:45\n  color: \"#3366cc\"\n",
        &[Weekday::Tue],
    );
    let area = PageBox::new(0.0, 500.0, 400.0, 500.0);
    let mut surface = RecordingSurface::new(10.0);
    schedule
        .render(&mut surface, area, 10.0, &RenderOptions::default())
        .unwrap();

    assert!(surface
        .ops()
        .contains(&DrawOp::FillColor(Rgb::from_hex("3366cc").unwrap())));
    assert_eq!(surface.centred_strings(), vec!["Tuesday", "Chem", "Lab B"]);
}

#[test]
fn test_multi_day_event_in_each_column() {
    let schedule = schedule_from(
        r#"[{"name": "Lab", "days": "MW", "time": "13-15"}]"#,
        &FULL_WEEK,
    );
    let area = PageSetup::letter_landscape().content_area();
    let mut surface = RecordingSurface::new(10.0);
    let layout = schedule
        .render(&mut surface, area, 10.0, &RenderOptions::default())
        .unwrap();

    let xs: Vec<f64> = filled_rects(surface.ops()).iter().map(|r| r.0).collect();
    assert_eq!(xs.len(), 2);
    // Sunday-first week: Monday is column 1, Wednesday column 3
    assert!((xs[0] - layout.column_x(1)).abs() < EPS);
    assert!((xs[1] - layout.column_x(3)).abs() < EPS);
}

#[test]
fn test_explicit_range_clips_nothing_outside_area() {
    let schedule = schedule_from(
        r#"[{"name": "Early", "days": "F", "time": "6-7"}]"#,
        &[Weekday::Fri],
    );
    let area = PageBox::new(72.0, 540.0, 648.0, 468.0);
    let options = RenderOptions {
        min_time: Some(8.0),
        max_time: Some(17.0),
        ..RenderOptions::default()
    };
    let mut surface = RecordingSurface::new(10.0);
    let layout = schedule.render(&mut surface, area, 10.0, &options).unwrap();

    assert_eq!(layout.range.min, 8.0);
    assert_eq!(layout.range.max, 17.0);
    assert_eq!(layout.hours.first(), Some(&9));
    assert_eq!(layout.hours.last(), Some(&16));
    // the 6:00 event lies above the grid and is not drawn
    assert!(filled_rects(surface.ops()).is_empty());
}

// ========== errors ==========

#[test]
fn test_empty_schedule_fails() {
    let schedule = Schedule::new(FULL_WEEK);
    let mut surface = RecordingSurface::new(10.0);
    let area = PageSetup::letter_landscape().content_area();

    let err = schedule
        .render(&mut surface, area, 10.0, &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, WeekgridError::EmptySchedule));
    assert!(surface.ops().is_empty());
}

#[test]
fn test_bad_input_names_event() {
    let err = read_events(
        r#"[{"days": "M", "time": "9-10"}, {"days": "M", "time": "9"}]"#,
        palette(true),
    )
    .unwrap_err();
    assert!(err.to_string().contains("event #2"));
}

// ========== pdf output ==========

#[test]
fn test_pdf_written_to_file() {
    let input = std::fs::read_to_string(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/classes.yaml"),
    )
    .unwrap();
    let mut schedule = Schedule::new(FULL_WEEK);
    let events = read_events(&input, palette(true)).unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(events[0].text(), ["Calculus II", "Hall 204"]);
    schedule.extend(events);

    let setup = PageSetup::letter_landscape();
    let mut pdf = PdfSurface::new(
        "Schedule",
        &setup,
        StandardFont::TimesRoman.into(),
        10.0,
        PageTransform::identity(),
    )
    .unwrap();
    schedule
        .render(&mut pdf, setup.content_area(), 10.0, &RenderOptions::default())
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classes.pdf");
    pdf.save(std::fs::File::create(&path).unwrap()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}
