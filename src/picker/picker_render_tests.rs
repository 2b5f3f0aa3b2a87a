use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::app::App;
use crate::config::MarkerStyle;
use crate::test_utils::test_helpers::test_app;

fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| super::picker_render::render_list(app, frame, frame.area()))
        .unwrap();

    terminal.backend().to_string()
}

#[test]
fn test_render_shows_every_choice() {
    let mut app = test_app(&["tea", "coffee", "water"]);

    let output = render_to_string(&mut app, 40, 10);

    assert!(output.contains("tea"));
    assert!(output.contains("coffee"));
    assert!(output.contains("water"));
}

#[test]
fn test_render_title_carries_counts() {
    let mut app = test_app(&["a", "b", "c"]);
    app.picker.toggle_at_cursor();

    let output = render_to_string(&mut app, 40, 10);
    assert!(output.contains("(1/3 selected)"));
}

#[test]
fn test_render_custom_title() {
    let mut app = test_app(&["a", "b"]);
    app.title = "Beverages".to_string();

    let output = render_to_string(&mut app, 40, 10);
    assert!(output.contains("Beverages"));
}

#[test]
fn test_render_marks_selected_rows() {
    let mut app = test_app(&["a", "b"]);

    let before = render_to_string(&mut app, 40, 10);
    assert!(!before.contains('✓'));

    app.picker.toggle_at_cursor();

    let after = render_to_string(&mut app, 40, 10);
    assert!(after.contains('✓'));
}

#[test]
fn test_render_ascii_markers() {
    let mut app = test_app(&["a", "b"]);
    app.marker = MarkerStyle::Ascii;
    app.picker.toggle_at_cursor();

    let output = render_to_string(&mut app, 40, 10);
    assert!(output.contains("[x]"));
    assert!(output.contains("[ ]"));
    assert!(!output.contains('✓'));
}

#[test]
fn test_render_cursor_marker_on_cursor_row() {
    let mut app = test_app(&["a", "b"]);

    let output = render_to_string(&mut app, 40, 10);
    assert!(output.contains('►'));
}

#[test]
fn test_render_clips_to_viewport() {
    let choices: Vec<String> = (0..12).map(|i| format!("row{:02}", i)).collect();
    let choice_refs: Vec<&str> = choices.iter().map(String::as_str).collect();
    let mut app = test_app(&choice_refs);

    // 7 rows tall leaves 5 inside the borders
    let output = render_to_string(&mut app, 40, 7);

    assert!(output.contains("row00"));
    assert!(output.contains("row04"));
    assert!(!output.contains("row05"));
}

#[test]
fn test_render_scrolls_to_cursor() {
    let choices: Vec<String> = (0..12).map(|i| format!("row{:02}", i)).collect();
    let choice_refs: Vec<&str> = choices.iter().map(String::as_str).collect();
    let mut app = test_app(&choice_refs);

    for _ in 0..11 {
        app.picker.select_next();
    }

    let output = render_to_string(&mut app, 40, 7);

    assert!(output.contains("row11"));
    assert!(!output.contains("row00"));
}
