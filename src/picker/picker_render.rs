use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::app::App;
use crate::theme;

/// Render the checklist
pub fn render_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let rows = app.picker.rows();
    let selected = rows.iter().filter(|(_, on)| *on).count();

    let title = format!(" {} ({}/{} selected) ", app.title, selected, rows.len());

    // Rows that fit inside the borders
    let viewport = area.height.saturating_sub(2) as usize;
    app.picker.ensure_cursor_visible(viewport);
    let offset = app.picker.scroll_offset();

    let (mark_on, mark_off) = app.marker.glyphs();

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(viewport.max(1))
        .map(|(idx, (choice, on))| {
            let (mark, mark_color) = if *on {
                (mark_on, theme::picker::MARK_SELECTED)
            } else {
                (mark_off, theme::picker::MARK_UNSELECTED)
            };

            let line = if idx == app.picker.cursor() {
                let row_style = Style::default()
                    .fg(theme::picker::ITEM_CURSOR_FG)
                    .bg(theme::picker::ITEM_CURSOR_BG)
                    .add_modifier(theme::picker::ITEM_CURSOR_MODIFIER);
                Line::from(vec![
                    Span::styled(" ► ", row_style),
                    Span::styled(format!("{} ", mark), row_style.fg(mark_color)),
                    Span::styled(format!("{} ", choice), row_style),
                ])
            } else {
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(format!("{} ", mark), Style::default().fg(mark_color)),
                    Span::styled(
                        format!("{} ", choice),
                        Style::default().fg(theme::picker::ITEM_NORMAL_FG),
                    ),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(theme::picker::BORDER))
        .style(Style::default().bg(theme::picker::BACKGROUND));

    frame.render_widget(List::new(items).block(block), area);
}
