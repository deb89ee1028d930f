//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_HINT;
use crate::state::View;
use chrono::{Datelike, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header height in rows (borders + nav line)
const HEADER_HEIGHT: u16 = 3;

/// Split the screen into header and main content, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the brand and section tabs
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.site.brand()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for view in View::ALL {
        let is_selected = view == app.state.current_view;
        let style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} {} ", view.shortcut(), view.label()),
            style,
        ));
    }

    spans.push(Span::styled(
        "   m:menu",
        Style::default().fg(Color::DarkGray),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar with key hints and the footer
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = if app.state.welcome.is_visible() {
        "Enter:ok  Esc:skip".to_string()
    } else if app.state.menu.open {
        "j/k:nav  Enter:go  Esc:close".to_string()
    } else {
        get_view_hints(&app.state.current_view)
    };

    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {hints}"),
        Style::default().fg(Color::Gray),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Footer on the right
    let footer = footer_text(app.state.site.brand());
    let footer_width = footer.chars().count() as u16;
    let footer_area = Rect {
        x: area.width.saturating_sub(footer_width),
        y: area.height.saturating_sub(1),
        width: footer_width.min(area.width),
        height: 1,
    };
    let footer_widget =
        Paragraph::new(footer).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(footer_widget, footer_area);
}

/// "© <year> <brand>" with the current year
fn footer_text(brand: &str) -> String {
    format!(" © {} {brand} ", Local::now().year())
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Home => "h/p/c:section  Tab:next  m:menu  q:quit".to_string(),
        View::Products => "j/k:nav  Enter:interested  h/p/c:section  q:quit".to_string(),
        View::Contact => format!("Tab:next  Shift+Tab:prev  {SUBMIT_HINT}  Esc:back"),
    }
}
