//! Navigation menu overlay

use crate::state::{NavMenu, View};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 22;

/// Render the section menu below the header, right-aligned
pub fn render_nav_menu(frame: &mut Frame, menu: &NavMenu) {
    let area = frame.area();
    let height = View::ALL.len() as u16 + 2; // + borders
    let menu_area = Rect {
        x: area.width.saturating_sub(MENU_WIDTH + 1),
        y: area.y + 3,
        width: MENU_WIDTH.min(area.width),
        height: height.min(area.height.saturating_sub(3)),
    };

    frame.render_widget(Clear, menu_area);

    let selected = menu.selected_view();
    let lines: Vec<Line> = View::ALL
        .iter()
        .map(|view| {
            let style = if *view == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(
                format!(" {} {:<16}", view.shortcut(), view.label()),
                style,
            ))
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(widget, menu_area);
}
