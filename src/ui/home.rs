//! Hero section

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let site = app.state.site;

    // Push the hero roughly to the vertical center
    let top_padding = area.height.saturating_sub(9) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();

    lines.push(Line::from(Span::styled(
        site.brand(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        site.tagline(),
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        app.state.greeting(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("p", Style::default().fg(Color::Cyan)),
        Span::raw(format!(
            " to browse {}, ",
            site.catalog_title().to_lowercase()
        )),
        Span::styled("c", Style::default().fg(Color::Cyan)),
        Span::raw(" to get in touch."),
    ]));

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(hero, area);
}
