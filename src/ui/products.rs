//! Product catalog section

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card height in rows (borders + blurb + price)
const CARD_HEIGHT: u16 = 4;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let site = app.state.site;
    let products = site.products();

    let mut constraints = vec![Constraint::Length(2)]; // Title
    constraints.extend(products.iter().map(|_| Constraint::Length(CARD_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", site.catalog_title()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    for (idx, product) in products.iter().enumerate() {
        let is_selected = idx == app.state.selected_product;
        let border_style = if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let content = vec![
            Line::from(product.blurb),
            Line::from(Span::styled(
                product.price,
                Style::default().fg(Color::Green),
            )),
        ];

        let card = Paragraph::new(content).block(
            Block::default()
                .title(format!(" {} ", product.name))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(card, chunks[idx + 1]);
    }
}
