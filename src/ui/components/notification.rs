//! Toast notifications in the top-right corner

use crate::state::Notification;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 4;

/// Stack live notifications below the header, newest on top
pub fn render_notifications(frame: &mut Frame, notifications: &[Notification]) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let mut y = area.y + 3;

    for notification in notifications.iter().rev() {
        if y + TOAST_HEIGHT > area.height.saturating_sub(1) {
            break;
        }
        let toast_area = Rect {
            x: area.width.saturating_sub(width + 1),
            y,
            width,
            height: TOAST_HEIGHT,
        };

        frame.render_widget(Clear, toast_area);
        let toast = Paragraph::new(notification.message.as_str())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue))
                    .style(Style::default().bg(Color::Blue)),
            );
        frame.render_widget(toast, toast_area);

        y += TOAST_HEIGHT;
    }
}
