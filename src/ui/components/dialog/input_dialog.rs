//! Text prompt dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a prompt with a single text input, centered on the screen
pub fn render_input_dialog(frame: &mut Frame, title: &str, question: &str, input: &str) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to continue, "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to skip"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: question,
            input: Some(input),
            hint: Some(hint),
            ..Default::default()
        },
    );
}
