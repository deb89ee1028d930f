//! Contact form rendering

mod field_renderer;

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use field_renderer::{draw_field, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact section: the form, plus the confirmation panel after a submission
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let (form_area, panel_area) = if app.state.last_submission.is_some() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    draw_form(frame, form_area, app);

    if let (Some(panel_area), Some(submission)) = (panel_area, &app.state.last_submission) {
        let lines: Vec<Line> = app
            .state
            .site
            .success_lines(submission)
            .into_iter()
            .map(Line::from)
            .collect();
        let panel = Paragraph::new(lines)
            .style(Style::default().fg(Color::Green))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Sent ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );
        frame.render_widget(panel, panel_area);
    }
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;
    let fields = form.fields();

    let mut constraints = vec![Constraint::Length(2)]; // Title
    constraints.extend(
        fields
            .iter()
            .map(|f| Constraint::Length(field_height(f) + 1)), // + error line
    );
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Get in touch",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({SUBMIT_SHORTCUT} to send)"),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(title, chunks[0]);

    for (idx, field) in fields.iter().enumerate() {
        let is_active = idx == form.active_field_index;
        draw_field(
            frame,
            chunks[idx + 1],
            field,
            is_active,
            form.errors.error_for(&field.id),
        );
    }

    let submitting = app.submitter.is_submitting();
    let label = if submitting {
        "Sending..."
    } else {
        "Send Message"
    };
    let button_area = chunks[fields.len() + 1];
    let button_area = Rect {
        width: button_area.width.min(20),
        ..button_area
    };
    render_button(
        frame,
        button_area,
        label,
        form.is_submit_row_active(),
        !submitting,
    );
}
