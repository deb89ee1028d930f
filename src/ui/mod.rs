//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod products;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Products => products::draw(frame, main_area, app),
        View::Contact => forms::draw_contact(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Overlays, bottom to top
    if app.state.menu.open {
        components::render_nav_menu(frame, &app.state.menu);
    }
    components::render_notifications(frame, app.state.notifications.items());
    if app.state.welcome.is_visible() {
        components::render_input_dialog(
            frame,
            app.state.site.brand(),
            app.state.site.welcome_question(),
            &app.state.welcome.input,
        );
    }
}
