//! Reusable UI components

mod button;
mod dialog;
mod menu;
mod notification;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_input_dialog;
pub use menu::render_nav_menu;
pub use notification::render_notifications;
