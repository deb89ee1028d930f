//! Dialog components

mod base;
mod input_dialog;

pub use input_dialog::render_input_dialog;
