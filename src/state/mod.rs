//! Application state module

mod app_state;
pub mod forms;
mod notification;
mod site;
mod welcome;

pub use app_state::*;
pub use notification::*;
pub use site::*;
pub use welcome::*;
