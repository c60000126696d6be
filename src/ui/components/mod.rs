//! Reusable UI building blocks.

pub mod dialog_frame;
pub mod menu_list;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use menu_list::render_menu;
