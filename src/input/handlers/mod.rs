//! Command handlers for executing commands.
//!
//! - [`navigation`] - Menu, screen and shortcut commands
//! - [`editing`] - Text fields and the login form

pub mod editing;
pub mod navigation;

pub use editing::*;
pub use navigation::*;

use crate::app::App;
use crate::input::Command;

/// Run `cmd` against the app.
///
/// Returns `true` if some handler accepted the command.
pub fn execute_command(app: &mut App, cmd: &Command) -> bool {
    handle_editing_command(app, cmd) || handle_navigation_command(app, cmd)
}
