//! Editing command handlers.
//!
//! Text commands go to the login field with focus on the login screen and
//! to the shared text field everywhere else.

use crate::app::{App, Screen};
use crate::input::Command;
use crate::widgets::InputBox;

fn active_field(app: &mut App) -> &mut InputBox {
    if app.state.rendered_screen() == Screen::Login {
        app.ui.login.focused_mut()
    } else {
        &mut app.ui.text
    }
}

/// Handles editing-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_editing_command(app: &mut App, cmd: &Command) -> bool {
    if cmd.is_editing() {
        let field = active_field(app);
        match cmd {
            Command::InsertChar(c) => field.insert_char(*c),
            Command::Backspace => field.backspace(),
            Command::DeleteChar => field.delete_char(),
            Command::MoveCursorLeft => field.move_cursor_left(),
            Command::MoveCursorRight => field.move_cursor_right(),
            Command::MoveCursorHome => field.move_cursor_home(),
            Command::MoveCursorEnd => field.move_cursor_end(),
            Command::Paste(text) => field.insert_str(text),
            _ => {}
        }
        app.needs_redraw = true;
        return true;
    }

    match cmd {
        Command::SubmitText => {
            app.submit_text();
            true
        }
        Command::StopEditing => {
            app.ui.stop_editing();
            app.needs_redraw = true;
            true
        }
        Command::NextLoginField => {
            app.ui.login.toggle_focus();
            app.needs_redraw = true;
            true
        }
        Command::SubmitLogin => {
            app.submit_login();
            true
        }
        _ => false,
    }
}
