//! Navigation command handlers.

use crate::app::{Action, App};
use crate::input::Command;

/// Handles browsing commands.
///
/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => {
            app.quit();
            true
        }
        Command::DismissNotice => {
            app.dispatch(Action::DismissNotice);
            true
        }
        Command::Back => {
            app.dispatch(Action::Back);
            true
        }
        Command::MoveUp => {
            app.move_up();
            true
        }
        Command::MoveDown => {
            app.move_down();
            true
        }
        Command::Activate => {
            app.activate_selected();
            true
        }
        Command::NavBar(index) => {
            app.select_nav(*index);
            true
        }
        Command::CycleChatKind => {
            let next = app.state.chat_kind.next();
            app.dispatch(Action::SetChatKind(next));
            true
        }
        Command::CycleMood => {
            let next = app.state.mood.next();
            app.dispatch(Action::SetMood(next));
            true
        }
        Command::Perform(action) => {
            app.dispatch(action.clone());
            true
        }
        Command::Noop => true,
        _ => false,
    }
}
