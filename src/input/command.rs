//! Command definitions for keyboard input handling.
//!
//! Key bindings map to a [`Command`]; the handlers turn commands into
//! controller calls. Keeping the two apart lets the bindings be tested
//! without an [`App`](crate::app::App).

use crate::app::Action;

/// Represents all possible commands that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, or q while browsing)
    Quit,
    /// Close the notice popup
    DismissNotice,
    /// Ignore the key
    Noop,

    // =========================================================================
    // Browsing
    // =========================================================================
    /// Go to the explicit parent screen (Esc)
    Back,
    /// Move the menu cursor up
    MoveUp,
    /// Move the menu cursor down
    MoveDown,
    /// Activate the highlighted entry (Enter)
    Activate,
    /// Bottom navigation shortcut (1-5)
    NavBar(usize),
    /// Next assistant on the chat screen (Tab)
    CycleChatKind,
    /// Next mood on the chat screen
    CycleMood,
    /// Shortcut straight to a state machine action
    Perform(Action),

    // =========================================================================
    // Text Editing
    // =========================================================================
    InsertChar(char),
    Backspace,
    DeleteChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    Paste(String),
    /// Submit the focused text field (Enter)
    SubmitText,
    /// Leave the text field (Esc)
    StopEditing,

    // =========================================================================
    // Login Form
    // =========================================================================
    /// Switch between email and password (Tab)
    NextLoginField,
    SubmitLogin,
}

impl Command {
    /// Whether this command changes the content of a text field.
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::Backspace
                | Command::DeleteChar
                | Command::MoveCursorLeft
                | Command::MoveCursorRight
                | Command::MoveCursorHome
                | Command::MoveCursorEnd
                | Command::Paste(_)
        )
    }
}
