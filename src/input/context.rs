//! Input context for determining which commands are available.

use crate::app::{App, Screen};

/// Which set of bindings is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Menu navigation
    #[default]
    Browse,
    /// Typing into the login form
    Login,
    /// Typing into the chat box or ingredient list
    Editing,
    /// A notice popup is open; any key closes it
    Notice,
}

/// Snapshot of the app state relevant to key handling.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub screen: Screen,
    pub mode: InputMode,
    /// Whether the bottom nav bar is drawn
    pub nav_visible: bool,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_app(app: &App) -> Self {
        let screen = app.state.rendered_screen();
        let mode = if app.state.notice.is_some() {
            InputMode::Notice
        } else if screen == Screen::Login {
            InputMode::Login
        } else if app.ui.is_editing() {
            InputMode::Editing
        } else {
            InputMode::Browse
        };
        Self {
            screen,
            mode,
            nav_visible: app.state.shows_bottom_nav(),
        }
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    pub fn with_mode(mut self, mode: InputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_nav(mut self, visible: bool) -> Self {
        self.nav_visible = visible;
        self
    }

    /// Whether printable keys go into a text field.
    pub fn is_typing(&self) -> bool {
        matches!(self.mode, InputMode::Login | InputMode::Editing)
    }
}
