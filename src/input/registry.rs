//! Command registry for dispatching keyboard input to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, InputMode};
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::NAV_BAR;

/// Registry for dispatching key events to commands.
///
/// Priority:
/// 1. Global bindings (Ctrl+C)
/// 2. Notice popup: any other key dismisses it
/// 3. Mode bindings (browse, login form, text field)
/// 4. Text editing keys, then printable characters, while typing
/// 5. Screen bindings and nav bar digits while browsing
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

fn is_plain_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(c)
        }
        _ => None,
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if context.mode == InputMode::Notice {
            return Some(Command::DismissNotice);
        }

        if let Some(cmd) = self.config.get_mode(context.mode, &combo) {
            return Some(cmd.clone());
        }

        if context.is_typing() {
            if let Some(cmd) = self.config.get_text_editing(&combo) {
                return Some(cmd.clone());
            }
            return is_plain_char(&key).map(Command::InsertChar);
        }

        if let Some(cmd) = self.config.get_screen(context.screen, &combo) {
            return Some(cmd.clone());
        }

        if context.nav_visible {
            if let Some(digit) = is_plain_char(&key).and_then(|c| c.to_digit(10)) {
                let index = (digit as usize).checked_sub(1)?;
                if index < NAV_BAR.len() {
                    return Some(Command::NavBar(index));
                }
            }
        }

        None
    }

    /// Pasted text goes into the focused field; ignored otherwise.
    pub fn dispatch_paste(&self, text: String, context: &InputContext) -> Option<Command> {
        context.is_typing().then_some(Command::Paste(text))
    }
}
