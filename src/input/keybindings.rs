//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::InputMode;
use crate::app::{Action, Screen};

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per input mode
    pub mode: HashMap<InputMode, HashMap<KeyCombo, Command>>,
    /// Extra browsing keybindings per screen
    pub screen: HashMap<Screen, HashMap<KeyCombo, Command>>,
    /// Cursor and deletion keys shared by every text field
    pub text_editing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            mode: HashMap::new(),
            screen: HashMap::new(),
            text_editing: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_mode_bindings();
        config.setup_screen_bindings();
        config.setup_text_editing_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_mode_bindings(&mut self) {
        let mut browse = HashMap::new();
        browse.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        browse.insert(KeyCombo::plain(KeyCode::Backspace), Command::Back);
        browse.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        browse.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        browse.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        browse.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        browse.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        browse.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::Activate);
        browse.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.mode.insert(InputMode::Browse, browse);

        let mut login = HashMap::new();
        login.insert(KeyCombo::plain(KeyCode::Tab), Command::NextLoginField);
        login.insert(KeyCombo::shift(KeyCode::BackTab), Command::NextLoginField);
        login.insert(KeyCombo::plain(KeyCode::Up), Command::NextLoginField);
        login.insert(KeyCombo::plain(KeyCode::Down), Command::NextLoginField);
        login.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitLogin);
        self.mode.insert(InputMode::Login, login);

        let mut editing = HashMap::new();
        editing.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitText);
        editing.insert(KeyCombo::plain(KeyCode::Esc), Command::StopEditing);
        self.mode.insert(InputMode::Editing, editing);
    }

    fn setup_screen_bindings(&mut self) {
        let mut trainer = HashMap::new();
        trainer.insert(KeyCombo::plain(KeyCode::Tab), Command::CycleChatKind);
        trainer.insert(KeyCombo::plain(KeyCode::Char('m')), Command::CycleMood);
        self.screen.insert(Screen::AiTrainer, trainer);

        let mut tracker = HashMap::new();
        tracker.insert(
            KeyCombo::plain(KeyCode::Left),
            Command::Perform(Action::ChangeWeek(-1)),
        );
        tracker.insert(
            KeyCombo::plain(KeyCode::Right),
            Command::Perform(Action::ChangeWeek(1)),
        );
        self.screen.insert(Screen::PregnancyTracker, tracker);

        let mut music = HashMap::new();
        music.insert(
            KeyCombo::plain(KeyCode::Char('p')),
            Command::Perform(Action::TogglePlayback),
        );
        music.insert(
            KeyCombo::plain(KeyCode::Right),
            Command::Perform(Action::NextTrack),
        );
        music.insert(
            KeyCombo::plain(KeyCode::Left),
            Command::Perform(Action::PreviousTrack),
        );
        self.screen.insert(Screen::MusicPlayer, music);
    }

    fn setup_text_editing_bindings(&mut self) {
        let bindings = [
            (KeyCode::Backspace, Command::Backspace),
            (KeyCode::Delete, Command::DeleteChar),
            (KeyCode::Left, Command::MoveCursorLeft),
            (KeyCode::Right, Command::MoveCursorRight),
            (KeyCode::Home, Command::MoveCursorHome),
            (KeyCode::End, Command::MoveCursorEnd),
        ];
        for (code, command) in bindings {
            self.text_editing.insert(KeyCombo::plain(code), command);
        }
        self.text_editing
            .insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::MoveCursorHome);
        self.text_editing
            .insert(KeyCombo::ctrl(KeyCode::Char('e')), Command::MoveCursorEnd);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_mode(&self, mode: InputMode, combo: &KeyCombo) -> Option<&Command> {
        self.mode.get(&mode).and_then(|m| m.get(combo))
    }

    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&screen).and_then(|m| m.get(combo))
    }

    pub fn get_text_editing(&self, combo: &KeyCombo) -> Option<&Command> {
        self.text_editing.get(combo)
    }
}
