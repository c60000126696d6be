//! Presentation state that never reaches the transition function.

use crate::widgets::InputBox;

use super::menu::TextPurpose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// The email and password fields of the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: InputBox,
    pub password: InputBox,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn focused_mut(&mut self) -> &mut InputBox {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

/// Cursor, text fields and editing mode.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Highlighted menu row
    pub cursor: usize,
    /// Field shared by the chat box and the ingredient list
    pub text: InputBox,
    /// Set while a text field has focus
    pub editing: Option<TextPurpose>,
    pub login: LoginForm,
}

impl UiState {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn start_editing(&mut self, purpose: TextPurpose) {
        if self.editing != Some(purpose) {
            self.text.clear();
        }
        self.editing = Some(purpose);
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    /// New screen: back to the first row, leave any text field.
    pub fn reset_for_screen(&mut self) {
        self.cursor = 0;
        self.editing = None;
        self.text.clear();
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = (self.cursor + 1) % len;
        }
    }
}
