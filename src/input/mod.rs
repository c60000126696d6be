//! Input handling module for keyboard and command processing.
//!
//! All input follows one path:
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> handler -> App
//! ```
//!
//! - [`command`] - The [`Command`] enum with all possible user actions
//! - [`context`] - [`InputContext`] for tracking the current input mode
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands
//! - [`keybindings`] - Default key binding configuration
//! - [`handlers`] - Command execution handlers

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, InputMode};
pub use handlers::execute_command;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

/// Feed one terminal event to the app.
///
/// Key releases and events without a binding are ignored. Resizes only
/// request a redraw.
pub fn handle_event(app: &mut App, registry: &CommandRegistry, event: Event) {
    let context = InputContext::from_app(app);
    let command = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => registry.dispatch(key, &context),
        Event::Paste(text) => registry.dispatch_paste(text, &context),
        Event::Resize(_, _) => {
            app.needs_redraw = true;
            None
        }
        _ => None,
    };
    if let Some(command) = command {
        tracing::trace!(?command, "key command");
        if execute_command(app, &command) {
            app.needs_redraw = true;
        }
    }
}
