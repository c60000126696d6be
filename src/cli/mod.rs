//! Command-line interface.
//!
//! Called early in `main()` to handle flags before the TUI starts:
//!
//! ```ignore
//! use mamae_fit::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if run_cli_command(&command) {
//!     return Ok(());
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage, version_line, VERSION};

/// Handle commands that only print. Returns true when one was handled.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            println!("{}", usage());
            true
        }
        CliCommand::Serve | CliCommand::RunTui => false,
    }
}
