//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run only the generator server until Ctrl+C
    Serve,
    /// Run the TUI with an embedded generator server (default)
    RunTui,
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first argument (program name) is skipped. Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use mamae_fit::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["mamae-fit".to_string(), "--serve".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Serve);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--serve" => return CliCommand::Serve,
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["mamae-fit", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["mamae-fit", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_serve_flag() {
        assert_eq!(parse(&["mamae-fit", "--serve"]), CliCommand::Serve);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["mamae-fit", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&["mamae-fit"]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["mamae-fit", "--unknown"]), CliCommand::RunTui);
    }

    #[test]
    fn test_program_name_is_not_a_flag() {
        assert_eq!(parse(&["--serve"]), CliCommand::RunTui);
    }
}
