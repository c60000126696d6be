//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("mamae-fit {}", VERSION)
}

pub fn usage() -> String {
    format!(
        "{}\n\n\
         Usage: mamae-fit [--serve | --version | --help]\n\n  \
         (no flag)   run the terminal app with an embedded AI server\n  \
         --serve     run only the AI generator server until Ctrl+C\n  \
         -V, --version  print the version\n  \
         -h, --help     print this help\n\n\
         Environment: MAMAE_FIT_ADDR, MAMAE_FIT_ANALYSIS_DELAY_MS, MAMAE_FIT_PERMISSION_DELAY_MS,\n\
         MAMAE_FIT_SEED, MAMAE_FIT_SERVER_URL, MAMAE_FIT_LOG",
        version_line()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("mamae-fit "));
    }

    #[test]
    fn test_usage_lists_flags() {
        let text = usage();
        assert!(text.contains("--serve"));
        assert!(text.contains("MAMAE_FIT_SEED"));
    }
}
