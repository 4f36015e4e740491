//! Application configuration from CLI flags and environment.

use clap::Parser;

/// PiCalc-rs, a parallel Chudnovsky pi digit calculator.
#[derive(Parser, Debug)]
#[command(name = "picalc", version = crate::version::version(), about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Number of decimal digits to compute.
    #[arg(
        value_name = "DIGITS",
        default_value = "100",
        env = "PICALC_DIGITS",
        allow_negative_numbers = true
    )]
    pub digits: i64,

    /// Write the full digit string to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Quiet mode (only output the digit string).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print every computed digit in the summary.
    #[arg(short, long)]
    pub verbose: bool,

    /// Serial-splitting threshold in series terms (0 = default).
    #[arg(long, default_value = "0")]
    pub threshold: u64,

    /// Evaluate the series on a single thread.
    #[arg(long)]
    pub serial: bool,

    /// Memory limit (e.g., "8G", "512M").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["picalc"]).unwrap();
        assert_eq!(config.digits, 100);
        assert!(config.output.is_none());
        assert!(!config.quiet);
        assert!(!config.serial);
        assert_eq!(config.threshold, 0);
        assert_eq!(config.memory_limit, "");
    }

    #[test]
    fn positional_digit_count() {
        let config = AppConfig::try_parse_from(["picalc", "5000"]).unwrap();
        assert_eq!(config.digits, 5000);
    }

    #[test]
    fn negative_digit_count_parses() {
        let config = AppConfig::try_parse_from(["picalc", "-5"]).unwrap();
        assert_eq!(config.digits, -5);
    }

    #[test]
    fn flags_combine() {
        let config = AppConfig::try_parse_from([
            "picalc",
            "250",
            "-q",
            "--serial",
            "--threshold",
            "10",
            "-o",
            "pi.txt",
        ])
        .unwrap();
        assert_eq!(config.digits, 250);
        assert!(config.quiet);
        assert!(config.serial);
        assert_eq!(config.threshold, 10);
        assert_eq!(config.output.as_deref(), Some("pi.txt"));
    }

    #[test]
    fn rejects_non_numeric_digits() {
        assert!(AppConfig::try_parse_from(["picalc", "abc"]).is_err());
    }
}
