//! UI helpers for CLI display.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Build the progress bar for a running computation.
///
/// The bar spans 100 percent units; the caller feeds it positions from
/// the engine's progress estimate and an ETA message.
#[must_use]
pub fn computation_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"),
    );
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_check_does_not_panic() {
        let _ = is_color_disabled();
    }

    #[test]
    fn print_header_does_not_panic() {
        print_header("Test Header");
        print_header("");
    }

    #[test]
    fn print_success_does_not_panic() {
        print_success("Operation completed");
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
    }

    #[test]
    fn print_functions_with_unicode() {
        print_header("Calcul de \u{3c0}");
        print_success("R\u{00e9}sultat correct");
        print_error("Erreur inattendue");
    }

    #[test]
    fn computation_bar_spans_percent_units() {
        let bar = computation_bar();
        assert_eq!(bar.length(), Some(100));
        bar.set_position(50);
        assert_eq!(bar.position(), 50);
        bar.finish_and_clear();
    }
}
