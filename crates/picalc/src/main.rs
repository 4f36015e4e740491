//! PiCalc-rs, a parallel Chudnovsky pi digit calculator.

use picalc_cli::ui;
use picalc_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code_for(&err));
    }
}
