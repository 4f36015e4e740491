//! Application entry point and dispatch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, select, Receiver};

use picalc_cli::output::{format_duration, format_number, write_digits_to_file};
use picalc_cli::presenter::ResultPresenter;
use picalc_cli::progress_eta::EtaCalculator;
use picalc_cli::ui;
use picalc_core::calculator::{calculate_pi, PiError};
use picalc_core::memory_budget::{parse_memory_limit, MemoryEstimate};
use picalc_core::options::Options;
use picalc_core::progress::CancellationToken;
use picalc_core::result::Pi;

use crate::config::AppConfig;

/// Cadence at which the progress bar samples the computation.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        picalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

#[allow(clippy::cast_sign_loss)]
fn run_cli(config: &AppConfig) -> Result<()> {
    if config.digits < 0 {
        return Err(PiError::InvalidPrecision(config.digits).into());
    }
    let precision = config.digits as u64;

    let opts = Options {
        split_threshold: config.threshold,
        sequential: config.serial,
        memory_limit: parse_memory_limit(&config.memory_limit).unwrap_or(0),
    }
    .normalize();

    // Memory budget check
    let estimate = MemoryEstimate::estimate(precision);
    if !estimate.fits_in(opts.memory_limit) {
        return Err(PiError::Allocation(format!(
            "estimated memory ({} MB) exceeds limit ({} MB)",
            estimate.total_bytes / (1024 * 1024),
            opts.memory_limit / (1024 * 1024)
        ))
        .into());
    }

    let pi = Arc::new(Pi::new(precision)?);
    let cancel = CancellationToken::new();

    // Set up Ctrl+C handler
    let cancel_clone = cancel.clone();
    ctrlc_handler(cancel_clone);

    if !config.quiet {
        ui::print_header(&format!(
            "Calculating \u{3c0} to {} decimal digits",
            format_number(precision)
        ));
    }

    // Compute on a worker thread so the main thread can poll progress
    let start = Instant::now();
    let (done_tx, done_rx) = bounded::<Result<(), PiError>>(1);
    let worker = {
        let pi = Arc::clone(&pi);
        let cancel = cancel.clone();
        let opts = opts.clone();
        std::thread::spawn(move || {
            let outcome = calculate_pi(precision, &pi, &cancel, &opts);
            let _ = done_tx.send(outcome);
        })
    };

    let show_bar = !config.quiet && !config.no_progress;
    let outcome = wait_for_completion(&done_rx, &pi, show_bar);
    worker
        .join()
        .map_err(|_| anyhow::anyhow!("computation thread panicked"))?;
    outcome?;

    let duration = start.elapsed();
    let digits = pi.digits(usize::MAX);

    if let Some(ref path) = config.output {
        write_digits_to_file(&digits, path).with_context(|| format!("writing digits to {path}"))?;
        if !config.quiet {
            ui::print_success(&format!(
                "Saved {} digits to {path} in {}",
                format_number(precision),
                format_duration(duration)
            ));
        }
    } else {
        let presenter = ResultPresenter::new(config.verbose, config.quiet);
        presenter.present(&digits, precision, duration);
    }

    Ok(())
}

/// Block until the worker reports completion, polling the progress
/// counter for the bar in between.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wait_for_completion(
    done: &Receiver<Result<(), PiError>>,
    pi: &Pi,
    show_bar: bool,
) -> Result<(), PiError> {
    if !show_bar {
        return match done.recv() {
            Ok(outcome) => outcome,
            // Channel closed without a result: the worker died
            Err(_) => Err(PiError::Cancelled),
        };
    }

    let bar = ui::computation_bar();
    let mut eta = EtaCalculator::new();
    loop {
        select! {
            recv(done) -> outcome => {
                bar.finish_and_clear();
                return match outcome {
                    Ok(outcome) => outcome,
                    Err(_) => Err(PiError::Cancelled),
                };
            }
            default(POLL_INTERVAL) => {
                let progress = pi.progress();
                bar.set_position(progress as u64);
                if let Some(remaining) = eta.update(progress / 100.0) {
                    bar.set_message(format!("ETA {}", format_duration(remaining)));
                }
            }
        }
    }
}

fn ctrlc_handler(cancel: CancellationToken) {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .expect("Error setting Ctrl+C handler");
}
