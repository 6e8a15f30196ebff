//! Main application entry point and high-level flow coordination.
//!
//! This module orchestrates the overall flow after command-line argument
//! parsing is complete. It coordinates between different modules:
//!
//! - `args`: Command-line argument parsing and help/version display
//! - `config`: Configuration loading and validation
//! - `times`: The upstream sun/moon times record
//! - `render`: The dial rendering pipeline
//! - `encode`: JPEG encoding of the finished canvas
//! - `logger`: Centralized logging functionality
//!
//! The binary is deliberately a thin shell: it reads the record the
//! data-acquisition collaborator cached, hands it to the pure render
//! pipeline, and writes the encoded result. Fetching and caching the record
//! are that collaborator's business, not ours.

use std::fs;

use anyhow::{Context, Result};
use chrono::Local;

use sundialr::args::{CliAction, ParsedArgs};
use sundialr::config::Config;
use sundialr::encode::encode_jpeg;
use sundialr::times::SunTimes;
use sundialr::{
    log_block_start, log_debug, log_decorated, log_end, log_error_exit, log_indented, log_pipe,
    log_version,
};

fn main() {
    let parsed = ParsedArgs::parse(std::env::args().skip(1));

    let result = match parsed.action {
        CliAction::ShowHelp => {
            ParsedArgs::display_help();
            Ok(())
        }
        CliAction::ShowVersion => {
            ParsedArgs::display_version();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            ParsedArgs::display_help();
            std::process::exit(1);
        }
        CliAction::Run {
            debug_enabled,
            config_dir,
            times_file,
            output,
            emit_times,
        } => run(debug_enabled, config_dir, times_file, output, emit_times),
    };

    if let Err(err) = result {
        log_error_exit!("{err:#}");
        std::process::exit(1);
    }
}

fn run(
    debug_enabled: bool,
    config_dir: Option<String>,
    times_file: Option<String>,
    output: Option<String>,
    emit_times: bool,
) -> Result<()> {
    log_version!();
    if debug_enabled {
        log_pipe!();
        log_debug!("Debug mode enabled");
    }

    let config = Config::load(config_dir.as_deref())?;
    if debug_enabled {
        config.log_summary();
    }

    let times_path = times_file
        .or_else(|| config.times_file.clone())
        .context("No times record given; pass --times-file or set times_file in sundialr.toml")?;

    log_block_start!("Loading sun times record");
    log_indented!("{times_path}");
    let raw = fs::read_to_string(&times_path).with_context(|| {
        format!("no image available: could not read times record {times_path:?}")
    })?;
    let mut times: SunTimes = serde_json::from_str(&raw).with_context(|| {
        format!("no image available: times record {times_path:?} is not valid JSON")
    })?;
    times.normalize();

    let date_label = Local::now().format("%B %-d, %Y").to_string();
    log_block_start!("Rendering dial for {}", config.location());
    let image = sundialr::render(&mut times, config.location(), &date_label)?;
    if let (Some(first), Some(last)) = (&times.first_light, &times.last_light) {
        log_indented!("First light {first}, last light {last}");
    }

    let jpeg = encode_jpeg(&image, config.jpeg_quality())?;
    let out_path = output.as_deref().unwrap_or_else(|| config.output_path());
    fs::write(out_path, &jpeg)
        .with_context(|| format!("Failed to write image to {out_path:?}"))?;
    log_decorated!("Wrote {} ({} KiB)", out_path, jpeg.len() / 1024);

    if emit_times {
        let updated = serde_json::to_string_pretty(&times)?;
        fs::write(&times_path, updated)
            .with_context(|| format!("Failed to write record back to {times_path:?}"))?;
        log_decorated!("Updated {times_path} with derived twilight fields");
    }

    log_end!();
    Ok(())
}
