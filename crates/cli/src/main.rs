// T9 Wiperite - Firmware Bring-up Probe
// Copyright (C) 2026 T9 Wiperite contributors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::Context;
use std::io::{self, BufWriter};
use std::str::FromStr;
use tracing::{debug, info, warn, Level};
use wiperite_core::ArgumentList;

/// Environment variable selecting log verbosity. Flags are never parsed:
/// every argument belongs to the report.
const LOG_ENV: &str = "WIPERITE_LOG";
const DEFAULT_LEVEL: Level = Level::WARN;

/// Resolves the log level from the raw `WIPERITE_LOG` value.
///
/// Returns the level plus the rejected value, if any, so it can be reported
/// once the subscriber is up.
fn resolve_log_level(raw: Option<&str>) -> (Level, Option<String>) {
    match raw.map(str::trim) {
        None | Some("") => (DEFAULT_LEVEL, None),
        Some(value) => match Level::from_str(value) {
            Ok(level) => (level, None),
            Err(_) => (DEFAULT_LEVEL, Some(value.to_string())),
        },
    }
}

fn main() -> anyhow::Result<()> {
    let raw_level = std::env::var(LOG_ENV).ok();
    let (level, rejected) = resolve_log_level(raw_level.as_deref());

    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Some(value) = rejected {
        warn!(
            "Ignoring unrecognized {} value {:?}, using {}",
            LOG_ENV, value, DEFAULT_LEVEL
        );
    }

    let args = ArgumentList::from_env();
    info!("Starting Wiperite bring-up probe");
    debug!("Captured {} arguments", args.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let lines = wiperite_core::write_report(&mut out, &args)
        .context("Failed to emit bring-up report")?;

    info!("Ready to debug ({} lines written)", lines);
    Ok(())
}
