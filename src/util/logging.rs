// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Diagnostic logging.
//!
//! Logs go to standard error so they never mix with converted values on
//! standard output.

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt};

/// Extra filter directives appended to the defaults.
const LOG_ENV: &str = "GRIST_LOG";

/// Installs the global `tracing` subscriber.
///
/// The verbosity picks the default filter; `GRIST_LOG` adds directives on
/// top of it and `RUST_LOG` replaces the filter entirely.
///
/// # Arguments
///
/// * `verbosity` - How many times `-v` was given.
/// * `ansi` - Whether log lines may be colored with ANSI escapes.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub(crate) fn configure_logging(verbosity: u8, ansi: bool) -> Result<()> {
    let mut directives = default_directives(verbosity).to_string();
    if let Ok(overrides) = std::env::var(LOG_ENV) {
        directives = format!("{directives},{overrides}");
    }
    if let Ok(overrides) = std::env::var("RUST_LOG") {
        directives = overrides;
    }

    let sub = subscriber(&directives, verbosity, ansi, std::io::stderr);
    tracing::subscriber::set_global_default(sub).context("Failed to set default logger")
}

fn subscriber<W>(
    directives: &str,
    verbosity: u8,
    ansi: bool,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = tracing_subscriber::filter::EnvFilter::new(directives);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .without_time()
        .with_target(verbosity > 1);

    tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(fmt_layer)
}

fn default_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "grist=warn",
        1 => "grist=debug",
        _ => "grist=trace",
    }
}
