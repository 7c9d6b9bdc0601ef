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

//! # Grist.
//!
//! Grist, the grain that is made into flour: a command-line tool to generate
//! and transform data.
//!
//! Every subcommand is an independent, stateless conversion:
//!
//! * `uuid` generates random identifiers.
//! * `time` converts timestamps between RFC3339, Postgres text, Unix epoch
//!   counts and protobuf seconds/nanos.
//! * `bcrypt` hashes a password.
//! * `color` converts colors between hex, RGB and HSL.
//!
//! ## Errors
//!
//! Only command-line usage errors and failure to write standard output make
//! the process exit with a non-zero status. A value that cannot be converted
//! is reported on standard output and the run still succeeds.

mod commands;
mod config;
mod error;
mod model;
mod output;
mod theme;
mod util;

use std::io;

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use tracing::debug;

use crate::{commands::Command, output::Printer, theme::Theme};

/// Grist stands for "grain that is made into flour": a CLI tool to generate
/// and transform data
#[derive(Parser, Debug)]
#[command(name = "grist", version)]
struct Cli {
    /// Verbosity level, can be specified multiple times for more verbose output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Never style the output with colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// The entry point of the application.
///
/// Parses the command line, configures logging, loads the configuration and
/// runs the selected subcommand against standard output. Without a
/// subcommand the help text is printed to standard output instead.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let ansi_logs = util::term::stderr_styling_enabled(cli.no_color);
    util::logging::configure_logging(cli.verbose, ansi_logs)?;

    let Some(command) = &cli.command else {
        return Cli::command().print_help().context("Failed to write help");
    };

    let config = config::load_config();
    let styled = util::term::styling_enabled(config.color, cli.no_color);
    debug!(?command, styled, "Running command");

    let mut printer = Printer::new(io::stdout().lock(), Theme::default(), styled, config.swatch);

    commands::run(command, &config, &mut printer).context("Failed to write output")
}
