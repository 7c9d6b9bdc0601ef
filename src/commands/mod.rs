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

//! Subcommand definitions and dispatch.
//!
//! Each subcommand lives in its own `cmd_*` module exposing a clap `Args`
//! struct and a `run` function. Conversion failures never escape a `run`
//! function: they are printed as user-facing messages and the command still
//! succeeds. Only failing to write the output is reported as an error.
//!
//! # Commands
//!
//! * [`cmd_uuid`]: random identifier generation.
//! * [`cmd_time`]: timestamp conversion.
//! * [`cmd_bcrypt`]: password hashing.
//! * [`cmd_color`]: color conversion.

pub(crate) mod cmd_bcrypt;
pub(crate) mod cmd_color;
pub(crate) mod cmd_time;
pub(crate) mod cmd_uuid;

use std::io::Write;

use anyhow::Result;
use clap::Subcommand;

use crate::{config::AppConfig, error::ConvertError, model::Format, output::Printer};

/// Heading printed in front of input parsing errors.
pub(crate) const INPUT_ERROR: &str = "Error parsing input:";

/// Heading printed in front of an unrecognised output format.
pub(crate) const OUTPUT_ERROR: &str = "Unknown output format:";

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Generate a random UUID
    Uuid(cmd_uuid::UuidArgs),
    /// Convert between time formats (rfc, pg, s, ms, us, ns, pb)
    Time(cmd_time::TimeArgs),
    /// Generate a bcrypt hash for a password
    Bcrypt(cmd_bcrypt::BcryptArgs),
    /// Convert between color formats (hex, rgb, hsl)
    Color(cmd_color::ColorArgs),
}

/// Runs a single subcommand to completion.
///
/// # Errors
///
/// Returns an error only if writing to `printer` fails.
pub(crate) fn run<W: Write>(
    command: &Command,
    config: &AppConfig,
    printer: &mut Printer<W>,
) -> Result<()> {
    match command {
        Command::Uuid(args) => cmd_uuid::run(args, printer),
        Command::Time(args) => cmd_time::run(args, config, printer),
        Command::Bcrypt(args) => cmd_bcrypt::run(args, config, printer),
        Command::Color(args) => cmd_color::run(args, config, printer),
    }
}

/// Resolves the name of an input format.
pub(crate) fn input_format<F: Format>(name: &str) -> Result<F, ConvertError> {
    F::from_name(name).ok_or_else(|| ConvertError::UnknownInputFormat {
        name: name.to_string(),
        supported: F::supported(),
    })
}

/// Resolves the optional output selector into the formats to print: the
/// selected one, or every format when nothing was selected.
pub(crate) fn output_formats<F: Format>(selector: Option<&str>) -> Result<Vec<F>, ConvertError> {
    match selector {
        None => Ok(F::ALL.to_vec()),
        Some(name) => F::from_name(name)
            .map(|format| vec![format])
            .ok_or_else(|| ConvertError::UnknownOutputFormat {
                name: name.to_string(),
                supported: F::supported(),
            }),
    }
}
