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

//! The `bcrypt` command.

use std::{fmt, io::Write};

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::{config::AppConfig, error::ConvertError, output::Printer};

/// Generate a bcrypt hash for a password.
#[derive(Args)]
pub(crate) struct BcryptArgs {
    /// The password to hash
    #[arg(allow_hyphen_values = true)]
    pub(crate) password: String,

    /// Work factor between 4 and 31 [default: from configuration, else 10]
    #[arg(short, long)]
    pub(crate) cost: Option<u32>,
}

// Keeps the password out of debug logs.
impl fmt::Debug for BcryptArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BcryptArgs")
            .field("password", &"<redacted>")
            .field("cost", &self.cost)
            .finish()
    }
}

pub(crate) fn run<W: Write>(
    args: &BcryptArgs,
    config: &AppConfig,
    printer: &mut Printer<W>,
) -> Result<()> {
    let cost = args.cost.unwrap_or(config.bcrypt_cost);
    debug!(cost, "Hashing password");

    match hash_password(&args.password, cost) {
        Ok(hash) => printer.value("Bcrypt", &hash)?,
        Err(e) => printer.error("Error generating bcrypt hash:", &e)?,
    }

    Ok(())
}

/// Hashes `password`, refusing passwords longer than the 72 bytes bcrypt
/// actually uses.
fn hash_password(password: &str, cost: u32) -> Result<String, ConvertError> {
    Ok(bcrypt::non_truncating_hash(password, cost)?)
}
