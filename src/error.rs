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

//! User-facing conversion errors.
//!
//! Every failure a subcommand can report back to the user is a variant of
//! [`ConvertError`]. None of these are fatal to the process: the command layer
//! prints them and the program still exits successfully.

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ConvertError {
    #[error("unsupported input format: {name} (use {supported})")]
    UnknownInputFormat { name: String, supported: String },

    #[error("{name} (use {supported})")]
    UnknownOutputFormat { name: String, supported: String },

    #[error("invalid hex color {0:?}, use #rgb or #rrggbb")]
    InvalidHex(String),

    #[error("invalid RGB color {0:?}, use rgb(r, g, b) with channels from 0 to 255")]
    InvalidRgb(String),

    #[error("invalid HSL color {0:?}, use hsl(h, s%, l%) with s and l from 0 to 100")]
    InvalidHsl(String),

    #[error("invalid {format} timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        format: &'static str,
        value: String,
        reason: String,
    },

    #[error("timestamp is outside the supported range")]
    OutOfRange,

    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl ConvertError {
    pub(crate) fn timestamp(format: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidTimestamp {
            format,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
