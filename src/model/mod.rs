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

//! Canonical values and the formats they convert between.
//!
//! Every subcommand parses its input into one of the values defined here,
//! then renders that value into one or more textual formats.
//!
//! * [`color`]: 8-bit RGB colors and their full-precision HSL form.
//! * [`timestamp`]: instants as seconds plus nanosecond-of-second.

pub(crate) mod color;
pub(crate) mod timestamp;

pub(crate) use color::{ColorFormat, Rgb};
pub(crate) use timestamp::{TimeFormat, Timestamp};

/// A named textual encoding selectable on the command line.
///
/// Implementors list every variant in [`Format::ALL`], in the order they are
/// printed when no output format is selected.
pub(crate) trait Format: Copy + 'static {
    const ALL: &'static [Self];

    /// The name used to select this format, e.g. `rfc` or `hex`.
    fn name(self) -> &'static str;

    /// The label printed in front of a rendered value.
    fn label(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|format| format.name() == name)
    }

    /// Comma separated list of every format name, for error messages.
    fn supported() -> String {
        Self::ALL
            .iter()
            .map(|format| format.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
