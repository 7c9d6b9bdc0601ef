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

/// Width of the widest label, `Milliseconds:`, so values line up in a column.
const LABEL_WIDTH: usize = 13;

/// Formats an output label, adding the trailing colon and padding it to a
/// common width.
///
/// # Examples
///
/// ```text
/// assert_eq!(label("Hex"), "Hex:         ");
/// assert_eq!(label("Milliseconds"), "Milliseconds:");
/// ```
pub(crate) fn label(name: &str) -> String {
    format!("{:<LABEL_WIDTH$}", format!("{name}:"))
}

/// Formats a UTC offset the way Postgres prints it: `+HH` for whole hours,
/// `+HH:MM` otherwise.
///
/// # Arguments
///
/// * `seconds` - The offset east of UTC, in seconds.
pub(crate) fn utc_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;

    if minutes == 0 {
        format!("{sign}{hours:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}")
    }
}
