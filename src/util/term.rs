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

//! Terminal capability detection.
//!
//! Output is only styled with ANSI escape sequences when it is going to a
//! terminal that the user has not asked to keep plain. The `NO_COLOR`
//! convention (<https://no-color.org>) is honoured: any non-empty value
//! disables styling.

use std::{
    env,
    io::{self, IsTerminal},
};

const NO_COLOR_ENV: &str = "NO_COLOR";

/// Decides whether standard output should be styled.
///
/// # Arguments
///
/// * `configured` - The `color` setting from the configuration file.
/// * `disabled_by_flag` - Whether `--no-color` was passed.
pub(crate) fn styling_enabled(configured: bool, disabled_by_flag: bool) -> bool {
    should_style(configured, disabled_by_flag, no_color(), io::stdout().is_terminal())
}

/// Decides whether diagnostic logs on standard error may use ANSI escapes.
pub(crate) fn stderr_styling_enabled(disabled_by_flag: bool) -> bool {
    should_style(true, disabled_by_flag, no_color(), io::stderr().is_terminal())
}

fn no_color() -> bool {
    env::var_os(NO_COLOR_ENV).is_some_and(|value| !value.is_empty())
}

fn should_style(configured: bool, disabled_by_flag: bool, no_color: bool, terminal: bool) -> bool {
    configured && !disabled_by_flag && !no_color && terminal
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::should_style;

    #[rstest]
    #[case(true, false, false, true, true)]
    #[case(false, false, false, true, false)]
    #[case(true, true, false, true, false)]
    #[case(true, false, true, true, false)]
    #[case(true, false, false, false, false)]
    fn styles_only_plain_terminals(
        #[case] configured: bool,
        #[case] flag: bool,
        #[case] no_color: bool,
        #[case] terminal: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(should_style(configured, flag, no_color, terminal), expected);
    }
}
