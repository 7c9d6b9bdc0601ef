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

//! Shared output formatting.
//!
//! Every command prints through a [`Printer`], which writes one
//! `Label: value` line per rendered value. When styling is enabled the label
//! and value are colored according to the [`Theme`], and color values are
//! followed by a swatch painted in the color itself.

use std::{
    fmt,
    io::{self, Write},
};

use crossterm::style::Stylize;

use crate::{model::Rgb, theme::Theme, util::format};

/// Background-colored cells printed after a color value.
const SWATCH: &str = "     ";

pub(crate) struct Printer<W: Write> {
    out: W,
    theme: Theme,
    styled: bool,
    swatches: bool,
}

impl<W: Write> Printer<W> {
    /// Creates a printer writing to `out`.
    ///
    /// # Arguments
    ///
    /// * `styled` - Whether to emit ANSI styling at all.
    /// * `swatches` - Whether color values get a swatch; ignored when not
    ///   styled.
    pub(crate) fn new(out: W, theme: Theme, styled: bool, swatches: bool) -> Self {
        Self {
            out,
            theme,
            styled,
            swatches,
        }
    }

    /// Prints a labelled value.
    pub(crate) fn value(&mut self, label: &str, value: &str) -> io::Result<()> {
        self.write_value(label, value)?;
        writeln!(self.out)
    }

    /// Prints a labelled value followed by a swatch of `rgb`.
    pub(crate) fn color_value(&mut self, label: &str, value: &str, rgb: Rgb) -> io::Result<()> {
        self.write_value(label, value)?;
        if self.styled && self.swatches {
            write!(self.out, " {}", SWATCH.on(Theme::swatch(rgb)))?;
        }
        writeln!(self.out)
    }

    /// Prints an error under a highlighted heading such as
    /// `Error parsing input:`.
    pub(crate) fn error(&mut self, heading: &str, detail: &dyn fmt::Display) -> io::Result<()> {
        if self.styled {
            writeln!(
                self.out,
                "{} {detail}",
                heading.with(self.theme.error_colour).bold()
            )
        } else {
            writeln!(self.out, "{heading} {detail}")
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn write_value(&mut self, label: &str, value: &str) -> io::Result<()> {
        let label = format::label(label);
        if self.styled {
            write!(
                self.out,
                "{} {}",
                label.with(self.theme.label_colour).bold(),
                value.with(self.theme.value_colour).bold()
            )
        } else {
            write!(self.out, "{label} {value}")
        }
    }
}
