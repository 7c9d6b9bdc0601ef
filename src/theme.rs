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

//! Output color palette.
//!
//! Colors are expressed as crossterm [`Color`] values so they can be applied
//! directly to styled output.

use crossterm::style::Color;

use crate::model::Rgb;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) label_colour: Color,
    pub(crate) value_colour: Color,
    pub(crate) error_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            label_colour: Color::Rgb {
                r: 56,
                g: 189,
                b: 248,
            },
            value_colour: Color::Rgb {
                r: 163,
                g: 230,
                b: 53,
            },
            error_colour: Color::Rgb {
                r: 255,
                g: 0,
                b: 135,
            },
        }
    }

    /// Converts a parsed color into a terminal color, for swatches.
    pub(crate) const fn swatch(rgb: Rgb) -> Color {
        Color::Rgb {
            r: rgb.red,
            g: rgb.green,
            b: rgb.blue,
        }
    }
}
