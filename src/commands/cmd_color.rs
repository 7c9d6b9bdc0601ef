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

//! The `color` command.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::{
    commands::{self, INPUT_ERROR, OUTPUT_ERROR},
    config::AppConfig,
    error::ConvertError,
    model::{ColorFormat, Format, Rgb},
    output::Printer,
};

/// Convert a color between formats.
///
/// Formats are `hex` (`#rrggbb` or `#rgb`), `rgb` (`rgb(r, g, b)`) and `hsl`
/// (`hsl(h, s%, l%)`).
#[derive(Args, Debug)]
pub(crate) struct ColorArgs {
    /// Format of the input value
    #[arg(value_name = "IN_FORMAT")]
    pub(crate) in_format: String,

    /// The color to convert
    #[arg(allow_hyphen_values = true)]
    pub(crate) value: String,

    /// Print only this format instead of all of them
    #[arg(value_name = "OUT_FORMAT")]
    pub(crate) out_format: Option<String>,
}

pub(crate) fn run<W: Write>(
    args: &ColorArgs,
    config: &AppConfig,
    printer: &mut Printer<W>,
) -> Result<()> {
    let rgb = match parse(&args.in_format, &args.value) {
        Ok(rgb) => rgb,
        Err(e) => {
            debug!(in_format = %args.in_format, value = %args.value, "Unparseable color");
            printer.error(INPUT_ERROR, &e)?;
            return Ok(());
        }
    };
    debug!(?rgb, swatch = config.swatch, "Parsed color");

    let formats = match commands::output_formats::<ColorFormat>(args.out_format.as_deref()) {
        Ok(formats) => formats,
        Err(e) => {
            printer.error(OUTPUT_ERROR, &e)?;
            return Ok(());
        }
    };

    for format in formats {
        printer.color_value(format.label(), &format.render(rgb), rgb)?;
    }

    Ok(())
}

fn parse(in_format: &str, value: &str) -> Result<Rgb, ConvertError> {
    let format = commands::input_format::<ColorFormat>(in_format)?;
    format.parse(value)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::output::tests::{plain_printer, printed};

    fn convert(in_format: &str, value: &str, out_format: Option<&str>) -> String {
        let args = ColorArgs {
            in_format: in_format.to_string(),
            value: value.to_string(),
            out_format: out_format.map(str::to_string),
        };
        let mut printer = plain_printer();
        run(&args, &AppConfig::default(), &mut printer).unwrap();
        printed(printer)
    }

    #[rstest]
    #[case("hex", "#ff0000")]
    #[case("rgb", "rgb(255, 0, 0)")]
    #[case("hsl", "hsl(0, 100%, 50%)")]
    fn every_input_format_agrees(#[case] in_format: &str, #[case] value: &str) {
        assert_eq!(
            convert(in_format, value, None),
            "Hex:          #ff0000\n\
             RGB:          rgb(255, 0, 0)\n\
             HSL:          hsl(0, 100%, 50%)\n"
        );
    }

    #[test]
    fn prints_the_selected_format() {
        assert_eq!(
            convert("hex", "#0080ff", Some("hsl")),
            "HSL:          hsl(210, 100%, 50%)\n"
        );
    }

    #[rstest]
    #[case("cmyk", "0,0,0,0", "unsupported input format: cmyk (use hex, rgb, hsl)")]
    #[case("hex", "#12345", "invalid hex color \"#12345\", use #rgb or #rrggbb")]
    #[case(
        "rgb",
        "rgb(300, 0, 0)",
        "invalid RGB color \"rgb(300, 0, 0)\", use rgb(r, g, b) with channels from 0 to 255"
    )]
    fn bad_input_is_reported(
        #[case] in_format: &str,
        #[case] value: &str,
        #[case] message: &str,
    ) {
        assert_eq!(
            convert(in_format, value, None),
            format!("Error parsing input: {message}\n")
        );
    }

    #[test]
    fn unknown_output_format_is_reported() {
        assert_eq!(
            convert("hex", "#fff", Some("cmyk")),
            "Unknown output format: cmyk (use hex, rgb, hsl)\n"
        );
    }
}
