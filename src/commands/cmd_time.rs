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

//! The `time` command.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::{
    commands::{self, INPUT_ERROR, OUTPUT_ERROR},
    config::AppConfig,
    error::ConvertError,
    model::{Format, TimeFormat, Timestamp},
    output::Printer,
};

/// Convert a timestamp between formats.
///
/// Formats are `rfc` (RFC3339), `pg` (Postgres text), `s`, `ms`, `us` and
/// `ns` (Unix epoch counts) and `pb` (protobuf `seconds,nanos`).
#[derive(Args, Debug)]
pub(crate) struct TimeArgs {
    /// Format of the input value
    #[arg(value_name = "IN_FORMAT")]
    pub(crate) in_format: String,

    /// The timestamp to convert
    #[arg(allow_hyphen_values = true)]
    pub(crate) value: String,

    /// Print only this format instead of all of them
    #[arg(value_name = "OUT_FORMAT")]
    pub(crate) out_format: Option<String>,
}

pub(crate) fn run<W: Write>(
    args: &TimeArgs,
    config: &AppConfig,
    printer: &mut Printer<W>,
) -> Result<()> {
    let timestamp = match parse(&args.in_format, &args.value) {
        Ok(timestamp) => timestamp,
        Err(e) => {
            debug!(in_format = %args.in_format, value = %args.value, "Unparseable timestamp");
            printer.error(INPUT_ERROR, &e)?;
            return Ok(());
        }
    };
    debug!(?timestamp, "Parsed timestamp");

    let formats = match commands::output_formats::<TimeFormat>(args.out_format.as_deref()) {
        Ok(formats) => formats,
        Err(e) => {
            printer.error(OUTPUT_ERROR, &e)?;
            return Ok(());
        }
    };

    for format in formats {
        let rendered = format.render(&timestamp, config.pg_local_time);
        printer.value(format.label(), &rendered)?;
    }

    Ok(())
}

fn parse(in_format: &str, value: &str) -> Result<Timestamp, ConvertError> {
    let format = commands::input_format::<TimeFormat>(in_format)?;
    format.parse(value)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::output::tests::{plain_printer, printed};

    fn convert(in_format: &str, value: &str, out_format: Option<&str>) -> String {
        let args = TimeArgs {
            in_format: in_format.to_string(),
            value: value.to_string(),
            out_format: out_format.map(str::to_string),
        };
        let mut printer = plain_printer();
        run(&args, &AppConfig::default(), &mut printer).unwrap();
        printed(printer)
    }

    #[test]
    fn prints_every_format_by_default() {
        assert_eq!(
            convert("s", "1700000000", None),
            "RFC3339:      2023-11-14T22:13:20Z\n\
             Postgres:     2023-11-14 22:13:20.000000+00\n\
             Seconds:      1700000000\n\
             Milliseconds: 1700000000000\n\
             Microseconds: 1700000000000000\n\
             Nanoseconds:  1700000000000000000\n\
             Protobuf:     seconds: 1700000000, nanos: 0\n"
        );
    }

    #[rstest]
    #[case("rfc", "2023-11-14T22:13:20.25Z", "ms", "Milliseconds: 1700000000250\n")]
    #[case("pg", "2023-11-14 22:13:20.000000+00", "s", "Seconds:      1700000000\n")]
    #[case("ms", "-1", "rfc", "RFC3339:      1969-12-31T23:59:59.999Z\n")]
    #[case("pb", "1700000000,5", "ns", "Nanoseconds:  1700000000000000005\n")]
    #[case("ns", "1700000000000000005", "pb", "Protobuf:     seconds: 1700000000, nanos: 5\n")]
    fn prints_the_selected_format(
        #[case] in_format: &str,
        #[case] value: &str,
        #[case] out_format: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(convert(in_format, value, Some(out_format)), expected);
    }

    #[test]
    fn unknown_input_format_is_reported() {
        assert_eq!(
            convert("iso", "2023", None),
            "Error parsing input: unsupported input format: iso (use rfc, pg, s, ms, us, ns, pb)\n"
        );
    }

    #[test]
    fn unknown_output_format_is_reported() {
        assert_eq!(
            convert("s", "0", Some("iso")),
            "Unknown output format: iso (use rfc, pg, s, ms, us, ns, pb)\n"
        );
    }

    #[test]
    fn malformed_value_is_reported() {
        let output = convert("s", "soon", None);
        assert!(
            output.starts_with("Error parsing input: invalid Seconds timestamp \"soon\""),
            "{output}"
        );
        assert_eq!(output.lines().count(), 1);
    }
}
