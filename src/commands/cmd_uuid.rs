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

//! The `uuid` command.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use uuid::{Builder, Uuid};

use crate::output::Printer;

/// Generate random (version 4) UUIDs.
#[derive(Args, Debug)]
pub(crate) struct UuidArgs {
    /// How many identifiers to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub(crate) count: usize,
}

pub(crate) fn run<W: Write>(args: &UuidArgs, printer: &mut Printer<W>) -> Result<()> {
    for _ in 0..args.count {
        printer.value("Uuid", &new_v4().to_string())?;
    }
    Ok(())
}

/// Generates a version 4 UUID from the thread-local random number generator.
fn new_v4() -> Uuid {
    let bytes = rand::random::<u128>().to_le_bytes();
    Builder::from_random_bytes(bytes).into_uuid()
}

#[cfg(test)]
mod tests {
    use uuid::{Variant, Version};

    use super::*;
    use crate::output::tests::{plain_printer, printed};

    #[test]
    fn generates_random_version_4_ids() {
        let id = new_v4();

        assert_eq!(id.get_version(), Some(Version::Random));
        assert_eq!(id.get_variant(), Variant::RFC4122);
        assert_ne!(id, new_v4());
    }

    #[test]
    fn prints_the_requested_number_of_ids() {
        let mut printer = plain_printer();
        run(&UuidArgs { count: 3 }, &mut printer).unwrap();

        let output = printed(printer);
        let ids: Vec<Uuid> = output
            .lines()
            .map(|line| line.strip_prefix("Uuid:         ").unwrap().parse().unwrap())
            .collect();

        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| id.get_version_num() == 4));
    }
}
