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

//! Instants and their textual encodings.
//!
//! A [`Timestamp`] is a UTC instant made of a signed count of seconds since
//! the Unix epoch plus a nanosecond-of-second in `0..1_000_000_000`. Values
//! that chrono cannot represent are rejected with
//! [`ConvertError::OutOfRange`] rather than wrapping.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc};

use crate::{error::ConvertError, model::Format, util::format::utc_offset};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

const POSTGRES_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.f";
const POSTGRES_LAYOUT_WITH_OFFSET: &str = "%Y-%m-%d %H:%M:%S%.f%#z";

/// Subdivisions of a second used by Unix epoch counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Precision {
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl Precision {
    const fn per_second(self) -> i64 {
        match self {
            Self::Seconds => 1,
            Self::Millis => 1_000,
            Self::Micros => 1_000_000,
            Self::Nanos => NANOS_PER_SECOND,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Builds a timestamp from seconds and nanoseconds, carrying any
    /// nanoseconds outside a single second into the seconds component.
    pub(crate) fn from_parts(seconds: i64, nanos: i64) -> Result<Self, ConvertError> {
        let seconds = seconds
            .checked_add(nanos.div_euclid(NANOS_PER_SECOND))
            .ok_or(ConvertError::OutOfRange)?;
        let nanos = nanos.rem_euclid(NANOS_PER_SECOND) as u32;

        DateTime::from_timestamp(seconds, nanos)
            .map(Self)
            .ok_or(ConvertError::OutOfRange)
    }

    /// Interprets `count` as a number of `precision` units since the epoch.
    /// Negative counts floor onto the previous whole second.
    pub(crate) fn from_unix(count: i64, precision: Precision) -> Result<Self, ConvertError> {
        let per_second = precision.per_second();
        let nanos = count.rem_euclid(per_second) * (NANOS_PER_SECOND / per_second);
        Self::from_parts(count.div_euclid(per_second), nanos)
    }

    fn from_datetime<Tz: TimeZone>(datetime: DateTime<Tz>) -> Result<Self, ConvertError> {
        // Leap seconds come back from chrono as nanos past one billion.
        Self::from_parts(
            datetime.timestamp(),
            i64::from(datetime.timestamp_subsec_nanos()),
        )
    }

    pub(crate) fn parse_rfc3339(value: &str) -> Result<Self, ConvertError> {
        let datetime = DateTime::parse_from_rfc3339(value.trim())
            .map_err(|e| ConvertError::timestamp("RFC3339", value, e))?;
        Self::from_datetime(datetime)
    }

    /// Parses Postgres text output, `2006-01-02 15:04:05.000000-07`. The
    /// fraction and offset are optional; without an offset the time is UTC.
    pub(crate) fn parse_postgres(value: &str) -> Result<Self, ConvertError> {
        let text = value.trim();

        let datetime = DateTime::parse_from_str(text, POSTGRES_LAYOUT_WITH_OFFSET)
            .map(|datetime| datetime.with_timezone(&Utc))
            .or_else(|_| NaiveDateTime::parse_from_str(text, POSTGRES_LAYOUT).map(|naive| naive.and_utc()))
            .map_err(|e| ConvertError::timestamp("Postgres", value, e))?;

        Self::from_datetime(datetime)
    }

    /// Parses the protobuf style `seconds,nanos` pair.
    pub(crate) fn parse_protobuf(value: &str) -> Result<Self, ConvertError> {
        let invalid = |reason: &dyn fmt::Display| ConvertError::timestamp("protobuf", value, reason);

        let Some((seconds, nanos)) = value.split_once(',') else {
            return Err(invalid(&"expected seconds,nanos"));
        };

        let seconds = seconds.trim().parse::<i64>().map_err(|e| invalid(&e))?;
        let nanos = nanos.trim().parse::<i64>().map_err(|e| invalid(&e))?;

        Self::from_parts(seconds, nanos)
    }

    pub(crate) fn seconds(&self) -> i64 {
        self.0.timestamp()
    }

    pub(crate) fn nanos(&self) -> u32 {
        self.0.timestamp_subsec_nanos()
    }

    /// The number of whole `precision` units since the epoch, rounded towards
    /// negative infinity.
    pub(crate) fn unix(&self, precision: Precision) -> i128 {
        let per_second = precision.per_second();
        i128::from(self.seconds()) * i128::from(per_second)
            + i128::from(self.nanos()) / i128::from(NANOS_PER_SECOND / per_second)
    }

    pub(crate) fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    /// Renders in Postgres text output form in the given time zone.
    pub(crate) fn to_postgres<Tz>(&self, zone: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let local = self.0.with_timezone(zone);
        let offset = local.offset().fix().local_minus_utc();
        format!(
            "{}{}",
            local.format("%Y-%m-%d %H:%M:%S%.6f"),
            utc_offset(offset)
        )
    }

    pub(crate) fn to_protobuf(&self) -> String {
        format!("seconds: {}, nanos: {}", self.seconds(), self.nanos())
    }
}

/// The textual time encodings understood by the `time` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimeFormat {
    Rfc3339,
    Postgres,
    Seconds,
    Millis,
    Micros,
    Nanos,
    Protobuf,
}

impl Format for TimeFormat {
    const ALL: &'static [Self] = &[
        Self::Rfc3339,
        Self::Postgres,
        Self::Seconds,
        Self::Millis,
        Self::Micros,
        Self::Nanos,
        Self::Protobuf,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Rfc3339 => "rfc",
            Self::Postgres => "pg",
            Self::Seconds => "s",
            Self::Millis => "ms",
            Self::Micros => "us",
            Self::Nanos => "ns",
            Self::Protobuf => "pb",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Rfc3339 => "RFC3339",
            Self::Postgres => "Postgres",
            Self::Seconds => "Seconds",
            Self::Millis => "Milliseconds",
            Self::Micros => "Microseconds",
            Self::Nanos => "Nanoseconds",
            Self::Protobuf => "Protobuf",
        }
    }
}

impl TimeFormat {
    const fn precision(self) -> Option<Precision> {
        match self {
            Self::Seconds => Some(Precision::Seconds),
            Self::Millis => Some(Precision::Millis),
            Self::Micros => Some(Precision::Micros),
            Self::Nanos => Some(Precision::Nanos),
            Self::Rfc3339 | Self::Postgres | Self::Protobuf => None,
        }
    }

    pub(crate) fn parse(self, value: &str) -> Result<Timestamp, ConvertError> {
        if let Some(precision) = self.precision() {
            let count = value
                .trim()
                .parse::<i64>()
                .map_err(|e| ConvertError::timestamp(self.label(), value, e))?;
            return Timestamp::from_unix(count, precision);
        }

        match self {
            Self::Rfc3339 => Timestamp::parse_rfc3339(value),
            Self::Postgres => Timestamp::parse_postgres(value),
            _ => Timestamp::parse_protobuf(value),
        }
    }

    /// Renders `timestamp`; `local_time` only affects the Postgres format.
    pub(crate) fn render(self, timestamp: &Timestamp, local_time: bool) -> String {
        if let Some(precision) = self.precision() {
            return timestamp.unix(precision).to_string();
        }

        match self {
            Self::Rfc3339 => timestamp.to_rfc3339(),
            Self::Postgres if local_time => timestamp.to_postgres(&Local),
            Self::Postgres => timestamp.to_postgres(&Utc),
            _ => timestamp.to_protobuf(),
        }
    }
}
