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

//! Application configuration.
//!
//! This module manages the optional user configuration file. The file is
//! only ever read: when it does not exist the defaults are used and nothing
//! is written.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const CONFIG_NAME: &str = "grist";

const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Style output with ANSI colors when writing to a terminal.
    pub color: bool,
    /// Follow color values with a swatch of the color.
    pub swatch: bool,
    /// Work factor used by the `bcrypt` command unless `--cost` is given.
    pub bcrypt_cost: u32,
    /// Render Postgres timestamps in the local time zone instead of UTC.
    pub pg_local_time: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            color: true,
            swatch: true,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            pg_local_time: false,
        }
    }
}

pub fn load_config() -> AppConfig {
    match confy::get_configuration_file_path(CONFIG_NAME, None) {
        Ok(path) => load_config_from(&path),
        Err(e) => {
            warn!("Unable to locate configuration directory, using defaults: {e}");
            AppConfig::default()
        }
    }
}

// `confy::load_path` writes out a default file when none exists, so check
// first to keep runs free of side effects.
fn load_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        debug!(path = %path.display(), "No configuration file, using defaults");
        return AppConfig::default();
    }

    match confy::load_path(path) {
        Ok(config) => {
            debug!(path = %path.display(), ?config, "Loaded configuration");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), "Invalid configuration file, using defaults: {e}");
            AppConfig::default()
        }
    }
}
