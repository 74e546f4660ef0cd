// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! User-local preferences: the BRL exchange rate and the daily planner
//! knobs. These live in a JSON file in the platform config dir, not in the
//! journal database.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// USD -> BRL conversion rate shown next to the final balance.
    pub exchange_rate: Decimal,
    /// Daily profit target as a percentage of the bankroll.
    pub goal_percent: Decimal,
    /// Daily stop loss as a percentage of the bankroll.
    pub loss_percent: Decimal,
    /// Planned number of trades per day.
    pub trade_count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            exchange_rate: Decimal::new(550, 2),
            goal_percent: Decimal::new(3, 0),
            loss_percent: Decimal::new(3, 0),
            trade_count: 2,
        }
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("io.tradetrack", "TradeTrack", "tradetrack")
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("settings.json"))
}

impl Settings {
    pub fn load() -> Result<Settings> {
        Settings::load_from(&settings_path()?)
    }

    /// Missing file means defaults; a corrupt file is an error rather than
    /// silently resetting the user's preferences.
    pub fn load_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read settings at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Parse settings at {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Write settings at {}", path.display()))
    }
}
