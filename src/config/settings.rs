//! User settings for coinsend
//!
//! Starting balance, preset amounts and the timings of the send flow.
//! Wallet state itself is never written back; only these preferences are.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::paths::CoinSendPaths;
use crate::error::{CoinSendError, CoinSendResult};
use crate::models::Coins;

/// User settings for coinsend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Balance every session starts with
    #[serde(default = "default_initial_balance")]
    pub initial_balance: u64,

    /// Amounts offered on the preset cards, in display order
    #[serde(default = "default_preset_amounts")]
    pub preset_amounts: Vec<u64>,

    /// Simulated network round-trip (milliseconds)
    #[serde(default = "default_network_delay_ms")]
    pub network_delay_ms: u64,

    /// Balance counter animation length (milliseconds)
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,

    /// Interval between UI frames (milliseconds)
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Ring the terminal bell for click and success cues
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,

    /// Profile picture shown next to the balance
    #[serde(default = "default_profile_image")]
    pub profile_image: Option<PathBuf>,

    /// strftime pattern for history timestamps
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_initial_balance() -> u64 {
    92_538_280
}

fn default_preset_amounts() -> Vec<u64> {
    vec![
        1_000, 5_000, 10_000, 25_000, 50_000, 100_000, 250_000, 500_000, 1_000_000,
    ]
}

fn default_network_delay_ms() -> u64 {
    2500
}

fn default_animation_duration_ms() -> u64 {
    1000
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_sound_enabled() -> bool {
    true
}

fn default_profile_image() -> Option<PathBuf> {
    Some(PathBuf::from("profile.png"))
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            initial_balance: default_initial_balance(),
            preset_amounts: default_preset_amounts(),
            network_delay_ms: default_network_delay_ms(),
            animation_duration_ms: default_animation_duration_ms(),
            frame_interval_ms: default_frame_interval_ms(),
            sound_enabled: default_sound_enabled(),
            profile_image: default_profile_image(),
            time_format: default_time_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if there is no file
    pub fn load_or_create(paths: &CoinSendPaths) -> Result<Self, CoinSendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CoinSendError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CoinSendError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CoinSendPaths) -> CoinSendResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            CoinSendError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings the UI cannot work with
    pub fn validate(&self) -> Result<(), CoinSendError> {
        if self.preset_amounts.is_empty() {
            return Err(CoinSendError::Config(
                "preset_amounts must list at least one amount".into(),
            ));
        }
        if self.preset_amounts.contains(&0) {
            return Err(CoinSendError::Config(
                "preset_amounts cannot contain zero".into(),
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(CoinSendError::Config(
                "frame_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Locate the profile picture
    ///
    /// Relative paths are tried against the working directory first, then
    /// against the base directory.
    pub fn resolve_profile_image(&self, paths: &CoinSendPaths) -> Option<PathBuf> {
        let path = self.profile_image.as_ref()?;
        if path.is_absolute() || path.exists() {
            Some(path.clone())
        } else {
            Some(paths.base_dir().join(path))
        }
    }

    pub fn presets(&self) -> Vec<Coins> {
        self.preset_amounts.iter().copied().map(Coins::new).collect()
    }

    pub fn network_delay(&self) -> Duration {
        Duration::from_millis(self.network_delay_ms)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
