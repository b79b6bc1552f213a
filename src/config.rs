use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::third_place::DEFAULT_THIRD_PLACE_SLOTS;

const MAX_THIRD_PLACE_SLOTS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub third_place_slots: usize,
    pub use_predicted_tiebreak: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            third_place_slots: DEFAULT_THIRD_PLACE_SLOTS,
            use_predicted_tiebreak: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub log_level: LevelFilter,
    pub snapshot_out: Option<PathBuf>,
}

/// Load `.env.local` then `.env`; variables already set win.
pub fn load_dotenv() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let third_place_slots = lookup("THIRD_PLACE_SLOTS")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_THIRD_PLACE_SLOTS)
            .clamp(0, MAX_THIRD_PLACE_SLOTS);
        let use_predicted_tiebreak = lookup("PREDICTED_TIEBREAK")
            .and_then(|val| parse_flag(&val))
            .unwrap_or(true);
        let log_level = lookup("STANDINGS_LOG")
            .and_then(|val| val.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn);
        let snapshot_out = lookup("SNAPSHOT_OUT")
            .filter(|val| !val.trim().is_empty())
            .map(PathBuf::from);
        Self {
            pipeline: PipelineConfig {
                third_place_slots,
                use_predicted_tiebreak,
            },
            log_level,
            snapshot_out,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
