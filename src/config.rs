use crate::error::{PickError, Result};
use crate::matcher::DEFAULT_HIDE_LESS_THAN;
use crate::scorer::{MatchMismatch, SmithWatermanGotoh};
use directories::ProjectDirs;
use log::{debug, warn};
use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub scorer: ScorerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    SmithWaterman,
    Nucleo,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    #[serde(default = "default_hide_less_than")]
    pub hide_less_than: f64,
    #[serde(default)]
    pub return_one_result: bool,
    #[serde(default)]
    pub algorithm: Algorithm,
}

fn default_hide_less_than() -> f64 { DEFAULT_HIDE_LESS_THAN }

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            hide_less_than: default_hide_less_than(),
            return_one_result: false,
            algorithm: Algorithm::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScorerConfig {
    #[serde(default = "default_gap_penalty")]
    pub gap_penalty: f64,
    #[serde(default = "default_match_reward")]
    pub match_reward: f64,
    #[serde(default = "default_mismatch_penalty")]
    pub mismatch_penalty: f64,
}

fn default_gap_penalty() -> f64 { -2.0 }
fn default_match_reward() -> f64 { 1.0 }
fn default_mismatch_penalty() -> f64 { -2.0 }

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            gap_penalty: default_gap_penalty(),
            match_reward: default_match_reward(),
            mismatch_penalty: default_mismatch_penalty(),
        }
    }
}

impl ScorerConfig {
    pub fn smith_waterman(&self, case_sensitive: bool) -> SmithWatermanGotoh {
        SmithWatermanGotoh {
            case_sensitive,
            gap_penalty: self.gap_penalty,
            substitution: MatchMismatch {
                match_reward: self.match_reward,
                mismatch_penalty: self.mismatch_penalty,
            },
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub highlight_symbol: String,
    #[serde(default = "default_highlight_fg")]
    pub highlight_fg: String,
    #[serde(default = "default_highlight_bg")]
    pub highlight_bg: String,
}

fn default_prompt() -> String { "> ".to_string() }
fn default_highlight_fg() -> String { "white".to_string() }
fn default_highlight_bg() -> String { "darkgray".to_string() }

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            highlight_symbol: String::new(),
            highlight_fg: default_highlight_fg(),
            highlight_bg: default_highlight_bg(),
        }
    }
}

impl ThemeConfig {
    /// Parses a colour name or `#rrggbb`, falling back on anything unknown.
    pub fn parse_color(name: &str, fallback: Color) -> Color {
        Color::from_str(name).unwrap_or_else(|_| {
            warn!("unknown colour '{}', using {:?}", name, fallback);
            fallback
        })
    }

    pub fn highlight_fg(&self) -> Color {
        Self::parse_color(&self.highlight_fg, Color::White)
    }

    pub fn highlight_bg(&self) -> Color {
        Self::parse_color(&self.highlight_bg, Color::DarkGray)
    }
}

pub fn default_config_path() -> PathBuf {
    match ProjectDirs::from("org", "fuzzy", "fuzzy") {
        Some(dirs) => dirs.config_dir().join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

/// Loads `path`, or the default location when `None`. A missing file gives
/// the defaults; a malformed one is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    if !config_path.exists() {
        debug!("no config at {:?}, using defaults", config_path);
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)?;
    let config: Config = toml::from_str(&content).map_err(|source| PickError::Config {
        path: config_path.display().to_string(),
        source,
    })?;
    debug!("loaded config from {:?}", config_path);
    Ok(config)
}
