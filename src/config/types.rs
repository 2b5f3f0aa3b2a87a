// Configuration type definitions

use clap::ValueEnum;
use serde::Deserialize;

/// Glyphs used for selected/unselected rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    #[default]
    Unicode,
    Ascii,
}

impl MarkerStyle {
    /// Returns the (selected, unselected) row glyphs.
    /// The two glyphs of a pair render at the same width so rows line up.
    pub fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            MarkerStyle::Unicode => ("✓", "·"),
            MarkerStyle::Ascii => ("[x]", "[ ]"),
        }
    }
}

/// How the applied selection is printed on exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Selected choices only, one per line
    #[default]
    Plain,
    /// Every choice with its selected state, as a JSON array
    Json,
}

/// UI configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub marker: MarkerStyle,
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
