//! Render configuration.
//!
//! Everything here has a default matching the stock print layout, so the
//! configuration file is optional and may set only the values it cares about.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory when `--config`
/// isn't given.
pub const DEFAULT_CONFIG_FILE: &str = "html2pdf.toml";

/// Syntax highlighting themes bundled with syntect.
#[derive(Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub enum SyntaxTheme {
    #[serde(rename = "base16-ocean.dark")]
    OceanDark,
    #[serde(rename = "base16-eighties.dark")]
    EightiesDark,
    #[serde(rename = "base16-mocha.dark")]
    MochaDark,
    #[serde(rename = "base16-ocean.light")]
    OceanLight,
    #[serde(rename = "InspiredGitHub")]
    InspiredGitHub,
    #[serde(rename = "Solarized (dark)")]
    SolarizedDark,
    #[serde(rename = "Solarized (light)")]
    SolarizedLight,
}

impl fmt::Display for SyntaxTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl SyntaxTheme {
    pub fn name(&self) -> &'static str {
        match self {
            SyntaxTheme::OceanDark => "base16-ocean.dark",
            SyntaxTheme::EightiesDark => "base16-eighties.dark",
            SyntaxTheme::MochaDark => "base16-mocha.dark",
            SyntaxTheme::OceanLight => "base16-ocean.light",
            SyntaxTheme::InspiredGitHub => "InspiredGitHub",
            SyntaxTheme::SolarizedDark => "Solarized (dark)",
            SyntaxTheme::SolarizedLight => "Solarized (light)",
        }
    }

    #[cfg(test)]
    pub fn all() -> &'static [SyntaxTheme] {
        &[
            SyntaxTheme::OceanDark,
            SyntaxTheme::EightiesDark,
            SyntaxTheme::MochaDark,
            SyntaxTheme::OceanLight,
            SyntaxTheme::InspiredGitHub,
            SyntaxTheme::SolarizedDark,
            SyntaxTheme::SolarizedLight,
        ]
    }
}

/// Page geometry handed to the PDF engine.
///
/// Sizes are in CSS pixels (96 per inch), the unit the stylesheet is written in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub width_px: f64,
    pub height_px: f64,
    /// Applied to all four sides
    pub margin_px: f64,
    /// Print background colours and images (code blocks rely on this)
    pub print_background: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            width_px: 792.5,
            height_px: 1123.0,
            margin_px: 38.5,
            print_background: true,
        }
    }
}

impl PageConfig {
    pub fn width_in(&self) -> f64 {
        px_to_in(self.width_px)
    }

    pub fn height_in(&self) -> f64 {
        px_to_in(self.height_px)
    }

    pub fn margin_in(&self) -> f64 {
        px_to_in(self.margin_px)
    }
}

fn px_to_in(px: f64) -> f64 {
    px / 96.0
}

/// Settings for the headless browser that prints the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub headless: bool,
    pub sandbox: bool,
    /// Chrome/Chromium executable. Empty string to auto-detect.
    pub executable: String,
    /// Seconds the browser may sit idle before it is considered hung
    pub idle_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            headless: true,
            sandbox: false,
            executable: String::new(),
            idle_timeout_secs: 30,
        }
    }
}

impl BrowserConfig {
    /// Returns the browser executable, if configured.
    pub fn executable_path(&self) -> Option<PathBuf> {
        if self.executable.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.executable))
        }
    }
}

/// Document assembly settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Print the file name as a title above the content
    pub title: bool,
    /// Text placed in front of the link that replaces an iframe
    pub iframe_label: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            title: true,
            iframe_label: crate::transform::DEFAULT_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Theme the syntax highlighting stylesheet is generated from
    pub theme: SyntaxTheme,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            theme: SyntaxTheme::OceanDark,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub page: PageConfig,
    pub browser: BrowserConfig,
    pub document: DocumentConfig,
    pub highlight: HighlightConfig,
}

impl Configuration {
    pub fn from_file(path: &Path) -> Result<Configuration> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML in {}", path.display()))
    }

    /// Load the configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] in the
    /// working directory if it exists, or fall back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Configuration> {
        match path {
            Some(path) => Configuration::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    log::debug!("Using configuration from {DEFAULT_CONFIG_FILE}");
                    Configuration::from_file(default_path)
                } else {
                    Ok(Configuration::default())
                }
            }
        }
    }
}
