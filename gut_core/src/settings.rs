//! # Settings
//!
//! Presentation and export settings for a session. Settings are optional:
//! every field has a default, and a settings file only needs the fields it
//! wants to override.
//!
//! ```json
//! { "locale": "pt-BR", "export_file_name": "gut.csv" }
//! ```
//!
//! The [`Locale`] decides the export column headers and tier labels. English
//! is the default; `pt-BR` reproduces the headers of the Portuguese
//! spreadsheet the catalog comes from.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{GutError, GutResult};
use crate::file_io::{read_to_string, write_atomic};
use crate::ranking::Tier;

/// Default file name of the CSV export
pub const EXPORT_FILE_NAME: &str = "matriz_gut_prioridades.csv";

/// Language of headers and tier labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt-BR")]
    Portuguese,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Portuguese];

    /// Export/table column headers, in column order.
    pub fn column_headers(&self) -> [&'static str; 7] {
        match self {
            Locale::English => ["id", "label", "gravity", "urgency", "trend", "priority", "tier"],
            Locale::Portuguese => ["Nº", "Ação Proposta", "G", "U", "T", "Prioridade", "Nível"],
        }
    }

    pub fn tier_label(&self, tier: Tier) -> &'static str {
        match (self, tier) {
            (Locale::English, _) => tier.name(),
            (Locale::Portuguese, Tier::High) => "Alta",
            (Locale::Portuguese, Tier::Medium) => "Média",
            (Locale::Portuguese, Tier::Low) => "Baixa",
        }
    }

    /// Inverse of [`Locale::tier_label`].
    pub fn parse_tier(&self, label: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|&tier| self.tier_label(tier) == label.trim())
    }

    pub fn default_chart_title(&self) -> &'static str {
        match self {
            Locale::English => "GUT Priority Ranking",
            Locale::Portuguese => "Ranking de Prioridades (GUT)",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Portuguese => "pt-BR",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = GutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "pt" | "pt-br" | "pt_br" | "portuguese" => Ok(Locale::Portuguese),
            _ => Err(GutError::invalid_input("locale", s, "Expected 'en' or 'pt-BR'")),
        }
    }
}

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GutSettings {
    pub locale: Locale,

    /// File name offered for the CSV export
    pub export_file_name: String,

    /// Chart title; `None` uses the locale's default title
    pub chart_title: Option<String>,
}

impl Default for GutSettings {
    fn default() -> Self {
        GutSettings {
            locale: Locale::default(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            chart_title: None,
        }
    }
}

impl GutSettings {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn chart_title(&self) -> &str {
        self.chart_title
            .as_deref()
            .unwrap_or_else(|| self.locale.default_chart_title())
    }
}

/// Load settings from a JSON file.
pub fn load_settings(path: &Path) -> GutResult<GutSettings> {
    let contents = read_to_string(path)?;
    let settings: GutSettings = serde_json::from_str(&contents).map_err(|e| {
        GutError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), locale = %settings.locale, "settings loaded");
    Ok(settings)
}

/// Save settings as pretty JSON (atomic write).
pub fn save_settings(settings: &GutSettings, path: &Path) -> GutResult<()> {
    let json = serde_json::to_string_pretty(settings).map_err(|e| GutError::serialization(e.to_string()))?;
    write_atomic(path, json.as_bytes())
}
