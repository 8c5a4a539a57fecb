// Application settings
// Loaded from ~/.config/payrecon/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use payrecon_core::{LabelLanguage, RegistryLayout};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Output
    #[serde(rename = "output.labels")]
    pub labels: LabelLanguage,

    // Comparison defaults, overridable per run from the command line
    #[serde(rename = "compare.layout")]
    pub layout: RegistryLayout,

    #[serde(rename = "compare.bidirectional")]
    pub bidirectional: bool,

    // Row filters for table and CSV output
    #[serde(rename = "filter.hideMatches")]
    pub hide_matches: bool,

    #[serde(rename = "filter.hideMissingInRegistry")]
    pub hide_missing_in_registry: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Output
            labels: LabelLanguage::default(),
            // Comparison
            layout: RegistryLayout::ThreeColumn,
            bidirectional: false,
            // Filters
            hide_matches: false,
            hide_missing_in_registry: false,
        }
    }
}

/// Commented template written on first run. `load` strips the comment
/// lines, so the examples here double as documentation.
const DEFAULT_TEMPLATE: &str = r#"{
    // Status and header vocabulary: "en" or "ru"
    "output.labels": "en",

    // Registry layout when --layout is not given:
    // "three_column", "two_column", "nine_column", "eight_plus_column"
    "compare.layout": "three_column",

    // Also flag registry people absent from the report
    "compare.bidirectional": false,

    // Row filters for table and CSV output (JSON output is never filtered)
    "filter.hideMatches": false,
    "filter.hideMissingInRegistry": false
}
"#;

impl Settings {
    /// Path of settings.json under the user config dir.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("payrecon")
            .join("settings.json")
    }

    /// Load settings, falling back to defaults on any problem. A missing
    /// file is seeded with the commented template.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            Self::create_default_file(&path);
            return Self::default();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("warning: cannot read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&strip_comment_lines(&contents)) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!(
                    "warning: {} is not valid JSON ({}), using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Write the current settings as plain JSON, creating parent dirs.
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, json).map_err(|e| e.to_string())
    }

    fn create_default_file(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("warning: cannot create {}: {}", parent.display(), e);
                return;
            }
        }
        if let Err(e) = fs::write(path, DEFAULT_TEMPLATE) {
            eprintln!("warning: cannot write {}: {}", path.display(), e);
        }
    }
}

/// Settings files may carry `//` comment lines; JSON proper does not.
fn strip_comment_lines(contents: &str) -> String {
    contents
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}
