use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use payrecon_core::{ReconcileMode, RegistryLayout};

/// Session schema version
/// Increment when the schema changes in a way old builds can't read
pub const SESSION_VERSION: u32 = 1;

/// Inputs and options of the most recent comparison, kept so a bare
/// `payrecon compare` can replay it. Only file-backed runs are recorded;
/// stdin input cannot be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastRun {
    pub registry: PathBuf,
    pub report: PathBuf,
    pub layout: RegistryLayout,
    pub mode: ReconcileMode,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Session {
    pub version: u32,
    pub last: Option<LastRun>,
}

impl Session {
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("payrecon")
            .join("session.json")
    }

    pub fn load() -> Option<Self> {
        let path = Self::path();
        fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    pub fn save(&self) -> Result<(), String> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, json).map_err(|e| e.to_string())
    }
}
