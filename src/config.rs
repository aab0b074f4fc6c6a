//! Scan settings: defaults, optional TOML file, CLI overrides applied on top.

use crate::error::{ExtractError, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_STRUCT_NAME: &str = "OrtApi";
pub const DEFAULT_RELEASE_MACRO: &str = "ORT_CLASS_RELEASE";
pub const DEFAULT_STATUS_MACRO: &str = "ORT_API2_STATUS";
pub const DEFAULT_CALL_MARKER: &str = "ORT_API_CALL";

const RELEASE_TARGETS: &[&str] = &[
    "ReleaseEnv",
    "ReleaseStatus",
    "ReleaseMemoryInfo",
    "ReleaseSession",
    "ReleaseValue",
    "ReleaseTypeInfo",
    "ReleaseTensorTypeAndShapeInfo",
    "ReleaseSessionOptions",
];

const CORE_TARGETS: &[&str] = &[
    "CreateStatus",
    "GetErrorCode",
    "GetErrorMessage",
    "CreateEnv",
    "CreateEnvWithCustomLogger",
    "EnableTelemetryEvents",
    "DisableTelemetryEvents",
    "CreateSession",
    "CreateSessionFromArray",
    "Run",
    "CreateSessionOptions",
    "SetOptimizedModelFilePath",
    "SetSessionGraphOptimizationLevel",
    "SessionGetInputCount",
    "SessionGetOutputCount",
    "SessionGetInputName",
    "SessionGetOutputName",
    "GetAllocatorWithDefaultOptions",
    "ReleaseEnv",
    "ReleaseSession",
    "ReleaseSessionOptions",
];

/// Built-in target lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TargetPreset {
    /// Release* functions needed for resource cleanup
    #[default]
    Release,
    /// Environment, session and error functions most bindings start with
    Core,
}

impl TargetPreset {
    pub fn targets(&self) -> Vec<String> {
        let names = match self {
            TargetPreset::Release => RELEASE_TARGETS,
            TargetPreset::Core => CORE_TARGETS,
        };
        names.iter().map(|s| s.to_string()).collect()
    }
}

/// Rule and report settings for one scan
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub struct_name: String,
    pub release_macro: String,
    /// Empty disables the status shorthand rule
    pub status_macro: String,
    pub call_marker: String,
    pub targets: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            struct_name: DEFAULT_STRUCT_NAME.to_string(),
            release_macro: DEFAULT_RELEASE_MACRO.to_string(),
            status_macro: DEFAULT_STATUS_MACRO.to_string(),
            call_marker: DEFAULT_CALL_MARKER.to_string(),
            targets: TargetPreset::default().targets(),
        }
    }
}

impl ScanConfig {
    /// Load from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ExtractError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|message| ExtractError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }

    pub fn status_macro(&self) -> Option<&str> {
        let name = self.status_macro.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}
