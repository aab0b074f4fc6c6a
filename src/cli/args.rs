use clap::Parser;
use std::path::PathBuf;

use crate::config::{ScanConfig, TargetPreset};
use crate::error::Result;
use crate::types::IndexRange;

#[derive(Parser, Debug)]
#[command(name = "vtable-index")]
#[command(version)]
#[command(about = "Report the vtable ordinals of function pointers in a C API struct")]
#[command(after_help = "EXAMPLES:\n  \
    vtable-index include/onnxruntime_c_api.h\n  \
    vtable-index include/onnxruntime_c_api.h --preset core --context\n  \
    vtable-index include/onnxruntime_c_api.h -t ReleaseEnv -t ReleaseSession --json\n  \
    vtable-index include/onnxruntime_c_api.h --range 70..90")]
pub struct Args {
    /// C header to scan
    #[arg(value_name = "HEADER")]
    pub header: PathBuf,

    /// Struct whose members are indexed [default: OrtApi]
    #[arg(short = 's', long = "struct", value_name = "NAME")]
    pub struct_name: Option<String>,

    /// Function to report (repeatable); replaces the configured targets
    #[arg(short = 't', long = "target", value_name = "NAME")]
    pub targets: Vec<String>,

    /// Built-in target list
    #[arg(long, value_enum, conflicts_with = "targets")]
    pub preset: Option<TargetPreset>,

    /// TOML file with scan settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Release shorthand macro, `MACRO(X)` names `ReleaseX`
    #[arg(long, value_name = "NAME")]
    pub release_macro: Option<String>,

    /// Status shorthand macro, `MACRO(X, ...)` names `X`
    #[arg(long, value_name = "NAME", conflicts_with = "no_status_macro")]
    pub status_macro: Option<String>,

    /// Disable the status shorthand rule
    #[arg(long)]
    pub no_status_macro: bool,

    /// Calling-convention marker in `(MARKER* Name)`
    #[arg(long, value_name = "NAME")]
    pub call_marker: Option<String>,

    /// Show the previous and next function around each target
    #[arg(long)]
    pub context: bool,

    /// Show functions in an inclusive index range, e.g. 70..90
    #[arg(long, value_name = "START..END")]
    pub range: Option<IndexRange>,

    /// Show the first N functions
    #[arg(long, value_name = "N")]
    pub head: Option<usize>,

    /// Show every extracted function
    #[arg(long)]
    pub all: bool,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Fail when nothing is extracted or a target is missing
    #[arg(long)]
    pub strict: bool,

    /// Print extraction details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Defaults, then the config file, then flags
    pub fn scan_config(&self) -> Result<ScanConfig> {
        let mut config = match &self.config {
            Some(path) => ScanConfig::load(path)?,
            None => ScanConfig::default(),
        };

        if let Some(name) = &self.struct_name {
            config.struct_name = name.clone();
        }
        if let Some(name) = &self.release_macro {
            config.release_macro = name.clone();
        }
        if let Some(name) = &self.status_macro {
            config.status_macro = name.clone();
        }
        if self.no_status_macro {
            config.status_macro.clear();
        }
        if let Some(marker) = &self.call_marker {
            config.call_marker = marker.clone();
        }

        if !self.targets.is_empty() {
            config.targets = self.targets.clone();
        } else if let Some(preset) = self.preset {
            config.targets = preset.targets();
        }

        Ok(config)
    }
}
