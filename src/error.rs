use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("header not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read header {}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find struct {name} in source")]
    StructNotFound { name: String },

    #[error("struct {name} was found but no member declarations matched any rule")]
    NoSymbolsExtracted { name: String },

    #[error("invalid pattern for {rule} rule")]
    InvalidPattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("targets not found: {}", .names.join(", "))]
    MissingTargets { names: Vec<String> },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
