use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::lookup::SymbolTable;
use crate::types::{IndexedSymbol, TargetLookup};

#[derive(Serialize)]
pub struct JsonReport {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub source: SourceInfo,
    pub struct_name: String,
    pub total: usize,
    pub targets: Vec<TargetLookup>,
    pub symbols: Vec<IndexedSymbol>,
}

/// Which header the ordinals were read from
#[derive(Serialize)]
pub struct SourceInfo {
    pub path: String,
    pub sha256: String,
}

impl SourceInfo {
    pub fn new(path: &str, content: &str) -> Self {
        Self {
            path: path.to_string(),
            sha256: hash_content(content),
        }
    }
}

impl JsonReport {
    pub fn new(
        source: SourceInfo,
        struct_name: &str,
        table: &SymbolTable,
        targets: Vec<TargetLookup>,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            source,
            struct_name: struct_name.to_string(),
            total: table.len(),
            targets,
            symbols: table.symbols().to_vec(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
