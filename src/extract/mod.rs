//! Ordered member extraction from a C struct-of-function-pointers.
//!
//! Pipeline: strip comments, locate `struct <Name> { ... };`, split the body on
//! `;`, then name each declaration with the first matching [`MemberRule`].
//! Declaration order is the ABI ordinal and is never re-sorted.

mod locate;
mod rules;
mod split;

pub use locate::{locate_struct_body, strip_comments};
pub use rules::{MemberRule, RuleSet};
pub use split::split_declarations;

use crate::config::ScanConfig;
use crate::error::{ExtractError, Result};
use crate::lookup::SymbolTable;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a header into memory. The file is closed before this returns.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExtractError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ExtractError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Outcome of scanning one struct body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructScan {
    /// Non-empty `;`-delimited clauses in the body
    pub declaration_count: usize,
    pub table: SymbolTable,
}

impl StructScan {
    /// Declarations exist but none matched a rule, which usually means the
    /// rules no longer fit the header. An empty struct is not a miss.
    pub fn is_pattern_miss(&self) -> bool {
        self.declaration_count > 0 && self.table.is_empty()
    }
}

pub struct StructMemberExtractor {
    struct_name: String,
    rules: RuleSet,
}

impl StructMemberExtractor {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            struct_name: config.struct_name.clone(),
            rules: RuleSet::from_config(config)?,
        })
    }

    pub fn struct_name(&self) -> &str {
        &self.struct_name
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Extract the ordered symbols of the configured struct from full source text.
    pub fn extract_source(&self, source: &str) -> Result<SymbolTable> {
        Ok(self.scan_source(source)?.table)
    }

    /// Like [`extract_source`](Self::extract_source), keeping the declaration count.
    pub fn scan_source(&self, source: &str) -> Result<StructScan> {
        let stripped = strip_comments(source);
        let body = locate_struct_body(&stripped, &self.struct_name)?;
        Ok(self.scan_stripped(body))
    }

    /// Extract ordered symbols from a located struct body.
    ///
    /// `body` is raw header text; comments are stripped here.
    pub fn extract_body(&self, body: &str) -> SymbolTable {
        self.scan_stripped(&strip_comments(body)).table
    }

    fn scan_stripped(&self, body: &str) -> StructScan {
        let declarations = split_declarations(body);
        let table = declarations
            .iter()
            .filter_map(|decl| self.rules.extract(decl))
            .collect();
        StructScan {
            declaration_count: declarations.len(),
            table,
        }
    }
}
