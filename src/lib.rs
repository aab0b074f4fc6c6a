//! Map the function-pointer members of a C API struct (such as ONNX Runtime's
//! `OrtApi`) to their zero-based ordinals, by static reading of the header.
//!
//! ```no_run
//! use std::path::Path;
//! use vtable_index::config::ScanConfig;
//! use vtable_index::extract::{read_source, StructMemberExtractor};
//!
//! let source = read_source(Path::new("onnxruntime_c_api.h"))?;
//! let extractor = StructMemberExtractor::new(&ScanConfig::default())?;
//! let table = extractor.extract_source(&source)?;
//! println!("ReleaseEnv: {:?}", table.index_of("ReleaseEnv"));
//! # Ok::<(), vtable_index::error::ExtractError>(())
//! ```

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod types;

pub use error::ExtractError;
pub use extract::StructMemberExtractor;
pub use lookup::SymbolTable;
