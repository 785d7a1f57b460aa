//! # constable-core
//!
//! Primitives for recovering platform constant tables from kernel source
//! text: a normalizing scanner for errno-style `#define`/`#undef` chains,
//! a deliberately narrow expression evaluator for preprocessor residue,
//! a tab-delimited syscall table reader, baseline completeness validation,
//! and the generated-file emitter.

pub mod baseline;
pub mod constmap;
pub mod emit;
pub mod error;
pub mod expr;
pub mod scan;
pub mod table;

pub use baseline::BaselineSet;
pub use constmap::ConstantMap;
pub use emit::{render, write_file, Domain};
pub use error::Error;
pub use expr::sum_expr;
pub use scan::{normalize, scan_header, Dialect};
pub use table::parse_table;

/// Result type used throughout the extraction pipeline.
pub type Result<T> = std::result::Result<T, Error>;
