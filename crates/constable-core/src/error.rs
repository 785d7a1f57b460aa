//! Error types for the extraction pipeline.
//!
//! Every variant is fatal to the run: the tool never emits a table it is
//! not sure about, so there is no warning-and-continue mode.

use thiserror::Error;

/// Error type for constant extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// An alias define referenced a name that is not bound at that point
    /// in the scan. Forward references are unsupported.
    #[error("{name} is an alias for {target}, which is not defined at that point")]
    UnboundAlias { name: String, target: String },

    /// An `#undef` named something that does not look like a constant of
    /// this domain. Catches malformed input early instead of ignoring it.
    #[error("refusing to undef {0:?}: not a plausible constant name")]
    BogusUndef(String),

    /// A macro expansion left residue outside the supported character set,
    /// or a numeric token in it failed to parse.
    #[error("{0:?} looks like an expression, but not a supported one")]
    UnsupportedExpr(String),

    /// A syscall table row did not have the expected tab-delimited shape.
    #[error("malformed table row at line {line}: {text:?}")]
    MalformedTableRow { line: usize, text: String },

    /// A resolved mapping is missing names from its required baseline.
    /// `missing` is sorted so the report is deterministic.
    #[error("{arch}: resolved constants are missing {missing:?}")]
    MissingBaseline { arch: String, missing: Vec<String> },

    /// A resolved mapping came out empty. An empty table is never valid
    /// output; it means the source tree layout changed under us.
    #[error("no constants resolved for {0}")]
    EmptyResult(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
