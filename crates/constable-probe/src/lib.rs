//! # constable-probe
//!
//! Recovery of syscall numbers by preprocessor probing: harvest candidate
//! symbol names from the kernel source corpus, synthesize a probe
//! translation unit that forces the architecture's `__NR_*` macros to
//! expand, run the external preprocessor over it, and parse the expansion
//! back into a constant map.
//!
//! The preprocessor itself sits behind the narrow [`Preprocessor`] trait,
//! so everything above it can be exercised without a toolchain present.

pub mod harvest;
pub mod preprocessor;
pub mod probe;

pub use harvest::{harvest_candidates, Candidate, MIN_CANDIDATES};
pub use preprocessor::{CcPreprocessor, MacroOverride, Preprocessor};
pub use probe::{probe_syscall_numbers, render_probe, stub_include_dir};

use thiserror::Error;

/// Error type for the probe pipeline. All variants abort the run; a failed
/// probe never degrades into partial output.
#[derive(Error, Debug)]
pub enum Error {
    /// The external preprocessor exited non-zero, i.e. the probe unit did
    /// not even preprocess. There is no retry and no partial-success mode.
    #[error("preprocessor {program:?} failed ({status}):\n{stderr}")]
    PreprocessorFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// A probe output line had the lookup token but not the expected
    /// `token name expansion` shape.
    #[error("malformed probe output line: {0:?}")]
    MalformedOutput(String),

    /// The candidate harvest found implausibly few names — the kernel
    /// tree's naming convention must have changed incompatibly.
    #[error("harvested only {found} candidate syscall names, expected at least {minimum}")]
    HarvestTooSmall { found: usize, minimum: usize },

    /// An expansion failed numeric resolution (or another core error).
    #[error(transparent)]
    Core(#[from] constable_core::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the probe pipeline.
pub type Result<T> = std::result::Result<T, Error>;
