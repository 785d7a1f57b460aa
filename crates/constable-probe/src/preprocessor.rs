//! The external preprocessor, as a narrow collaborator interface.
//!
//! Everything the pipeline needs from a C toolchain is "expand this text
//! with these include roots and macro overrides". Keeping that behind a
//! trait lets the probe logic run against a fake in tests and keeps the
//! subprocess plumbing in one place.

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Error, Result};

/// A per-architecture macro override applied before probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroOverride {
    /// Define `name` to `value` (empty value defines to nothing, which is
    /// how `#ifdef`-style feature gates are switched on).
    Define {
        name: &'static str,
        value: &'static str,
    },
    /// Force `name` undefined even if a header would define it.
    Undef { name: &'static str },
}

/// Expands probe text with the given include roots and overrides.
///
/// Implementations must treat any failure of the underlying tool as an
/// error; there is no meaning to partially expanded probe output.
pub trait Preprocessor {
    fn expand(
        &self,
        probe: &str,
        include_dirs: &[PathBuf],
        overrides: &[MacroOverride],
    ) -> Result<String>;
}

/// Shells out to a C compiler driver in preprocess-only mode.
///
/// The invocation is `cc -nostdinc -I<dir>... -D/-U... -P -E <file>`:
/// no host headers, line markers suppressed so the output stays parseable,
/// expansion to stdout. A non-zero exit is fatal to the whole run.
#[derive(Debug, Clone)]
pub struct CcPreprocessor {
    program: PathBuf,
}

impl CcPreprocessor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for CcPreprocessor {
    fn default() -> Self {
        Self::new("gcc")
    }
}

impl Preprocessor for CcPreprocessor {
    fn expand(
        &self,
        probe: &str,
        include_dirs: &[PathBuf],
        overrides: &[MacroOverride],
    ) -> Result<String> {
        let mut file = tempfile::Builder::new()
            .prefix("constable-probe-")
            .suffix(".h")
            .tempfile()?;
        file.write_all(probe.as_bytes())?;
        file.flush()?;

        let mut cmd = Command::new(&self.program);
        cmd.arg("-nostdinc");
        for dir in include_dirs {
            cmd.arg("-I").arg(dir);
        }
        for o in overrides {
            match o {
                MacroOverride::Define { name, value } => {
                    cmd.arg(format!("-D{name}={value}"));
                }
                MacroOverride::Undef { name } => {
                    cmd.arg(format!("-U{name}"));
                }
            }
        }
        cmd.arg("-P").arg("-E").arg(file.path());

        let output = cmd.output()?;
        if !output.status.success() {
            return Err(Error::PreprocessorFailed {
                program: self.program.display().to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn have_gcc() -> bool {
        Command::new("gcc")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    #[test]
    fn test_expand_applies_overrides() {
        if !have_gcc() {
            eprintln!("Skipping test: gcc not found");
            return;
        }

        let pp = CcPreprocessor::default();
        let out = pp
            .expand(
                "#ifdef WANTED\nprobe yes\n#else\nprobe no\n#endif\n",
                &[],
                &[MacroOverride::Define {
                    name: "WANTED",
                    value: "",
                }],
            )
            .unwrap();
        assert!(out.contains("probe yes"));
        assert!(!out.contains("probe no"));
    }

    #[test]
    fn test_broken_probe_is_fatal() {
        if !have_gcc() {
            eprintln!("Skipping test: gcc not found");
            return;
        }

        let pp = CcPreprocessor::default();
        let err = pp
            .expand("#include <does-not-exist-anywhere.h>\n", &[], &[])
            .unwrap_err();
        assert!(matches!(err, Error::PreprocessorFailed { .. }));
    }
}
