//! Probe translation unit synthesis and expansion parsing.
//!
//! The probe is a header that pulls in the architecture's umbrella
//! `asm/unistd.h` and then emits one line per candidate:
//!
//! ```text
//! probe_nr openat __NR_openat
//! ```
//!
//! `probe_nr` is not a macro, so it survives preprocessing untouched and
//! marks the lines to parse; the macro next to it expands to the syscall
//! number on architectures that define it, and stays spelled `__...` on
//! the ones that don't.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use constable_core::{sum_expr, ConstantMap};

use crate::harvest::Candidate;
use crate::preprocessor::{MacroOverride, Preprocessor};
use crate::{Error, Result};

/// The lookup token marking probe lines in the expansion output.
const PROBE_TOKEN: &str = "probe_nr";

/// Renders the probe translation unit for a candidate set.
pub fn render_probe(candidates: &BTreeSet<Candidate>) -> String {
    let mut out = String::from("#include <asm/unistd.h>\n");
    for candidate in candidates {
        out.push_str(&format!(
            "{PROBE_TOKEN} {} {}\n",
            candidate.token(),
            candidate.macro_name()
        ));
    }
    out
}

/// Creates a scratch include directory with empty stand-ins for headers
/// that some architectures' umbrella header includes but that only exist
/// in fully configured trees (`asm/unistd-eabi.h`, `asm/unistd-common.h`
/// on arm). The caller appends this directory *after* the real kernel
/// include roots so genuine headers still take precedence.
pub fn stub_include_dir() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let asm = dir.path().join("asm");
    fs::create_dir(&asm)?;
    fs::write(asm.join("unistd-eabi.h"), "")?;
    fs::write(asm.join("unistd-common.h"), "")?;
    Ok(dir)
}

/// Parses preprocessor output back into `(name, number)` pairs.
///
/// A candidate whose expansion still starts with `__` was never defined —
/// the syscall does not exist on this architecture — and is skipped.
/// Everything else must resolve numerically or the run dies.
fn parse_expansion(output: &str) -> Result<Vec<(String, i64)>> {
    let mut resolved = Vec::new();
    for line in output.lines() {
        let Some(rest) = line.strip_prefix(PROBE_TOKEN) else {
            continue;
        };
        let Some(rest) = rest.strip_prefix(' ') else {
            continue;
        };
        let (name, expansion) = rest
            .split_once(' ')
            .ok_or_else(|| Error::MalformedOutput(line.to_string()))?;

        if expansion.starts_with("__") {
            // Unsupported on this architecture.
            continue;
        }
        resolved.push((name.to_string(), sum_expr(expansion)?));
    }
    Ok(resolved)
}

/// Runs the whole probe for one architecture: synthesize, expand, parse.
///
/// `kernel_include_dirs` are the architecture's real header roots; the
/// stub directory is created here and searched last.
pub fn probe_syscall_numbers(
    preprocessor: &dyn Preprocessor,
    candidates: &BTreeSet<Candidate>,
    kernel_include_dirs: &[PathBuf],
    overrides: &[MacroOverride],
) -> Result<ConstantMap> {
    let stubs = stub_include_dir()?;

    let mut include_dirs: Vec<PathBuf> = kernel_include_dirs.to_vec();
    include_dirs.push(stubs.path().to_path_buf());

    let probe = render_probe(candidates);
    let expanded = preprocessor.expand(&probe, &include_dirs, overrides)?;

    Ok(parse_expansion(&expanded)?.into_iter().collect())
}
