//! Harvest-corpus collaborator: greps the kernel tree for syscall macro
//! references. The kernel checkout is a git repository, so `git grep` is
//! both the fastest and the most faithful way to sweep it.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Greps the kernel tree for `__NR_`-style tokens and returns the raw
/// matching lines. A failing grep is fatal: an unreadable or non-git tree
/// cannot be trusted as a source.
pub fn grep_corpus(linux_src: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["--no-pager", "grep", r"\<__\([A-Z]\+_\)\?NR_"])
        .current_dir(linux_src)
        .output()
        .with_context(|| format!("failed to run git grep in {}", linux_src.display()))?;

    if !output.status.success() {
        bail!(
            "git grep in {} failed ({}): {}",
            linux_src.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
