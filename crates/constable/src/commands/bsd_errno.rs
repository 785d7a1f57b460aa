//! BSD-family errno table regeneration.
//!
//! One errno.h covers every architecture of the platform, so the header
//! is scanned once and the result is written into each existing
//! `<os>-<arch>` platform directory under the output root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use constable_core::{scan_header, write_file, BaselineSet, Dialect, Domain};

use crate::baselines::{FREEBSD_REQUIRED_ERRNOS, MACOS_REQUIRED_ERRNOS};
use crate::profiles::display_arch;

/// BSD-family platforms with a supported errno dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BsdOs {
    Freebsd,
    Macos,
}

impl BsdOs {
    /// Directory-name spelling, e.g. `freebsd-x86_64`.
    fn dir_name(self) -> &'static str {
        match self {
            Self::Freebsd => "freebsd",
            Self::Macos => "macos",
        }
    }

    /// Display spelling for generated header comments.
    fn display_name(self) -> &'static str {
        match self {
            Self::Freebsd => "FreeBSD",
            Self::Macos => "macOS",
        }
    }

    fn required_errnos(self) -> &'static [&'static str] {
        match self {
            Self::Freebsd => FREEBSD_REQUIRED_ERRNOS,
            Self::Macos => MACOS_REQUIRED_ERRNOS,
        }
    }
}

/// Finds the `<os>-<arch>` platform directories already present under the
/// output root and returns their arch suffixes.
fn existing_arches(out_dir: &Path, os: BsdOs) -> Result<Vec<String>> {
    let prefix = format!("{}-", os.dir_name());
    let mut arches = Vec::new();
    for entry in fs::read_dir(out_dir)
        .with_context(|| format!("failed to list {}", out_dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if let Some(arch) = name.to_string_lossy().strip_prefix(&prefix) {
            arches.push(arch.to_string());
        }
    }
    arches.sort_unstable();
    Ok(arches)
}

pub fn run_bsd_errno(errno_header: &Path, os: BsdOs, out_dir: &Path) -> Result<()> {
    let text = fs::read_to_string(errno_header)
        .with_context(|| format!("failed to read {}", errno_header.display()))?;
    let mut errnos = scan_header(&text, Dialect::Bsd, None)
        .with_context(|| format!("failed to scan {}", errno_header.display()))?;

    if os == BsdOs::Macos {
        // Carbon-era compatibility aliases, deliberately not exported.
        errnos.remove("ECVCERORR");
        errnos.remove("ECVPERORR");
    }

    BaselineSet::new(os.required_errnos().iter().copied())
        .validate(os.dir_name(), &errnos)?;

    let arches = existing_arches(out_dir, os)?;
    if arches.is_empty() {
        println!(
            "no {}-* platform directories under {}",
            os.dir_name(),
            out_dir.display()
        );
        return Ok(());
    }

    for arch in &arches {
        let path = out_dir
            .join(format!("{}-{}", os.dir_name(), arch))
            .join("eno.rs");
        write_file(
            &path,
            Domain::Errno,
            &errnos,
            display_arch(arch),
            os.display_name(),
        )
        .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {} ({} constants)", path.display(), errnos.len());
    }

    Ok(())
}
