//! Linux errno table regeneration.
//!
//! Resolution is layered: the tiny `errno-base.h` seeds the generic
//! `asm-generic/errno.h`, and architectures with their own `errno.h`
//! rescan on top of one of those bases. PowerPC is the odd one out — its
//! header extends the fully resolved generic map, not the base file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use constable_core::{scan_header, write_file, BaselineSet, ConstantMap, Dialect, Domain};

use crate::baselines::LINUX_REQUIRED_ERRNOS;
use crate::profiles::{display_arch, LINUX_ARCHES};

fn scan_file(path: &Path, base: Option<&ConstantMap>) -> Result<ConstantMap> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    scan_header(&text, Dialect::Linux, base)
        .with_context(|| format!("failed to scan {}", path.display()))
}

fn errno_header_path(linux_src: &Path, karch: &str) -> PathBuf {
    // MIPS keeps a copy under tools/ that builds without the full uapi
    // machinery; it is the one the kernel's own tooling reads.
    if karch == "mips" {
        linux_src.join("tools/arch/mips/include/uapi/asm/errno.h")
    } else {
        linux_src.join(format!("arch/{karch}/include/uapi/asm/errno.h"))
    }
}

pub fn run_errno(linux_src: &Path, out_dir: &Path) -> Result<()> {
    let errno_base = scan_file(
        &linux_src.join("tools/include/uapi/asm-generic/errno-base.h"),
        None,
    )?;
    let generic = scan_file(
        &linux_src.join("include/uapi/asm-generic/errno.h"),
        Some(&errno_base),
    )?;

    // Resolve each distinct kernel errno header once, then fan out to the
    // targets that share it.
    let mut karch_maps: BTreeMap<&str, ConstantMap> = BTreeMap::new();
    for profile in LINUX_ARCHES {
        let Some(karch) = profile.errno_arch else {
            continue;
        };
        if karch_maps.contains_key(karch) {
            continue;
        }
        let base = if karch == "powerpc" {
            &generic
        } else {
            &errno_base
        };
        let map = scan_file(&errno_header_path(linux_src, karch), Some(base))?;
        karch_maps.insert(karch, map);
    }

    let baseline = BaselineSet::new(LINUX_REQUIRED_ERRNOS.iter().copied());
    for profile in LINUX_ARCHES {
        let errnos = match profile.errno_arch {
            Some(karch) => &karch_maps[karch],
            None => &generic,
        };
        baseline.validate(profile.arch, errnos)?;

        let path = out_dir
            .join(format!("linux-{}", profile.arch))
            .join("eno.rs");
        write_file(&path, Domain::Errno, errnos, display_arch(profile.arch), "Linux")
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {} ({} constants)", path.display(), errnos.len());
    }

    Ok(())
}
