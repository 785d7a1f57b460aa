//! Linux syscall number table regeneration.
//!
//! Per architecture: the kernel's own syscall table (where one exists) is
//! loaded first, then header-probe results are layered on top — the probe
//! reflects what the architecture's headers actually define, so it wins
//! on conflicts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use constable_core::{parse_table, write_file, BaselineSet, ConstantMap, Domain};
use constable_probe::{harvest_candidates, probe_syscall_numbers, CcPreprocessor};

use crate::corpus::grep_corpus;
use crate::profiles::{display_arch, LINUX_ARCHES};

pub fn run_syscalls(linux_src: &Path, out_dir: &Path) -> Result<()> {
    let corpus = grep_corpus(linux_src)?;
    let candidates = harvest_candidates(&corpus)?;
    println!("harvested {} candidate syscall names", candidates.len());

    let preprocessor = CcPreprocessor::default();
    let baseline = BaselineSet::empty();

    for profile in LINUX_ARCHES {
        let mut numbers = ConstantMap::new();

        if let Some(table) = &profile.table {
            let path = linux_src
                .join("arch")
                .join(profile.kernel_dir)
                .join(table.path);
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            for (name, nr) in parse_table(&text, table.abis)
                .with_context(|| format!("failed to parse {}", path.display()))?
            {
                numbers.insert(name, nr);
            }
        }

        if let Some(probe) = &profile.probe {
            let probed = probe_syscall_numbers(
                &preprocessor,
                &candidates,
                &profile.include_dirs(linux_src),
                probe.overrides,
            )
            .with_context(|| format!("header probe failed for {}", profile.arch))?;
            numbers.merge_from(&probed);
        }

        // No per-name baseline exists for syscalls; the validator still
        // rejects an empty result, which means the tree layout changed.
        baseline.validate(profile.arch, &numbers)?;

        let path = out_dir
            .join(format!("linux-{}", profile.arch))
            .join("nr.rs");
        write_file(
            &path,
            Domain::Syscall,
            &numbers,
            display_arch(profile.arch),
            "Linux",
        )
        .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {} ({} syscalls)", path.display(), numbers.len());
    }

    Ok(())
}
