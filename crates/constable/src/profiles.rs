//! Per-architecture configuration: where each target's constants come
//! from in a kernel tree, and how the target is spelled in generated
//! headers. This is data about kernel layout, not extraction logic.

use std::path::{Path, PathBuf};

use constable_probe::MacroOverride;

/// A syscall table source: path relative to `arch/<kernel_dir>/` plus the
/// ABI tags whose rows apply to this target.
#[derive(Debug, Clone, Copy)]
pub struct TableSource {
    pub path: &'static str,
    pub abis: &'static [&'static str],
}

/// A header-probe source: the macro overrides that select this target's
/// variant of the umbrella header.
#[derive(Debug, Clone, Copy)]
pub struct ProbeSource {
    pub overrides: &'static [MacroOverride],
}

/// One target architecture.
#[derive(Debug, Clone, Copy)]
pub struct ArchProfile {
    /// Our name for the target (also the `linux-<arch>` directory name).
    pub arch: &'static str,
    /// The kernel's directory name under `arch/`.
    pub kernel_dir: &'static str,
    /// Kernel arch dir with its own errno.h; `None` means the generic
    /// header applies.
    pub errno_arch: Option<&'static str>,
    pub table: Option<TableSource>,
    pub probe: Option<ProbeSource>,
}

impl ArchProfile {
    /// The include roots the probe needs, in search order. The caller
    /// appends the stub directory after these so real headers win.
    pub fn include_dirs(&self, linux_src: &Path) -> Vec<PathBuf> {
        vec![
            linux_src.join(format!("arch/{}/include/uapi", self.kernel_dir)),
            linux_src.join(format!("arch/{}/include/generated/uapi", self.kernel_dir)),
            linux_src.join("include"),
            linux_src.join("include/uapi"),
        ]
    }

}

/// Every Linux target we generate tables for.
///
/// x86 and x86_64 keep authoritative tables in the kernel, so probing is
/// unnecessary there; armeabi has both (the table misses the ARM-private
/// calls, so probe results are layered on top).
pub const LINUX_ARCHES: &[ArchProfile] = &[
    ArchProfile {
        arch: "aarch64",
        kernel_dir: "arm64",
        errno_arch: None,
        table: None,
        probe: Some(ProbeSource { overrides: &[] }),
    },
    ArchProfile {
        arch: "armeabi",
        kernel_dir: "arm",
        errno_arch: None,
        table: Some(TableSource {
            path: "tools/syscall.tbl",
            abis: &["common", "eabi"],
        }),
        probe: Some(ProbeSource {
            overrides: &[MacroOverride::Define {
                name: "__ARM_EABI__",
                value: "",
            }],
        }),
    },
    ArchProfile {
        arch: "mips",
        kernel_dir: "mips",
        errno_arch: Some("mips"),
        table: None,
        probe: Some(ProbeSource {
            overrides: &[MacroOverride::Define {
                name: "_MIPS_SIM",
                value: "_MIPS_SIM_ABI32",
            }],
        }),
    },
    ArchProfile {
        arch: "mips64",
        kernel_dir: "mips",
        errno_arch: Some("mips"),
        table: None,
        probe: Some(ProbeSource {
            overrides: &[MacroOverride::Define {
                name: "_MIPS_SIM",
                value: "_MIPS_SIM_ABI64",
            }],
        }),
    },
    ArchProfile {
        arch: "powerpc",
        kernel_dir: "powerpc",
        errno_arch: Some("powerpc"),
        table: None,
        probe: Some(ProbeSource {
            overrides: &[MacroOverride::Undef {
                name: "__arch64__",
            }],
        }),
    },
    ArchProfile {
        arch: "powerpc64",
        kernel_dir: "powerpc",
        errno_arch: Some("powerpc"),
        table: None,
        probe: Some(ProbeSource {
            overrides: &[
                MacroOverride::Define {
                    name: "__arch64__",
                    value: "1",
                },
                MacroOverride::Define {
                    name: "__powerpc64__",
                    value: "",
                },
            ],
        }),
    },
    ArchProfile {
        arch: "sparc64",
        kernel_dir: "sparc",
        errno_arch: Some("sparc"),
        table: None,
        probe: Some(ProbeSource { overrides: &[] }),
    },
    ArchProfile {
        arch: "riscv64",
        kernel_dir: "riscv",
        errno_arch: None,
        table: None,
        probe: Some(ProbeSource { overrides: &[] }),
    },
    ArchProfile {
        arch: "x86",
        kernel_dir: "x86",
        errno_arch: None,
        table: Some(TableSource {
            path: "entry/syscalls/syscall_32.tbl",
            abis: &["i386"],
        }),
        probe: None,
    },
    ArchProfile {
        arch: "x86_64",
        kernel_dir: "x86",
        errno_arch: None,
        table: Some(TableSource {
            path: "entry/syscalls/syscall_64.tbl",
            abis: &["common", "64"],
        }),
        probe: None,
    },
];

/// Display spelling of an architecture for generated header comments.
pub fn display_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "x86-64",
        "powerpc" => "PowerPC",
        "powerpc64" => "PowerPC64",
        "mips" => "MIPS",
        "mips64" => "MIPS64",
        "sparc64" => "SPARC64",
        "armeabi" => "arm",
        "riscv64" => "RISCV-64",
        other => other,
    }
}
