//! Emission of the generated constant files.
//!
//! One file per architecture, overwritten wholesale: a doc comment naming
//! the target, a generated-by marker, then one `pub const` per entry
//! sorted by name. Rendering is a pure function of the map and metadata so
//! identical inputs produce byte-identical files.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::constmap::ConstantMap;

/// Which kind of constant a file holds; decides the declared type, the
/// name casing and the descriptive phrase in the header comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Error numbers: `pub const ENOENT: i32 = 2;`
    Errno,
    /// System call numbers: `pub const OPENAT: usize = 56;`
    Syscall,
}

impl Domain {
    fn phrase(self) -> &'static str {
        match self {
            Domain::Errno => "Error numbers",
            Domain::Syscall => "System call numbers",
        }
    }

    fn rust_type(self) -> &'static str {
        match self {
            Domain::Errno => "i32",
            Domain::Syscall => "usize",
        }
    }

    fn format_name(self, name: &str) -> String {
        match self {
            Domain::Errno => name.to_string(),
            Domain::Syscall => name.to_uppercase(),
        }
    }
}

/// Renders one constant file. `arch_name` and `os_name` are display names
/// ("x86-64", "Linux"), not directory names.
pub fn render(domain: Domain, map: &ConstantMap, arch_name: &str, os_name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "//! {} for {} {}.", domain.phrase(), arch_name, os_name);
    out.push('\n');
    out.push_str("/* automatically generated by constable */\n\n");

    for (name, value) in map.sorted_entries() {
        let _ = writeln!(
            out,
            "pub const {}: {} = {};",
            domain.format_name(name),
            domain.rust_type(),
            value
        );
    }
    out
}

/// Renders and writes one constant file, replacing any previous content.
pub fn write_file(
    path: &Path,
    domain: Domain,
    map: &ConstantMap,
    arch_name: &str,
    os_name: &str,
) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(domain, map, arch_name, os_name))
}
