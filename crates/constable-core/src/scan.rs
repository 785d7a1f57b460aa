//! Normalizing scanner for errno-style definition headers.
//!
//! Kernel errno headers are a narrow C dialect: long runs of `#define`
//! lines, the occasional `#undef`/redefine pair, aliases of earlier names
//! (`#define EWOULDBLOCK EAGAIN`), comments, and conditional-compilation
//! scaffolding around the lot. This module handles a subset of that:
//! - numeric defines (decimal and hexadecimal)
//! - alias defines of an already-bound name
//! - undefines
//!
//! It does NOT handle:
//! - Conditional compilation. `#if`/`#else`/`#endif` lines are dropped, so
//!   every branch is flattened into one scan. This is a known imprecision;
//!   the baseline validation downstream catches the cases where it would
//!   matter.
//! - Compound or function-like macro bodies. A define whose value is not a
//!   single integer or name is not statically derivable from text alone
//!   and is left untracked.

use std::sync::LazyLock;

use regex::Regex;

use crate::constmap::ConstantMap;
use crate::error::Error;
use crate::Result;

/// Which family of errno header is being scanned.
///
/// The dialects differ only in which declaration lines are stripped during
/// normalization and which end-of-list sentinel is discarded at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Linux uapi headers (`asm-generic/errno.h` and per-arch overrides).
    Linux,
    /// BSD-family `errno.h` (FreeBSD, macOS), which mixes declarations
    /// into the same file.
    Bsd,
}

impl Dialect {
    fn skipped_prefixes(self) -> &'static [&'static str] {
        match self {
            Dialect::Linux => &["$", ";", "#include", "#if", "#else", "#endif"],
            Dialect::Bsd => &[
                "$",
                ";",
                "#include",
                "#if",
                "#else",
                "#endif",
                "__BEGIN_DECLS",
                "__END_DECLS",
                "typedef ",
                "int ",
                "extern int ",
            ],
        }
    }

    /// Housekeeping name marking the end of the list. Not a real constant;
    /// removed from the final map unconditionally.
    fn list_end_sentinel(self) -> &'static str {
        match self {
            Dialect::Linux => "EMAXERRNO",
            Dialect::Bsd => "ELAST",
        }
    }
}

static DEFINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*define\s+(?P<name>[A-Z][A-Z0-9_]*)(?:\s+(?P<value>\S.*?))?\s*$").unwrap()
});

static UNDEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*undef\s+(?P<name>[A-Za-z0-9_]+)\s*$").unwrap());

static IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Reduces raw header text to the lines that could contain a definition.
///
/// Comments (block and line) are removed first, then blank lines and lines
/// opening with a skipped prefix for the dialect (include directives,
/// conditional-compilation guards, declarations). Surviving lines are
/// trimmed and newline-terminated.
pub fn normalize(text: &str, dialect: Dialect) -> String {
    let stripped = strip_comments(text);
    let mut out = String::new();
    for line in stripped.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if dialect
            .skipped_prefixes()
            .iter()
            .any(|p| line.starts_with(p))
        {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Removes `/* */` and `//` comments. Not string-literal aware; errno
/// headers contain no string literals outside comments.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '/' {
            match chars.peek() {
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for c in chars.by_ref() {
                        if prev == '*' && c == '/' {
                            break;
                        }
                        // Keep newlines so line structure survives long
                        // block comments.
                        if c == '\n' {
                            out.push('\n');
                        }
                        prev = c;
                    }
                }
                Some('/') => {
                    chars.next();
                    for c in chars.by_ref() {
                        if c == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                }
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Scans normalized header text, resolving defines, aliases and undefines
/// into a [`ConstantMap`].
///
/// `base` seeds the scan, modeling architecture headers that extend a
/// generic one; it is cloned, never mutated. Scan order is the only source
/// of truth: later statements win. Only names starting with `E` are
/// tracked. An alias of a name with no live binding is a hard error, as is
/// an undef of a name that could not be an errno constant.
pub fn scan_header(text: &str, dialect: Dialect, base: Option<&ConstantMap>) -> Result<ConstantMap> {
    let mut map = base.cloned().unwrap_or_default();

    for line in normalize(text, dialect).lines() {
        if let Some(caps) = UNDEF.captures(line) {
            let name = &caps["name"];
            if !name.starts_with('E') {
                return Err(Error::BogusUndef(name.to_string()));
            }
            map.remove(name);
            continue;
        }

        let Some(caps) = DEFINE.captures(line) else {
            continue;
        };
        let name = &caps["name"];
        if !name.starts_with('E') {
            continue;
        }
        let Some(value) = caps.name("value") else {
            // Bare define, e.g. a feature marker. Not a constant.
            continue;
        };
        let value = value.as_str();

        if let Some(number) = parse_number(value) {
            map.insert(name, number);
        } else if IDENT.is_match(value) {
            match map.get(value) {
                Some(bound) => map.insert(name, bound),
                None => {
                    return Err(Error::UnboundAlias {
                        name: name.to_string(),
                        target: value.to_string(),
                    })
                }
            }
        }
        // Anything else is a compound expression or macro call; its value
        // is not statically derivable from text alone, so it stays
        // untracked.
    }

    map.remove(dialect.list_end_sentinel());
    Ok(map)
}

fn parse_number(token: &str) -> Option<i64> {
    if let Some(hex) = token.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()
    } else if token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}
