//! Reader for the kernel's tab-delimited syscall tables.
//!
//! Rows look like `0<TAB>common<TAB>read<TAB>sys_read`; everything past
//! the third column is entry-point detail we do not need. Rows are kept
//! only when their ABI tag is in the accepted set for the architecture.

use crate::error::Error;
use crate::Result;

/// Parses a syscall table, keeping rows whose ABI tag is in `abis`.
///
/// Blank lines and `#` comment lines are skipped. Numbers are plain
/// decimal. Duplicate names are NOT collapsed here; the merge stage
/// decides precedence.
pub fn parse_table(text: &str, abis: &[&str]) -> Result<Vec<(String, i64)>> {
    let mut rows = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = || Error::MalformedTableRow {
            line: idx + 1,
            text: line.to_string(),
        };

        let mut fields = line.split('\t');
        let nr = fields.next().ok_or_else(malformed)?;
        let abi = fields.next().ok_or_else(malformed)?;
        let name = fields.next().ok_or_else(malformed)?;

        if !abis.contains(&abi) {
            continue;
        }

        let nr: i64 = nr.trim().parse().map_err(|_| malformed())?;
        rows.push((name.trim().to_string(), nr));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
# 64-bit system call numbers and entry vectors
#
# The format is:
# <number> <abi> <name> <entry point>
0\tcommon\tread\tsys_read
1\tcommon\twrite\tsys_write
2\t64\topen\tsys_open

3\t32\topen32\tcompat_sys_open
";

    #[test]
    fn test_abi_filter() {
        let rows = parse_table(TABLE, &["common", "64"]).unwrap();
        assert_eq!(
            rows,
            vec![
                ("read".to_string(), 0),
                ("write".to_string(), 1),
                ("open".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_other_abi_only() {
        let rows = parse_table(TABLE, &["32"]).unwrap();
        assert_eq!(rows, vec![("open32".to_string(), 3)]);
    }

    #[test]
    fn test_no_dedup_here() {
        let text = "10\tcommon\tmmap\tsys_mmap_old\n10\t64\tmmap\tsys_mmap\n";
        let rows = parse_table(text, &["common", "64"]).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_malformed_row() {
        let err = parse_table("5 common read\n", &["common"]).unwrap_err();
        assert!(matches!(err, Error::MalformedTableRow { line: 1, .. }));
    }

    #[test]
    fn test_non_decimal_number() {
        let err = parse_table("0x10\tcommon\tread\tsys_read\n", &["common"]).unwrap_err();
        assert!(matches!(err, Error::MalformedTableRow { .. }));
    }
}
