//! Candidate syscall name harvest.
//!
//! The probe cannot enumerate macros on its own; it needs the universe of
//! plausible `__NR_*` spellings up front. That universe is harvested from
//! a grep of the whole kernel source for macro-number-reference tokens.
//! The corpus is handed in as text — how it was produced (git grep) is the
//! caller's collaborator concern.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// Minimum plausible harvest size. Anything lower means the tree no longer
/// spells syscall references the way we expect, and proceeding would emit
/// silently incomplete tables.
pub const MIN_CANDIDATES: usize = 380;

static NR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b__([A-Z]+_)?NR_([a-z0-9_]+)\b").unwrap());

/// One candidate symbol: an optional prefix (with its trailing underscore,
/// e.g. `ARM_`) and the lowercase syscall name.
///
/// Ordered so candidate sets iterate deterministically; the probe file and
/// therefore the whole pipeline stay byte-reproducible.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub prefix: Option<String>,
    pub name: String,
}

impl Candidate {
    /// The plain lookup spelling, e.g. `ARM_usr26` or `openat`.
    pub fn token(&self) -> String {
        format!("{}{}", self.prefix.as_deref().unwrap_or(""), self.name)
    }

    /// The macro spelling, e.g. `__ARM_NR_usr26` or `__NR_openat`.
    pub fn macro_name(&self) -> String {
        format!("__{}NR_{}", self.prefix.as_deref().unwrap_or(""), self.name)
    }
}

/// Extracts the candidate set from a corpus of kernel source text.
///
/// The pseudo-name `syscalls` (from `__NR_syscalls`, the table-size
/// sentinel) is discarded. A harvest below [`MIN_CANDIDATES`] is fatal.
pub fn harvest_candidates(corpus: &str) -> Result<BTreeSet<Candidate>> {
    let mut candidates = BTreeSet::new();
    for caps in NR_TOKEN.captures_iter(corpus) {
        let name = caps.get(2).unwrap().as_str();
        if name == "syscalls" {
            continue;
        }
        candidates.insert(Candidate {
            prefix: caps.get(1).map(|m| m.as_str().to_string()),
            name: name.to_string(),
        });
    }

    if candidates.len() < MIN_CANDIDATES {
        return Err(Error::HarvestTooSmall {
            found: candidates.len(),
            minimum: MIN_CANDIDATES,
        });
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pads a corpus with enough distinct names to clear the minimum.
    fn padded(extra: &str) -> String {
        let mut corpus = String::from(extra);
        for i in 0..MIN_CANDIDATES {
            corpus.push_str(&format!("case __NR_padcall{i}: return 0;\n"));
        }
        corpus
    }

    #[test]
    fn test_harvest_extracts_prefixed_and_plain() {
        let corpus = padded("if (nr == __NR_openat) {}\n#define __ARM_NR_usr26 0x9f0003\n");
        let candidates = harvest_candidates(&corpus).unwrap();

        assert!(candidates.contains(&Candidate {
            prefix: None,
            name: "openat".to_string(),
        }));
        assert!(candidates.contains(&Candidate {
            prefix: Some("ARM_".to_string()),
            name: "usr26".to_string(),
        }));
    }

    #[test]
    fn test_syscalls_sentinel_discarded() {
        let corpus = padded("#define __NR_syscalls 451\n");
        let candidates = harvest_candidates(&corpus).unwrap();
        assert!(!candidates.iter().any(|c| c.name == "syscalls"));
    }

    #[test]
    fn test_small_harvest_is_fatal() {
        let err = harvest_candidates("__NR_read __NR_write").unwrap_err();
        assert!(matches!(
            err,
            Error::HarvestTooSmall { found: 2, minimum: MIN_CANDIDATES }
        ));
    }

    #[test]
    fn test_candidate_spellings() {
        let plain = Candidate {
            prefix: None,
            name: "read".to_string(),
        };
        assert_eq!(plain.token(), "read");
        assert_eq!(plain.macro_name(), "__NR_read");

        let prefixed = Candidate {
            prefix: Some("ARM_".to_string()),
            name: "usr26".to_string(),
        };
        assert_eq!(prefixed.token(), "ARM_usr26");
        assert_eq!(prefixed.macro_name(), "__ARM_NR_usr26");
    }
}
