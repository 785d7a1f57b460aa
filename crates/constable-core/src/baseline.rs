//! Completeness validation against a required baseline.
//!
//! The baseline is pure configuration: a set of names that must exist in
//! any valid resolved mapping for a platform family. It says nothing about
//! values — it is the oracle that catches a scan silently losing constants
//! when a kernel tree's layout or dialect drifts.

use std::collections::BTreeSet;

use crate::constmap::ConstantMap;
use crate::error::Error;
use crate::Result;

/// An immutable set of constant names that must be present post-resolution.
#[derive(Debug, Clone, Default)]
pub struct BaselineSet {
    names: BTreeSet<&'static str>,
}

impl BaselineSet {
    /// Builds a baseline from configuration data.
    pub fn new(names: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// An empty baseline: validation reduces to the non-empty check.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Checks that `map` is a non-empty superset of this baseline.
    ///
    /// On failure the error carries exactly the missing names, sorted, so
    /// the report is actionable and deterministic. `label` names the
    /// architecture or platform being validated.
    pub fn validate(&self, label: &str, map: &ConstantMap) -> Result<()> {
        if map.is_empty() {
            return Err(Error::EmptyResult(label.to_string()));
        }

        let missing: Vec<String> = self
            .names
            .iter()
            .filter(|name| !map.contains(name))
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingBaseline {
                arch: label.to_string(),
                missing,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(names: &[(&str, i64)]) -> ConstantMap {
        names
            .iter()
            .map(|(n, v)| (n.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_superset_passes() {
        let baseline = BaselineSet::new(["EPERM", "ENOENT"]);
        let map = map_of(&[("EPERM", 1), ("ENOENT", 2), ("EIO", 5)]);
        baseline.validate("x86_64", &map).unwrap();
    }

    #[test]
    fn test_missing_names_reported_exactly() {
        let baseline = BaselineSet::new(["EPERM", "ENOENT"]);
        let map = map_of(&[("EPERM", 1), ("EIO", 5)]);

        let err = baseline.validate("mips", &map).unwrap_err();
        match err {
            Error::MissingBaseline { arch, missing } => {
                assert_eq!(arch, "mips");
                assert_eq!(missing, vec!["ENOENT".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_map_is_fatal_even_with_empty_baseline() {
        let err = BaselineSet::empty()
            .validate("sparc64", &ConstantMap::new())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyResult(_)));
    }
}
