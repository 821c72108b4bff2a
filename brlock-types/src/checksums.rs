// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::overrides::Overrides;

/// Algorithm assigned to every checksum given as an override.
pub static OVERRIDE_ALGORITHM: &str = "sha256";

#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct ChecksumRecord {
    algorithm: String,
    checksum: String,
}

impl ChecksumRecord {
    pub fn new(algorithm: String, checksum: String) -> Self {
        ChecksumRecord {
            algorithm,
            checksum,
        }
    }

    pub fn sha256(checksum: String) -> Self {
        ChecksumRecord::new(OVERRIDE_ALGORITHM.to_string(), checksum)
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

/// Checksums known for each source identifier.
///
/// Built once through [ChecksumIndexBuilder], read-only afterwards.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct ChecksumIndex {
    records: HashMap<String, ChecksumRecord>,
}

impl<'a> ChecksumIndex {
    pub fn get(&'a self, source: &str) -> Option<&'a ChecksumRecord> {
        self.records.get(source)
    }

    pub fn contains(&self, source: &str) -> bool {
        self.records.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&'a self) -> impl Iterator<Item = (&'a str, &'a ChecksumRecord)> {
        self.records.iter().map(|(s, r)| (s.as_str(), r))
    }

    /// Overlays explicit overrides. They replace any record found in the tree,
    /// and a later override of the same source replaces an earlier one.
    pub fn with_overrides(self, overrides: &Overrides) -> ChecksumIndex {
        let mut builder = ChecksumIndexBuilder {
            records: self.records,
        };
        for (source, checksum) in overrides.iter() {
            builder.add_record(
                source.to_string(),
                ChecksumRecord::sha256(checksum.to_string()),
            );
        }
        builder.build()
    }
}

#[derive(Debug, Default)]
pub struct ChecksumIndexBuilder {
    records: HashMap<String, ChecksumRecord>,
}

impl ChecksumIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record that was replaced, if any.
    pub fn add_record(
        &mut self,
        source: String,
        record: ChecksumRecord,
    ) -> Option<ChecksumRecord> {
        self.records.insert(source, record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn build(self) -> ChecksumIndex {
        ChecksumIndex {
            records: self.records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChecksumIndexBuilder, ChecksumRecord};
    use crate::Overrides;

    fn tree_index() -> super::ChecksumIndex {
        let mut builder = ChecksumIndexBuilder::new();
        builder.add_record(
            "zlib-1.3.1.tar.xz".to_string(),
            ChecksumRecord::new("sha256".to_string(), "38ef96b8".to_string()),
        );
        builder.add_record(
            "busybox-1.36.1.tar.bz2".to_string(),
            ChecksumRecord::new("md5".to_string(), "7e7f1d5c".to_string()),
        );
        builder.build()
    }

    #[test]
    fn later_record_replaces_earlier() {
        let mut builder = ChecksumIndexBuilder::new();
        let first = ChecksumRecord::new("md5".to_string(), "aaaa".to_string());
        let second = ChecksumRecord::new("sha1".to_string(), "bbbb".to_string());
        assert_eq!(builder.add_record("a.tar.gz".to_string(), first.clone()), None);
        assert_eq!(builder.add_record("a.tar.gz".to_string(), second.clone()), Some(first));
        let index = builder.build();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("a.tar.gz"), Some(&second));
    }

    #[test]
    fn overrides_win_over_tree() {
        let mut overrides = Overrides::new();
        overrides.insert("busybox-1.36.1.tar.bz2".to_string(), "f00d".to_string());
        overrides.insert("out-of-tree.tar.gz".to_string(), "beef".to_string());

        let index = tree_index().with_overrides(&overrides);
        assert_eq!(index.len(), 3);
        let busybox = index.get("busybox-1.36.1.tar.bz2").unwrap();
        assert_eq!(busybox.algorithm(), "sha256");
        assert_eq!(busybox.checksum(), "f00d");
        assert_eq!(index.get("out-of-tree.tar.gz").unwrap().checksum(), "beef");
        assert_eq!(index.get("zlib-1.3.1.tar.xz").unwrap().checksum(), "38ef96b8");
    }

    #[test]
    fn last_override_wins() {
        let overrides: Overrides = [
            ("x.tar.gz".to_string(), "1111".to_string()),
            ("x.tar.gz".to_string(), "2222".to_string()),
        ]
        .into_iter()
        .collect();
        let index = tree_index().with_overrides(&overrides);
        assert_eq!(index.get("x.tar.gz"), Some(&ChecksumRecord::sha256("2222".to_string())));
    }

    #[test]
    fn lookup_is_exact() {
        let index = tree_index();
        assert!(index.contains("zlib-1.3.1.tar.xz"));
        assert!(!index.contains("zlib-1.3.1.tar"));
        assert!(!index.contains("ZLIB-1.3.1.tar.xz"));
    }
}
