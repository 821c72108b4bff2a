// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::checksums::ChecksumRecord;

/// Field order matches the sorted order of the keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDownload {
    algo: String,
    checksum: String,
    uris: Vec<String>,
}

impl ResolvedDownload {
    pub fn new(uris: Vec<String>, record: &ChecksumRecord) -> Self {
        ResolvedDownload {
            algo: record.algorithm().to_string(),
            checksum: record.checksum().to_string(),
            uris,
        }
    }

    pub fn uris(&self) -> &[String] {
        &self.uris
    }

    pub fn algo(&self) -> &str {
        &self.algo
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}

/// Resolved downloads by source identifier, sorted.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Lockfile {
    downloads: BTreeMap<String, ResolvedDownload>,
}

impl<'a> Lockfile {
    pub fn get(&'a self, source: &str) -> Option<&'a ResolvedDownload> {
        self.downloads.get(source)
    }

    pub fn iter(&'a self) -> impl Iterator<Item = (&'a str, &'a ResolvedDownload)> {
        self.downloads.iter().map(|(s, d)| (s.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.downloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.downloads.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct LockfileBuilder {
    downloads: BTreeMap<String, ResolvedDownload>,
}

impl LockfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A later download for the same source replaces the earlier one, which is returned.
    pub fn add_download(
        &mut self,
        source: String,
        download: ResolvedDownload,
    ) -> Option<ResolvedDownload> {
        self.downloads.insert(source, download)
    }

    pub fn build(self) -> Lockfile {
        Lockfile {
            downloads: self.downloads,
        }
    }
}
