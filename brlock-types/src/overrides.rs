// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Deserializer};

use crate::util::deserialize_entries;

/// Explicit sha256 checksums for artifacts without a checksum-record file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct Overrides {
    entries: Vec<(String, String)>,
}

impl<'a> Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: String, checksum: String) {
        self.entries.push((source, checksum));
    }

    /// In insertion order. Entries inserted later take precedence.
    pub fn iter(&'a self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Overrides {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Overrides {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Overrides {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Overrides {
            entries: deserialize_entries(deserializer)?,
        })
    }
}
