// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Deserializer};

use crate::download::DownloadSpec;
use crate::util::deserialize_entries;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct PackageInfo {
    #[serde(default)]
    downloads: Vec<DownloadSpec>,
}

impl PackageInfo {
    pub fn new(downloads: Vec<DownloadSpec>) -> Self {
        PackageInfo { downloads }
    }

    pub fn downloads(&self) -> &[DownloadSpec] {
        &self.downloads
    }
}

/// Packages of a build, as reported by `make show-info`, in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct PackageDescription {
    packages: Vec<(String, PackageInfo)>,
}

impl<'a> PackageDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adding a name again replaces its info but keeps its position.
    pub fn add_package(&mut self, name: String, info: PackageInfo) {
        match self.packages.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = info,
            None => self.packages.push((name, info)),
        }
    }

    pub fn packages(&'a self) -> impl Iterator<Item = (&'a str, &'a PackageInfo)> {
        self.packages.iter().map(|(n, p)| (n.as_str(), p))
    }

    pub fn package(&'a self, name: &str) -> Option<&'a PackageInfo> {
        self.packages
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// Every declared download with the name of its package.
    pub fn downloads(&'a self) -> impl Iterator<Item = (&'a str, &'a DownloadSpec)> {
        self.packages()
            .flat_map(|(name, info)| info.downloads().iter().map(move |d| (name, d)))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<'de> Deserialize<'de> for PackageDescription {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(PackageDescription {
            packages: deserialize_entries(deserializer)?,
        })
    }
}
