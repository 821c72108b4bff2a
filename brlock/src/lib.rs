// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub use brlock_types as types;
pub use brlock_types::{
    ChecksumIndex, ChecksumRecord, DownloadSpec, Lockfile, Overrides, PackageDescription,
    PackageInfo, ResolvedDownload,
};

pub use crate::error::{Error, Result};
pub use crate::index::{find_hash_files, index_tree, HASH_FILE_EXTENSION};
pub use crate::parsers::{hash_line, HashLine};
pub use crate::reconcile::reconcile;
use crate::ser::AsciiPrettyFormatter;

mod error;
mod index;
mod parsers;
mod reconcile;
mod ser;

/// Where checksums come from.
#[derive(Debug, Default, Clone)]
pub struct LockOptions {
    root: Option<PathBuf>,
    overrides: Overrides,
}

impl LockOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree to scan for `.hash` files. Without one, only overrides are known.
    pub fn root<P>(&mut self, root: P) -> &mut Self
    where
        P: Into<PathBuf>,
    {
        self.root = Some(root.into());
        self
    }

    pub fn overrides(&mut self, overrides: Overrides) -> &mut Self {
        self.overrides = overrides;
        self
    }

    /// Index of the tree, with overrides applied on top.
    pub fn checksum_index(&self) -> Result<ChecksumIndex> {
        let index = match &self.root {
            Some(root) => index_tree(root)?,
            None => ChecksumIndex::default(),
        };
        Ok(index.with_overrides(&self.overrides))
    }
}

pub fn lock(description: &PackageDescription, options: &LockOptions) -> Result<Lockfile> {
    let index = options.checksum_index()?;
    reconcile(description, &index)
}

fn read_workspace_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| Error::IoInWorkspace(e, path.to_path_buf()))
}

/// Slower than [description_from_slice], serde_json reads unbuffered input byte by byte.
pub fn description_from_reader<R>(read: R) -> Result<PackageDescription>
where
    R: io::Read,
{
    Ok(serde_json::from_reader(read)?)
}

pub fn description_from_slice(v: &[u8]) -> Result<PackageDescription> {
    Ok(serde_json::from_slice(v)?)
}

pub fn description_from_str(v: &str) -> Result<PackageDescription> {
    Ok(serde_json::from_str(v)?)
}

pub fn read_description<P>(path: P) -> Result<PackageDescription>
where
    P: AsRef<Path>,
{
    description_from_slice(&read_workspace_file(path.as_ref())?)
}

pub fn overrides_from_str(v: &str) -> Result<Overrides> {
    Ok(serde_json::from_str(v)?)
}

pub fn read_overrides<P>(path: P) -> Result<Overrides>
where
    P: AsRef<Path>,
{
    Ok(serde_json::from_slice(&read_workspace_file(path.as_ref())?)?)
}

/// Pretty-printed with two-space indentation, keys sorted, no trailing newline.
/// Non-ASCII characters are `\u` escaped.
pub fn lockfile_to_string(lockfile: &Lockfile) -> Result<String> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, AsciiPrettyFormatter::new());
    lockfile.serialize(&mut ser)?;
    Ok(String::from_utf8(out).map_err(|e| e.utf8_error())?)
}

pub fn lockfile_from_str(v: &str) -> Result<Lockfile> {
    Ok(serde_json::from_str(v)?)
}
