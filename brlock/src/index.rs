// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use brlock_types::{ChecksumIndex, ChecksumIndexBuilder};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::parsers::hash_line;

pub static HASH_FILE_EXTENSION: &str = "hash";

fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

fn is_hidden(entry: &DirEntry) -> bool {
    is_hidden_name(entry.file_name())
}

fn has_hash_extension(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == HASH_FILE_EXTENSION)
}

fn is_hash_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && has_hash_extension(entry.path())
}

/// Dangling links, link loops and unreadable directories below the root are
/// not fatal unless they would have been read as a `.hash` file.
fn is_skippable(err: &walkdir::Error) -> bool {
    if err.depth() == 0 {
        return false;
    }
    match err.path() {
        Some(path) => {
            !has_hash_extension(path) || path.file_name().is_some_and(is_hidden_name)
        }
        None => true,
    }
}

/// Paths of all `.hash` files under `root`, sorted.
///
/// Hidden files and directories are skipped, symlinks are followed. Errors on
/// the root itself, or on a `.hash` entry, are returned.
pub fn find_hash_files<P>(root: P) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
{
    let root = root.as_ref();
    let metadata = fs::metadata(root).map_err(|e| Error::IoInWorkspace(e, root.to_path_buf()))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut hash_files = Vec::new();
    for de_result in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let de = match de_result {
            Ok(de) => de,
            Err(err) if is_skippable(&err) => {
                debug!(path = ?err.path(), error = %err, "skipped unreadable entry");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if is_hash_file(&de) {
            hash_files.push(de.into_path());
        }
    }
    hash_files.sort();
    Ok(hash_files)
}

/// Adds every record of one `.hash` file. Returns how many lines were records.
pub fn index_hash_file(builder: &mut ChecksumIndexBuilder, contents: &str) -> usize {
    let mut records = 0;
    for line in contents.lines() {
        if let Some(hash_line) = hash_line(line) {
            builder.add_record(hash_line.source.to_string(), hash_line.to_record());
            records += 1;
        }
    }
    records
}

/// Builds the checksum index from every `.hash` file under `root`.
///
/// When several lines name the same source, the one read last wins: files are
/// read in sorted path order, lines top to bottom.
pub fn index_tree<P>(root: P) -> Result<ChecksumIndex>
where
    P: AsRef<Path>,
{
    let root = root.as_ref();
    let mut builder = ChecksumIndexBuilder::new();
    let hash_files = find_hash_files(root)?;
    for path in &hash_files {
        let contents =
            fs::read_to_string(path).map_err(|e| Error::IoInWorkspace(e, path.clone()))?;
        let records = index_hash_file(&mut builder, &contents);
        debug!(path = %path.display(), records, "indexed hash file");
    }
    info!(
        root = %root.display(),
        files = hash_files.len(),
        sources = builder.len(),
        "indexed checksums"
    );
    Ok(builder.build())
}
