// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use std::{io, path, str};

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(
        "No .hash file found for \"{identifier}\". If this is an out-of-tree file,\n\
         you need to provide its hash explicitly, like so:\n\n  \
         extraHashes = {{ \"{identifier}\" = \"<sha256 from nix-prefetch-url>\"; }}"
    )]
    MissingChecksum { identifier: String },

    #[error("Checksum root {0:?} is not a directory")]
    NotADirectory(path::PathBuf),

    #[error("I/O error: {0:?}")]
    IoError(#[from] io::Error),

    #[error("I/O error trying to read {1:?}: {0:?}")]
    IoInWorkspace(io::Error, path::PathBuf),

    #[error("Walkdir error: {0:?}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("JSON parsing error: {0:?}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("UTF-8 parsing error: {0:?}")]
    Utf8Error(#[from] str::Utf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
