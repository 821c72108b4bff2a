// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

pub use crate::checksums::{
    ChecksumIndex, ChecksumIndexBuilder, ChecksumRecord, OVERRIDE_ALGORITHM,
};
pub use crate::download::{DownloadSpec, DownloadUri};
pub use crate::lockfile::{Lockfile, LockfileBuilder, ResolvedDownload};
pub use crate::overrides::Overrides;
pub use crate::package::{PackageDescription, PackageInfo};

mod checksums;
mod download;
mod lockfile;
mod overrides;
mod package;
mod util;
