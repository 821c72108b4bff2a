// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use brlock_types::{
    ChecksumIndex, Lockfile, LockfileBuilder, PackageDescription, ResolvedDownload,
};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Resolves every declared download against the checksum index.
///
/// Stops at the first download without a checksum.
pub fn reconcile(description: &PackageDescription, index: &ChecksumIndex) -> Result<Lockfile> {
    let mut lockfile_builder = LockfileBuilder::new();
    for (package_name, download) in description.downloads() {
        let source = download.source();
        let uris = download.mirror_uris();
        let Some(record) = index.get(source) else {
            return Err(Error::MissingChecksum {
                identifier: source.to_string(),
            });
        };
        debug!(
            package = package_name,
            source,
            mirrors = uris.len(),
            algo = record.algorithm(),
            "resolved download"
        );
        if lockfile_builder
            .add_download(source.to_string(), ResolvedDownload::new(uris, record))
            .is_some()
        {
            // host and target variants of a package share their sources
            trace!(package = package_name, source, "replaced earlier resolution");
        }
    }
    Ok(lockfile_builder.build())
}
