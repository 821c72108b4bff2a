// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

#![no_main]

use libfuzzer_sys::fuzz_target;

use brlock_types::{ChecksumIndex, Overrides, PackageDescription};

fuzz_target!(|data: (PackageDescription, ChecksumIndex, Overrides)| {
    let (description, index, overrides) = data;
    let index = index.with_overrides(&overrides);
    match brlock::reconcile(&description, &index) {
        Ok(lockfile) => {
            for (source, download) in lockfile.iter() {
                assert!(index.contains(source));
                assert!(download.uris().iter().all(|u| u.starts_with("http")));
            }
        }
        Err(brlock::Error::MissingChecksum { identifier }) => {
            assert!(!index.contains(&identifier));
        }
        Err(e) => panic!("{e:?}"),
    }
});
