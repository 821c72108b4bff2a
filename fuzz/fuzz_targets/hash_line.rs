// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Some(line) = brlock::hash_line(data) {
        assert!(!line.algorithm.is_empty());
        assert!(!line.checksum.is_empty());
        assert!(!line.source.chars().any(char::is_whitespace));
    }
});
