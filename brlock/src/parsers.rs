// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use brlock_types::ChecksumRecord;
use nom::bytes::complete::{take_while, take_while1};
use nom::combinator::eof;
use nom::{IResult, Parser};

/// One `<algorithm> <checksum> <source>` line of a `.hash` file.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct HashLine<'a> {
    pub algorithm: &'a str,
    pub checksum: &'a str,
    pub source: &'a str,
}

impl HashLine<'_> {
    pub fn to_record(&self) -> ChecksumRecord {
        ChecksumRecord::new(self.algorithm.to_string(), self.checksum.to_string())
    }
}

fn algorithm(input: &str) -> IResult<&str, &str, ()> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_').parse(input)
}

fn checksum(input: &str) -> IResult<&str, &str, ()> {
    take_while1(|c: char| c.is_ascii_alphanumeric()).parse(input)
}

fn source(input: &str) -> IResult<&str, &str, ()> {
    take_while1(|c: char| !c.is_whitespace()).parse(input)
}

fn whitespace1(input: &str) -> IResult<&str, &str, ()> {
    take_while1(char::is_whitespace).parse(input)
}

fn whitespace0(input: &str) -> IResult<&str, &str, ()> {
    take_while(char::is_whitespace).parse(input)
}

/// Lines that don't have exactly this shape (comments, blank lines, indented
/// or extra tokens) are not records and yield [None].
pub fn hash_line(input: &str) -> Option<HashLine<'_>> {
    let (_, (algorithm, _, checksum, _, source, _, _)) = (
        algorithm,
        whitespace1,
        checksum,
        whitespace1,
        source,
        whitespace0,
        eof,
    )
        .parse(input)
        .ok()?;
    Some(HashLine {
        algorithm,
        checksum,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{hash_line, HashLine};

    #[test]
    fn buildroot_line() {
        assert_eq!(
            hash_line("sha256  38ef96b8dfe510d42707d9c781877914792541133e1870841463bfa73f883e32  zlib-1.3.1.tar.xz"),
            Some(HashLine {
                algorithm: "sha256",
                checksum: "38ef96b8dfe510d42707d9c781877914792541133e1870841463bfa73f883e32",
                source: "zlib-1.3.1.tar.xz",
            })
        );
    }

    #[test]
    fn trailing_whitespace() {
        assert_eq!(
            hash_line("md5\t0123abcd\tfoo.tar.gz \r\n").map(|l| l.source),
            Some("foo.tar.gz")
        );
    }

    #[test]
    fn source_may_contain_anything_but_whitespace() {
        assert_eq!(
            hash_line("sha1 abc123 foo-bar_1.0+git~rc1.tar.gz").map(|l| l.source),
            Some("foo-bar_1.0+git~rc1.tar.gz")
        );
        assert_eq!(
            hash_line("sha512 ff00 LICENSE").map(|l| l.algorithm),
            Some("sha512")
        );
    }

    #[test]
    fn not_records() {
        for line in [
            "",
            "   ",
            "# Locally calculated",
            "# From https://zlib.net/zlib-1.3.1.tar.xz.asc",
            " sha256 abcd foo.tar.gz",
            "sha256 abcd",
            "sha256 abcd foo.tar.gz extra",
            "sha256 ab-cd foo.tar.gz",
            "sha-256 abcd foo.tar.gz",
            "sha256abcdfoo.tar.gz",
        ] {
            assert_eq!(hash_line(line), None, "{line:?}");
        }
    }

    #[test]
    fn record_from_line() {
        let record = hash_line("sha256 abcd foo.tar.gz").unwrap().to_record();
        assert_eq!(record.algorithm(), "sha256");
        assert_eq!(record.checksum(), "abcd");
    }
}
