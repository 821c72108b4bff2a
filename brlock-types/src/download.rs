// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use serde::Deserialize;

/// A download URI, optionally qualified with a transport scheme, like
/// `git+https://example.com/repo.git` or `http|urlencode+http://example.com/dl`.
///
/// # Example
/// ```
/// # use brlock_types::DownloadUri;
/// let uri = DownloadUri::parse("git+https://example.com/repo.git");
/// assert!(uri.is_http());
/// assert_eq!(
///     uri.mirror_uri("foo-1.0.tar.gz").as_deref(),
///     Some("https://example.com/repo.git/foo-1.0.tar.gz"),
/// );
///
/// let svn = DownloadUri::parse("svn://example.com/repo");
/// assert_eq!(svn.mirror_uri("foo-1.0.tar.gz"), None);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DownloadUri<'a> {
    scheme: Option<&'a str>,
    reference: &'a str,
}

impl<'a> DownloadUri<'a> {
    pub fn parse(uri: &'a str) -> Self {
        match uri.split_once('+') {
            Some((scheme, reference)) => DownloadUri {
                scheme: Some(scheme),
                reference,
            },
            None => DownloadUri {
                scheme: None,
                reference: uri,
            },
        }
    }

    /// Everything before the first `+`.
    pub fn scheme(&self) -> Option<&'a str> {
        self.scheme
    }

    /// Everything after the first `+`, or the whole URI.
    pub fn reference(&self) -> &'a str {
        self.reference
    }

    /// Both http and https, with or without `|urlencode`.
    pub fn is_http(&self) -> bool {
        self.reference.starts_with("http")
    }

    /// Where `source` can be fetched from directly, if it can be.
    pub fn mirror_uri(&self, source: &str) -> Option<String> {
        self.is_http().then(|| format!("{}/{}", self.reference, source))
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct DownloadSpec {
    source: String,
    uris: Vec<String>,
}

impl<'a> DownloadSpec {
    pub fn new(source: String, uris: Vec<String>) -> Self {
        DownloadSpec { source, uris }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn uris(&self) -> &[String] {
        &self.uris
    }

    pub fn parsed_uris(&'a self) -> impl Iterator<Item = DownloadUri<'a>> {
        self.uris.iter().map(|u| DownloadUri::parse(u))
    }

    /// Candidate mirrors in declaration order. URIs that are not HTTP(S) are left out.
    pub fn mirror_uris(&self) -> Vec<String> {
        self.parsed_uris()
            .filter_map(|u| u.mirror_uri(&self.source))
            .collect()
    }
}
