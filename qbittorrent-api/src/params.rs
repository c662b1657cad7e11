//! Parameter encoding shared by the endpoint modules.
//!
//! The WebUI takes every argument as a string. Lists are flattened with a
//! per-parameter delimiter:
//!
//! | Parameter kind                      | Delimiter |
//! |-------------------------------------|-----------|
//! | torrent hashes, peers, ids, plugins | `\|`      |
//! | tags                                | `,`       |
//! | urls, category names                | `\n`      |
//!
//! Booleans are the literals `true` / `false`.

use std::fmt;

/// Selects the torrents an operation applies to.
///
/// ```
/// use qbittorrent_api::Hashes;
///
/// assert_eq!(Hashes::from(["8c21", "a1f0"]).to_string(), "8c21|a1f0");
/// assert_eq!(Hashes::All.to_string(), "all");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hashes {
    /// Every torrent in the session.
    All,
    /// The listed info-hashes, in order.
    List(Vec<String>),
}

impl Hashes {
    /// Build a selector from a list plus an "apply to all" flag.
    ///
    /// When `all` is set the list is ignored.
    pub fn new<I, S>(hashes: I, all: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if all {
            Self::All
        } else {
            Self::List(hashes.into_iter().map(Into::into).collect())
        }
    }

    /// A single torrent.
    pub fn one(hash: impl Into<String>) -> Self {
        Self::List(vec![hash.into()])
    }
}

impl fmt::Display for Hashes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::List(list) => f.write_str(&join_pipe(list)),
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for Hashes {
    fn from(list: Vec<S>) -> Self {
        Self::new(list, false)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Hashes {
    fn from(list: [S; N]) -> Self {
        Self::new(list, false)
    }
}

impl From<&str> for Hashes {
    fn from(hash: &str) -> Self {
        Self::one(hash)
    }
}

impl<S: Into<String>> FromIterator<S> for Hashes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter, false)
    }
}

/// Per-torrent share ratio limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioLimit {
    /// Follow the global limit (`-2`).
    Global,
    /// No limit (`-1`).
    Unlimited,
    /// Stop seeding at this ratio.
    Ratio(f64),
}

impl fmt::Display for RatioLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("-2"),
            Self::Unlimited => f.write_str("-1"),
            Self::Ratio(ratio) => write!(f, "{ratio}"),
        }
    }
}

/// Per-torrent seeding time limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingTimeLimit {
    /// Follow the global limit (`-2`).
    Global,
    /// No limit (`-1`).
    Unlimited,
    /// Stop seeding after this many minutes.
    Minutes(i64),
}

impl fmt::Display for SeedingTimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("-2"),
            Self::Unlimited => f.write_str("-1"),
            Self::Minutes(minutes) => write!(f, "{minutes}"),
        }
    }
}

pub(crate) fn join_pipe<S: AsRef<str>>(items: &[S]) -> String {
    join(items, "|")
}

pub(crate) fn join_comma<S: AsRef<str>>(items: &[S]) -> String {
    join(items, ",")
}

pub(crate) fn join_lines<S: AsRef<str>>(items: &[S]) -> String {
    join(items, "\n")
}

pub(crate) fn join_numbers(items: &[i64]) -> String {
    items
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

pub(crate) fn flag(value: bool) -> String {
    if value { "true" } else { "false" }.to_owned()
}

fn join<S: AsRef<str>>(items: &[S], sep: &str) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_list_keeps_order() {
        let hashes = Hashes::new(["c", "a", "b"], false);
        assert_eq!(hashes.to_string(), "c|a|b");
    }

    #[test]
    fn all_flag_overrides_list() {
        let hashes = Hashes::new(["c", "a", "b"], true);
        assert_eq!(hashes, Hashes::All);
        assert_eq!(hashes.to_string(), "all");
    }

    #[test]
    fn empty_list_is_empty_string() {
        let hashes = Hashes::new(Vec::<String>::new(), false);
        assert_eq!(hashes.to_string(), "");
    }

    #[test]
    fn single_hash_has_no_delimiter() {
        assert_eq!(Hashes::from("abc").to_string(), "abc");
    }

    #[test]
    fn share_limit_sentinels() {
        assert_eq!(RatioLimit::Unlimited.to_string(), "-1");
        assert_eq!(RatioLimit::Global.to_string(), "-2");
        assert_eq!(RatioLimit::Ratio(1.5).to_string(), "1.5");
        assert_eq!(RatioLimit::Ratio(2.0).to_string(), "2");
        assert_eq!(SeedingTimeLimit::Unlimited.to_string(), "-1");
        assert_eq!(SeedingTimeLimit::Global.to_string(), "-2");
        assert_eq!(SeedingTimeLimit::Minutes(90).to_string(), "90");
    }

    #[test]
    fn delimiters() {
        assert_eq!(join_comma(&["movies", "4k"]), "movies,4k");
        assert_eq!(join_lines(&["http://a", "http://b"]), "http://a\nhttp://b");
        assert_eq!(join_numbers(&[0, 3, 7]), "0|3|7");
        assert_eq!(flag(true), "true");
        assert_eq!(flag(false), "false");
    }
}
