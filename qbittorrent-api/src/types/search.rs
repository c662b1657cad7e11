use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::join_pipe;

/// Which plugins a search runs on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchPlugins {
    All,
    #[default]
    Enabled,
    Names(Vec<String>),
}

impl fmt::Display for SearchPlugins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Enabled => f.write_str("enabled"),
            Self::Names(names) => f.write_str(&join_pipe(names)),
        }
    }
}

/// Arguments for [`Search::start`](crate::search::Search::start).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub pattern: String,
    pub plugins: SearchPlugins,
    /// A plugin category id, or `all`.
    pub category: String,
}

impl SearchOptions {
    /// Search `pattern` on the enabled plugins, in every category.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            plugins: SearchPlugins::default(),
            category: "all".to_owned(),
        }
    }

    #[must_use]
    pub fn plugins(mut self, plugins: SearchPlugins) -> Self {
        self.plugins = plugins;
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchJob {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatus {
    pub id: i64,
    pub status: SearchState,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: Vec<SearchResult>,
    pub status: SearchState,
    pub total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResult {
    pub descr_link: String,
    pub file_name: String,
    /// Bytes, `-1` when the site does not say.
    pub file_size: i64,
    pub file_url: String,
    pub nb_leechers: i64,
    pub nb_seeders: i64,
    pub site_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchPlugin {
    pub enabled: bool,
    pub full_name: String,
    pub name: String,
    pub supported_categories: Vec<PluginCategory>,
    pub url: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginCategory {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_selection_encoding() {
        assert_eq!(SearchPlugins::All.to_string(), "all");
        assert_eq!(SearchPlugins::Enabled.to_string(), "enabled");
        assert_eq!(
            SearchPlugins::Names(vec!["legittorrents".into(), "piratebay".into()]).to_string(),
            "legittorrents|piratebay"
        );
    }

    #[test]
    fn options_default_to_enabled_plugins_and_all_categories() {
        let opts = SearchOptions::new("debian");
        assert_eq!(opts.plugins, SearchPlugins::Enabled);
        assert_eq!(opts.category, "all");
    }

    #[test]
    fn results_decode() {
        let results: SearchResults = serde_json::from_str(
            r#"{"results":[{"fileName":"debian-12.iso","fileSize":-1,"nbSeeders":40,
                "fileUrl":"magnet:?xt=1","siteUrl":"http://x","descrLink":"http://x/1",
                "nbLeechers":2}],"status":"Running","total":1}"#,
        )
        .unwrap();
        assert_eq!(results.status, SearchState::Running);
        assert_eq!(results.results[0].nb_seeders, 40);
        assert_eq!(results.results[0].file_size, -1);
    }
}
