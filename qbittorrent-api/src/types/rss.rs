use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A node of the RSS tree returned by `/rss/items`.
///
/// Folders are plain maps from child name to child item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RssItem {
    Feed(RssFeed),
    Folder(HashMap<String, RssItem>),
}

impl RssItem {
    pub fn as_feed(&self) -> Option<&RssFeed> {
        match self {
            Self::Feed(feed) => Some(feed),
            Self::Folder(_) => None,
        }
    }
}

/// A subscribed feed. `articles` and the status fields are only filled when
/// the items were fetched with data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RssFeed {
    pub uid: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub last_build_date: String,
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub has_error: bool,
    #[serde(default)]
    pub articles: Vec<RssArticle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RssArticle {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub date: String,
    pub description: String,
    pub link: String,
    #[serde(rename = "torrentURL")]
    pub torrent_url: String,
    pub is_read: bool,
}

/// An auto-downloading rule, sent as the `ruleDef` JSON of `/rss/setRule`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RssRule {
    pub enabled: bool,
    pub must_contain: String,
    pub must_not_contain: String,
    pub use_regex: bool,
    pub episode_filter: String,
    pub smart_filter: bool,
    pub previously_matched_episodes: Vec<String>,
    /// Feed URLs the rule applies to.
    pub affected_feeds: Vec<String>,
    pub ignore_days: i64,
    pub last_match: String,
    /// `None` follows the global setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_paused: Option<bool>,
    pub assigned_category: String,
    pub save_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tree_decodes() {
        let items: HashMap<String, RssItem> = serde_json::from_str(
            r#"{
                "News": {
                    "LWN": {"uid": "{a1}", "url": "https://lwn.net/headlines/rss"}
                },
                "Distro": {"uid": "{b2}", "url": "https://example.org/feed",
                           "articles": [{"id": "1", "title": "x", "torrentURL": "http://t"}]}
            }"#,
        )
        .unwrap();
        let RssItem::Folder(news) = &items["News"] else {
            panic!("expected folder");
        };
        assert_eq!(news["LWN"].as_feed().unwrap().uid, "{a1}");
        let distro = items["Distro"].as_feed().unwrap();
        assert_eq!(distro.articles[0].torrent_url, "http://t");
    }

    #[test]
    fn empty_folder_is_a_folder() {
        let item: RssItem = serde_json::from_str("{}").unwrap();
        assert_eq!(item, RssItem::Folder(HashMap::new()));
    }

    #[test]
    fn rule_serializes_camel_case() {
        let rule = RssRule {
            enabled: true,
            must_contain: "1080p".into(),
            affected_feeds: vec!["https://example.org/feed".into()],
            ..RssRule::default()
        };
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["mustContain"], "1080p");
        assert_eq!(value["affectedFeeds"][0], "https://example.org/feed");
        assert!(value.get("addPaused").is_none());
    }
}
