//! Atom release feed parsing
//!
//! Release feeds list one `entry` per release, newest first. The release name
//! of an entry is the last path segment of its `link` href, e.g.
//! `https://github.com/owner/repo/releases/tag/v1.2.3` → `v1.2.3`.

use chrono::{DateTime, Utc};
use feed_rs::model::{Entry, FeedType};
use feed_rs::parser;
use url::Url;

use crate::version::error::VersionError;

/// A single release taken from a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Release identifier, usually a tag name
    pub name: String,
    /// Last update time of the entry, if the feed carries one
    pub updated: Option<DateTime<Utc>>,
}

impl FeedEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated: None,
        }
    }

    pub fn with_updated(mut self, updated: DateTime<Utc>) -> Self {
        self.updated = Some(updated);
        self
    }
}

impl TryFrom<Entry> for FeedEntry {
    type Error = VersionError;

    fn try_from(entry: Entry) -> Result<Self, Self::Error> {
        let name = entry
            .links
            .first()
            .and_then(|link| release_name_from_href(&link.href))
            .ok_or_else(|| {
                VersionError::MalformedFeed(format!("entry {:?} has no usable link", entry.id))
            })?;

        Ok(Self {
            name,
            updated: entry.updated,
        })
    }
}

/// Parses an Atom document into entries, keeping document order.
pub fn parse_release_feed(body: &[u8]) -> Result<Vec<FeedEntry>, VersionError> {
    let feed = parser::parse(body)?;

    if feed.feed_type != FeedType::Atom {
        return Err(VersionError::MalformedFeed(format!(
            "expected an Atom feed, got {:?}",
            feed.feed_type
        )));
    }

    feed.entries.into_iter().map(FeedEntry::try_from).collect()
}

/// Returns the last path segment of `href`, ignoring query and fragment.
///
/// Relative hrefs are accepted. Returns `None` when the last segment is empty.
pub fn release_name_from_href(href: &str) -> Option<String> {
    let path = match Url::parse(href) {
        Ok(url) => url.path().to_string(),
        Err(_) => href.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}

/// Checks that entries carrying a timestamp are ordered newest first.
pub fn is_newest_first(entries: &[FeedEntry]) -> bool {
    entries.windows(2).all(|pair| match (pair[0].updated, pair[1].updated) {
        (Some(newer), Some(older)) => newer >= older,
        _ => true,
    })
}
