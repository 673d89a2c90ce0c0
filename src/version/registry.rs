//! Release feed trait for fetching a project's releases from a hosting service

#[cfg(test)]
use mockall::automock;

use crate::version::error::VersionError;
use crate::version::feed::FeedEntry;
use crate::version::types::Project;

/// Trait for fetching the release feed of a hosting service
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseFeed: Send + Sync {
    /// Returns true if source URLs on `host` belong to this service
    fn matches_host(&self, host: &str) -> bool;

    /// Returns the feed URL for `project`
    fn feed_url(&self, project: &Project) -> String;

    /// Fetches the releases of a project
    ///
    /// # Returns
    /// * `Ok(Vec<FeedEntry>)` - Releases in feed order, newest first
    /// * `Err(VersionError)` - If the fetch or the feed parse fails
    async fn fetch_releases(&self, project: &Project) -> Result<Vec<FeedEntry>, VersionError>;
}
