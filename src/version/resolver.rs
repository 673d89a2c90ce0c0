//! Latest release resolution from a hosted release feed
//!
//! The pipeline runs over the feed in order, newest entry first:
//! derive a release name per entry, extract a version with the caller's
//! pattern, drop unstable versions unless allowed, then pick the first one.

use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;

use crate::reporter::Reporter;
use crate::version::error::VersionError;
use crate::version::feed::is_newest_first;
use crate::version::registry::ReleaseFeed;
use crate::version::source::VersionSource;
use crate::version::stability::is_stable;
use crate::version::types::{Project, ResolutionPolicy};

/// Resolves the latest version of projects hosted behind a [`ReleaseFeed`]
pub struct FeedResolver {
    feed: Arc<dyn ReleaseFeed>,
    reporter: Arc<dyn Reporter>,
}

impl FeedResolver {
    pub fn new(feed: Arc<dyn ReleaseFeed>, reporter: Arc<dyn Reporter>) -> Self {
        Self { feed, reporter }
    }
}

#[async_trait::async_trait]
impl VersionSource for FeedResolver {
    fn name(&self) -> &str {
        "release feed"
    }

    async fn resolve(
        &self,
        url: &Url,
        policy: &ResolutionPolicy,
    ) -> Result<Option<String>, VersionError> {
        let Some(host) = url.host_str() else {
            return Ok(None);
        };
        if !self.feed.matches_host(host) {
            debug!("Host {} has no release feed", host);
            return Ok(None);
        }

        let project = Project::from_url(url)
            .ok_or_else(|| VersionError::InvalidSourceUrl(url.to_string()))?;

        self.reporter
            .info(&format!("fetch {}", self.feed.feed_url(&project)));
        let entries = self.feed.fetch_releases(&project).await?;

        if !is_newest_first(&entries) {
            warn!("Release feed of {} is not ordered newest first", project);
            self.reporter.warn(&format!(
                "The release feed of {project} is not ordered newest first, the selected version may not be the latest"
            ));
        }

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        select_version(&names, policy, self.reporter.as_ref())
    }
}

/// Picks the newest acceptable version from release names ordered newest first.
///
/// Fails with [`VersionError::NoReleaseFound`] when the pattern extracts no
/// version at all. Returns `Ok(None)` when versions exist but none is stable
/// and unstable versions are not allowed.
pub fn select_version<S: AsRef<str>>(
    names: &[S],
    policy: &ResolutionPolicy,
    reporter: &dyn Reporter,
) -> Result<Option<String>, VersionError> {
    let extracted: Vec<String> = names
        .iter()
        .filter_map(|name| policy.pattern.extract(name.as_ref()))
        .collect();

    let Some(newest) = extracted.first() else {
        return Err(VersionError::NoReleaseFound);
    };

    if !policy.unstable_version && !is_stable(newest) {
        reporter.info(&format!(
            "Found an unstable version {newest}, which is being ignored. To update to unstable version, please use '--unstable-version'"
        ));
    }

    let selected = extracted
        .iter()
        .find(|version| policy.unstable_version || is_stable(version))
        .cloned();
    debug!(
        "Selected {:?} out of {} extracted versions",
        selected,
        extracted.len()
    );

    Ok(selected)
}
