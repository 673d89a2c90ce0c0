//! GitHub releases Atom feed implementation

use crate::version::error::VersionError;
use crate::version::feed::{FeedEntry, parse_release_feed};
use crate::version::registry::ReleaseFeed;
use crate::version::types::Project;
use tracing::{debug, warn};

/// Default base URL for GitHub
const DEFAULT_BASE_URL: &str = "https://github.com";

/// Host of source URLs served by GitHub
const DEFAULT_HOST: &str = "github.com";

/// Release feed implementation for `https://github.com/{owner}/{repo}/releases.atom`
pub struct GitHubReleaseFeed {
    client: reqwest::Client,
    base_url: String,
    host: String,
}

impl GitHubReleaseFeed {
    /// Creates a new GitHubReleaseFeed with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("upstream-version")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Serves source URLs on `host` instead of github.com
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }
}

impl Default for GitHubReleaseFeed {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl ReleaseFeed for GitHubReleaseFeed {
    fn matches_host(&self, host: &str) -> bool {
        host.eq_ignore_ascii_case(&self.host)
    }

    fn feed_url(&self, project: &Project) -> String {
        format!(
            "{}/{}/{}/releases.atom",
            self.base_url, project.owner, project.repo
        )
    }

    async fn fetch_releases(&self, project: &Project) -> Result<Vec<FeedEntry>, VersionError> {
        let url = self.feed_url(project);
        debug!("Fetching release feed {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/atom+xml")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(VersionError::NotFound(project.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(VersionError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub returned status {}: {}", status, url);
            return Err(VersionError::UnexpectedStatus { status, url });
        }

        let body = response.bytes().await?;

        let entries = parse_release_feed(&body).inspect_err(|e| {
            warn!("Failed to parse GitHub release feed {}: {}", url, e);
        })?;
        debug!("Release feed {} has {} entries", url, entries.len());

        Ok(entries)
    }
}
