//! Version sources tried in order until one knows the project

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::config::SourcesConfig;
use crate::reporter::Reporter;
use crate::version::error::VersionError;
use crate::version::registries::GitHubReleaseFeed;
use crate::version::resolver::FeedResolver;
use crate::version::types::ResolutionPolicy;

/// A strategy for finding the latest version of a project
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Resolves the latest acceptable version of the project at `url`
    ///
    /// # Returns
    /// * `Ok(Some(version))` - The latest acceptable version
    /// * `Ok(None)` - This source does not handle `url`, or no version is acceptable
    /// * `Err(VersionError)` - The source handles `url` but resolution failed
    async fn resolve(
        &self,
        url: &Url,
        policy: &ResolutionPolicy,
    ) -> Result<Option<String>, VersionError>;
}

/// Ordered list of [`VersionSource`]s
#[derive(Default)]
pub struct VersionSources {
    sources: Vec<Arc<dyn VersionSource>>,
}

impl VersionSources {
    pub fn new(sources: Vec<Arc<dyn VersionSource>>) -> Self {
        Self { sources }
    }

    pub fn push(&mut self, source: Arc<dyn VersionSource>) {
        self.sources.push(source);
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns the first version found, trying sources in order.
    ///
    /// The first error stops the search.
    pub async fn resolve(
        &self,
        url: &Url,
        policy: &ResolutionPolicy,
    ) -> Result<Option<String>, VersionError> {
        for source in &self.sources {
            if let Some(version) = source.resolve(url, policy).await? {
                debug!("{} resolved {} to {}", source.name(), url, version);
                return Ok(Some(version));
            }
            debug!("{} has no version for {}", source.name(), url);
        }
        Ok(None)
    }
}

/// Create the sources enabled in `config`
pub fn create_default_sources(
    config: &SourcesConfig,
    reporter: Arc<dyn Reporter>,
) -> VersionSources {
    let mut sources = VersionSources::default();

    if config.github.enabled {
        let feed = GitHubReleaseFeed::new(&config.github.base_url).with_host(&config.github.host);
        sources.push(Arc::new(FeedResolver::new(Arc::new(feed), reporter)));
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GitHubConfig, SourcesConfig};
    use crate::reporter::BufferedReporter;
    use crate::version::pattern::VersionPattern;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub source returning a fixed outcome and counting calls
    struct StubSource {
        outcome: fn() -> Result<Option<String>, VersionError>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(outcome: fn() -> Result<Option<String>, VersionError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl VersionSource for StubSource {
        fn name(&self) -> &str {
            "stub"
        }

        async fn resolve(
            &self,
            _url: &Url,
            _policy: &ResolutionPolicy,
        ) -> Result<Option<String>, VersionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    fn policy() -> ResolutionPolicy {
        ResolutionPolicy::new(VersionPattern::new("(.*)").unwrap(), false)
    }

    fn url() -> Url {
        Url::parse("https://github.com/owner/repo").unwrap()
    }

    #[tokio::test]
    async fn resolve_returns_first_found_version() {
        let skip = StubSource::new(|| Ok(None));
        let found = StubSource::new(|| Ok(Some("1.0.0".to_string())));
        let unused = StubSource::new(|| Ok(Some("2.0.0".to_string())));
        let list: Vec<Arc<dyn VersionSource>> = vec![skip.clone(), found.clone(), unused.clone()];
        let sources = VersionSources::new(list);

        let result = sources.resolve(&url(), &policy()).await.unwrap();

        assert_eq!(result, Some("1.0.0".to_string()));
        assert_eq!((skip.calls(), found.calls(), unused.calls()), (1, 1, 0));
    }

    #[tokio::test]
    async fn resolve_stops_at_first_error() {
        let failing = StubSource::new(|| Err(VersionError::NoReleaseFound));
        let unused = StubSource::new(|| Ok(Some("2.0.0".to_string())));
        let list: Vec<Arc<dyn VersionSource>> = vec![failing.clone(), unused.clone()];
        let sources = VersionSources::new(list);

        let result = sources.resolve(&url(), &policy()).await;

        assert!(matches!(result, Err(VersionError::NoReleaseFound)));
        assert_eq!(unused.calls(), 0);
    }

    #[tokio::test]
    async fn resolve_returns_none_when_no_source_applies() {
        let list: Vec<Arc<dyn VersionSource>> = vec![StubSource::new(|| Ok(None))];
        let sources = VersionSources::new(list);

        assert_eq!(sources.resolve(&url(), &policy()).await.unwrap(), None);
        assert_eq!(
            VersionSources::default()
                .resolve(&url(), &policy())
                .await
                .unwrap(),
            None
        );
    }

    #[test]
    fn create_default_sources_honors_enabled_flag() {
        let reporter = Arc::new(BufferedReporter::new());
        let enabled = SourcesConfig::default();
        let disabled = SourcesConfig {
            github: GitHubConfig {
                enabled: false,
                ..GitHubConfig::default()
            },
        };

        assert_eq!(create_default_sources(&enabled, reporter.clone()).len(), 1);
        assert!(create_default_sources(&disabled, reporter).is_empty());
    }
}
