//! Release feed test utilities

use upstream_version::config::{GitHubConfig, SourcesConfig};
use upstream_version::version::pattern::VersionPattern;
use upstream_version::version::types::ResolutionPolicy;

/// Builds a GitHub-style Atom release feed, entries given newest first as
/// `(tag, updated)` pairs
pub fn atom_feed(owner: &str, repo: &str, releases: &[(&str, &str)]) -> String {
    let entries: String = releases
        .iter()
        .map(|(tag, updated)| {
            format!(
                r#"
  <entry>
    <id>tag:github.com,2008:Repository/1/{tag}</id>
    <updated>{updated}</updated>
    <link rel="alternate" type="text/html" href="https://github.com/{owner}/{repo}/releases/tag/{tag}"/>
    <title>{tag}</title>
    <author><name>{owner}</name></author>
  </entry>"#
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xml:lang="en-US">
  <id>tag:github.com,2008:https://github.com/{owner}/{repo}/releases</id>
  <link type="text/html" rel="alternate" href="https://github.com/{owner}/{repo}/releases"/>
  <link type="application/atom+xml" rel="self" href="https://github.com/{owner}/{repo}/releases.atom"/>
  <title>Release notes from {repo}</title>
  <updated>2024-03-01T00:00:00Z</updated>{entries}
</feed>"#
    )
}

/// GitHub source configuration fetching feeds from `base_url`
pub fn github_config(base_url: &str) -> SourcesConfig {
    SourcesConfig {
        github: GitHubConfig {
            base_url: base_url.to_string(),
            ..GitHubConfig::default()
        },
    }
}

pub fn policy(pattern: &str, unstable_version: bool) -> ResolutionPolicy {
    ResolutionPolicy::new(VersionPattern::new(pattern).unwrap(), unstable_version)
}
