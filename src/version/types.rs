//! Common types shared by the resolution pipeline

use std::fmt;

use url::Url;

use crate::version::pattern::VersionPattern;

/// A hosted project identified by `{owner}/{repo}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub owner: String,
    pub repo: String,
}

impl Project {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Reads `{owner}/{repo}` from the first two path segments of `url`.
    ///
    /// A trailing `.git` is stripped from the repository name, so
    /// `https://github.com/owner/repo.git` and
    /// `https://github.com/owner/repo/archive/v1.0.tar.gz` both yield `owner/repo`.
    pub fn from_url(url: &Url) -> Option<Self> {
        let mut segments = url.path_segments()?;
        let owner = segments.next().filter(|s| !s.is_empty())?;
        let repo = segments.next().filter(|s| !s.is_empty())?;
        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        if repo.is_empty() {
            return None;
        }

        Some(Self::new(owner, repo))
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// How versions are extracted and which ones are acceptable
#[derive(Debug, Clone)]
pub struct ResolutionPolicy {
    pub pattern: VersionPattern,
    /// Accept pre-release versions (rc, beta, nightly, ...)
    pub unstable_version: bool,
}

impl ResolutionPolicy {
    pub fn new(pattern: VersionPattern, unstable_version: bool) -> Self {
        Self {
            pattern,
            unstable_version,
        }
    }
}
