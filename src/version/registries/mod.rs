//! Release feed implementations for hosting services

pub mod github;

pub use github::GitHubReleaseFeed;
