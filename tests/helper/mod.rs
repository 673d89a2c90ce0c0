//! Shared test helpers

pub mod feed;

pub use feed::{atom_feed, github_config, policy};
