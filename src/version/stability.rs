//! Stable vs. pre-release classification

use std::sync::LazyLock;

use regex::{RegexSet, RegexSetBuilder};

/// Markers that flag a version as a pre-release or nightly build
pub const UNSTABLE_MARKERS: [&str; 6] = ["rc", "alpha", "beta", "preview", "nightly", "m[0-9]"];

static UNSTABLE: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSetBuilder::new(UNSTABLE_MARKERS)
        .case_insensitive(true)
        .build()
        .expect("unstable markers are valid regexes")
});

/// Returns true if `version` is non-empty and contains none of the
/// [`UNSTABLE_MARKERS`] anywhere in the string, ignoring case.
pub fn is_stable(version: &str) -> bool {
    !version.is_empty() && !UNSTABLE.is_match(version)
}
