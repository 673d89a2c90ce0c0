//! Version discovery pipeline
//!
//! Finds the latest upstream release of a project from the release feed of
//! its hosting service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Sources   │────▶│  Resolver   │────▶│ ReleaseFeed │
//! │ (try order) │     │  (select)   │     │   (fetch)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                        │       │
//!                        ▼       ▼
//!              ┌─────────────┐ ┌─────────────┐
//!              │   Pattern   │ │  Stability  │
//!              │  (extract)  │ │ (classify)  │
//!              └─────────────┘ └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`source`]: `VersionSource` trait and the ordered source chain
//! - [`resolver`]: Feed-backed source with host gating and version selection
//! - [`registry`]: `ReleaseFeed` trait for fetching releases from a host
//! - [`registries`]: Concrete feeds (GitHub)
//! - [`feed`]: Atom document parsing
//! - [`pattern`]: Version extraction with a caller regex
//! - [`stability`]: Stable vs. pre-release classification
//! - [`error`]: Error type for the pipeline
//! - [`types`]: Common types like `Project` and `ResolutionPolicy`

pub mod error;
pub mod feed;
pub mod pattern;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod source;
pub mod stability;
pub mod types;
