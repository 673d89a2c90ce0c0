pub mod config;
pub mod logging;
pub mod reporter;
pub mod version;
