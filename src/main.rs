use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::debug;
use upstream_version::config::{self, Config};
use upstream_version::logging;
use upstream_version::reporter::{ConsoleReporter, Reporter};
use upstream_version::version::pattern::VersionPattern;
use upstream_version::version::source::create_default_sources;
use upstream_version::version::types::ResolutionPolicy;
use url::Url;

#[derive(Parser)]
#[command(name = "upstream-version")]
#[command(version, about = "Find the latest upstream release of a project")]
struct Cli {
    /// Source URL of the project, e.g. https://github.com/owner/repo
    url: Url,

    /// Regex with one capture group extracting the version from a release name
    #[arg(long, value_name = "REGEX")]
    version_regex: Option<String>,

    /// Accept pre-release versions (rc, alpha, beta, preview, nightly, milestones)
    #[arg(long)]
    unstable_version: bool,

    /// Configuration file [default: $XDG_CONFIG_HOME/upstream-version/config.json]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Give up after this many milliseconds
    #[arg(long, value_name = "MS")]
    timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs as JSON lines to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let config = Config::load(&config_path)?;
    debug!("Loaded configuration from {}", config_path.display());

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli, config))
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let version_regex = cli.version_regex.as_deref().unwrap_or(&config.version_regex);
    let pattern = VersionPattern::new(version_regex)?;
    let policy = ResolutionPolicy::new(pattern, cli.unstable_version || config.unstable_version);
    let timeout = cli.timeout.unwrap_or(config.fetch_timeout);

    let reporter: Arc<dyn Reporter> = Arc::new(ConsoleReporter::new());
    let sources = create_default_sources(&config.sources, reporter);

    let version = tokio::time::timeout(
        Duration::from_millis(timeout),
        sources.resolve(&cli.url, &policy),
    )
    .await
    .with_context(|| format!("Timed out after {timeout}ms looking up {}", cli.url))??;

    match version {
        Some(version) => {
            println!("{version}");
            Ok(())
        }
        None => bail!(
            "Could not find the latest version of {}. Please specify the version manually",
            cli.url
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "upstream-version",
            "https://github.com/owner/repo",
            "--version-regex",
            "v(.*)",
            "--unstable-version",
            "--timeout",
            "1000",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.url.as_str(), "https://github.com/owner/repo");
        assert_eq!(cli.version_regex.as_deref(), Some("v(.*)"));
        assert!(cli.unstable_version);
        assert_eq!(cli.timeout, Some(1000));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_rejects_invalid_url() {
        assert!(Cli::try_parse_from(["upstream-version", "not a url"]).is_err());
    }
}
