use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PAYVAULT_LOG";
const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "payvault_core=debug,payvault=debug,info";

/// Installs the stderr subscriber. `PAYVAULT_LOG` wins over `-v`; stdout is
/// reserved for JSON output.
pub(crate) fn init(verbose: bool) -> Result<()> {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install log subscriber")
}
