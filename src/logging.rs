use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Installs a compact `tracing` subscriber writing to stderr. `verbose`
/// lowers the threshold from INFO to DEBUG.
pub fn init_logging(verbose: bool) -> Result<(), SetGlobalDefaultError> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
