use tracing_subscriber::{EnvFilter, Registry, prelude::*};

/// Initialize tracing
///
/// Logs go to stderr; stdout is reserved for the command's result line.
pub fn init(directive: &str) -> anyhow::Result<()> {
    let logger = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);
    let env_filter = EnvFilter::try_new(directive)?;

    let reg = Registry::default();
    reg.with(env_filter).with(logger).try_init()?;
    Ok(())
}
