//! Optional file logging. The terminal UI owns stdout, so tracing output
//! only goes to a file the user asked for.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to `path`, appending. Does
/// nothing when no path is given. `RUST_LOG` refines the filter; the
/// default captures this crate at debug level.
pub fn init(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirpick=debug")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
