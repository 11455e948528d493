//! Shared test support for `rbsrc`.
//!
//! Trees are built as positional JSON (`["TAG", [children...]]`), the same
//! shape the unparser accepts, so these helpers carry no dependency on the
//! library itself.
pub mod builders;
pub mod strategies;

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rbsrc=debug")))
        .with_test_writer()
        .try_init();
}
