//! Reed compiler front end.
//!
//! The binary dispatches to command handlers in [`commands`]; this library
//! crate exists so the same entry points stay callable from tests and
//! future tooling.

use std::sync::Once;

pub mod commands;

// Re-export lex from the reed_lexer crate (single source of truth)
pub use reed_lexer::lex;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=reed_lexer=debug` or `RUST_LOG=reed_token=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
