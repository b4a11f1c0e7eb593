//! Log filter for the harness binary.
//!
//! Directives in `RUST_LOG` take effect as written, including a bare level
//! such as `info`. Targets no directive covers log at [`DEFAULT_LEVEL`].

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or names no default.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Filter built from `RUST_LOG`. Invalid directives are skipped.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .from_env_lossy()
}

/// Filter built from a `RUST_LOG`-style directive string.
#[must_use]
pub fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .parse_lossy(directives)
}
