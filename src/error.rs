//! Unified startup error.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// The error type returned while bringing the shop up.
///
/// Request-level failures (404, validation, storage errors mid-request) are
/// expressed as HTTP [`Response`](crate::Response) values, not as `Error`s.
/// This type surfaces configuration, schema bootstrap, and socket failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("store: {0}")]
    Store(#[from] StoreError),
}
