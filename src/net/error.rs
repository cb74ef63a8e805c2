#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::time::Duration;

/// What went wrong with a request to the advisory service.
///
/// `Timeout` is deliberately distinct from `Transport`: a request that our
/// own deadline killed is reported differently from one the network layer
/// rejected. `Api` covers application-level errors embedded in a 2xx body
/// (the weather endpoint reports an unknown city this way).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("{0}")]
    Api(String),
}
