//! Query layer: cache keys, result states and the shared query cache.

pub mod cache;
pub mod key;
pub mod state;

pub use cache::{QueryCache, DEFAULT_REQUEST_TIMEOUT, DEFAULT_STALE_TIME};
pub use key::QueryKey;
pub use state::{non_empty, QueryState};

use futures_util::future::{AbortHandle, Abortable};
use std::future::Future;

pub use futures_util::future::Aborted;

/// Wrap a query or view loader so it can be cancelled on teardown or parameter change.
///
/// Resolves to `Err(Aborted)` once the handle is aborted. Other callers sharing the
/// same in-flight request keep waiting on it; only this caller stops.
///
/// ```ignore
/// let (markets, handle) = abortable(client.markets().active(&ctx));
/// // on teardown
/// handle.abort();
/// ```
pub fn abortable<Fut: Future>(fut: Fut) -> (Abortable<Fut>, AbortHandle) {
    let (handle, registration) = AbortHandle::new_pair();
    (Abortable::new(fut, registration), handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_abortable_resolves_normally() {
        let (fut, _handle) = abortable(async { QueryState::Data(1u8) });
        assert_eq!(tokio_test::block_on(fut), Ok(QueryState::Data(1)));
    }

    #[tokio::test]
    async fn test_aborted_future_reports_aborted() {
        let (fut, handle) = abortable(async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            QueryState::Data(1u8)
        });
        handle.abort();
        assert_eq!(fut.await, Err(Aborted));
    }
}
