//! Deadline-bound futures.
//!
//! `with_deadline` races a future against a timer. When the timer wins, the
//! future is dropped, which cancels whatever request it had in flight.

#[cfg(test)]
#[path = "deadline_test.rs"]
mod deadline_test;

use std::future::Future;
use std::time::Duration;

use futures::future::{Either, select};

/// The deadline passed before the wrapped future settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("deadline of {}ms elapsed", .0.as_millis())]
pub struct DeadlineElapsed(pub Duration);

/// Run `fut` to completion unless `limit` elapses first.
///
/// # Errors
///
/// Returns [`DeadlineElapsed`] when the timer fires before `fut` settles.
pub async fn with_deadline<F: Future>(limit: Duration, fut: F) -> Result<F::Output, DeadlineElapsed> {
    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(sleep(limit));
    match select(fut, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(DeadlineElapsed(limit)),
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
