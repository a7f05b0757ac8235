use std::future::Future;

#[cfg(feature = "timings")]
use std::time::Instant;

/// Awaits `fut`, logging its wall time under the `timings` target when the
/// `timings` feature is enabled.
#[cfg(feature = "timings")]
pub(crate) async fn time_async_block<T, Fut>(label: &'static str, fut: Fut) -> T
where
    Fut: Future<Output = T>,
{
    let start = Instant::now();
    let output = fut.await;
    let elapsed = start.elapsed();
    tracing::info!(target: "timings", %label, elapsed_ms = elapsed.as_secs_f64() * 1e3);
    output
}

#[cfg(not(feature = "timings"))]
pub(crate) async fn time_async_block<T, Fut>(_: &'static str, fut: Fut) -> T
where
    Fut: Future<Output = T>,
{
    fut.await
}
