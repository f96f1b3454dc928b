use futures::StreamExt;
use futures::stream;
use std::future::Future;

/// Drives every future to completion, at most `concurrency` at a time, and
/// returns each outcome in input order.
///
/// Members run unordered, so a slow member only holds its own slot. A failing
/// member never short-circuits the batch: the returned vector always has one
/// entry per input future.
pub async fn settle_all<I, Fut, T, E>(futures: I, concurrency: usize) -> Vec<Result<T, E>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    let mut settled: Vec<(usize, Result<T, E>)> = stream::iter(futures.into_iter().enumerate())
        .map(|(idx, future)| async move { (idx, future.await) })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;
    settled.sort_unstable_by_key(|(idx, _)| *idx);
    settled.into_iter().map(|(_, outcome)| outcome).collect()
}
