use tokio::sync::mpsc::{Receiver, Sender};
use tracing::{debug, trace};

use crate::option::Optional;

/// The body of a single stage task. Runs until the input is closed and drained, or until nobody
/// is listening for the output any more.
pub(crate) async fn run_stage<T, U, F>(
    index: usize,
    mut input: Receiver<Optional<T>>,
    output: Sender<Optional<U>>,
    transform: F,
) where
    F: Fn(T) -> U,
{
    debug!(stage = index, "pipeline stage started");

    let mut position = 0_usize;
    while let Some(item) = input.recv().await {
        trace!(stage = index, position, "pipeline stage received item");

        let mapped = item.map(&transform);
        if output.send(mapped).await.is_err() {
            debug!(stage = index, position, "pipeline output dropped, stopping stage");
            return;
        }
        position += 1;
    }

    debug!(stage = index, handled = position, "pipeline input closed, stage finished");
}
