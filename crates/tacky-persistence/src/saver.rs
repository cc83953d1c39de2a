//! Fire-and-forget persistence.
//!
//! The UI thread hands every committed board collection to the saver and
//! moves on. A background task writes the most recent collection; snapshots
//! queued behind a slow write are skipped since only the latest matters.
//! Writes are idempotent, and failures are logged rather than reported to the
//! gesture that caused them.

use std::sync::Arc;

use tacky_domain::Board;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::board_storage::BoardStorage;
use crate::traits::KeyValueStore;

pub struct BackgroundSaver {
    tx: mpsc::UnboundedSender<Vec<Board>>,
    handle: JoinHandle<()>,
}

impl BackgroundSaver {
    /// Starts the writer task. Must be called inside a tokio runtime.
    pub fn spawn<S>(storage: Arc<BoardStorage<S>>) -> Self
    where
        S: KeyValueStore + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Vec<Board>>();

        let handle = tokio::spawn(async move {
            while let Some(mut boards) = rx.recv().await {
                let mut skipped = 0usize;
                while let Ok(newer) = rx.try_recv() {
                    boards = newer;
                    skipped += 1;
                }
                if skipped > 0 {
                    tracing::debug!("Coalesced {} queued saves", skipped);
                }

                let storage = Arc::clone(&storage);
                let result = tokio::task::spawn_blocking(move || storage.save(&boards)).await;
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::warn!("Background save failed: {}", e),
                    Err(e) => tracing::warn!("Background save task aborted: {}", e),
                }
            }
            tracing::debug!("Background saver stopped");
        });

        Self { tx, handle }
    }

    /// Queues a snapshot for writing. Never blocks.
    pub fn save(&self, boards: Vec<Board>) {
        if self.tx.send(boards).is_err() {
            tracing::warn!("Background saver is gone; snapshot dropped");
        }
    }

    /// Stops accepting snapshots and waits for pending writes to finish.
    pub async fn close(self) {
        drop(self.tx);
        if let Err(e) = self.handle.await {
            tracing::warn!("Background saver ended abnormally: {}", e);
        }
    }
}
