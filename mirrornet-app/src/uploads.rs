use std::time::Duration;

use shared::app_events::AppEvent;
use shared::upload::{Tick, UploadTask};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Walks one task through its phases, pushing a snapshot to the UI
/// after every tick. Cancellation is an abort of the returned handle;
/// the timer dies with the task.
pub fn spawn_driver(
    mut task: UploadTask,
    tx: mpsc::UnboundedSender<AppEvent>,
    tick: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut timer = tokio::time::interval(tick);
        timer.tick().await; // the first tick fires immediately

        loop {
            timer.tick().await;
            let outcome = task.advance(&mut rand::rng());
            if tx.send(AppEvent::UploadUpdated(task.clone())).is_err() {
                break;
            }
            if outcome == Tick::Done {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::notification::{NotificationKind, NotificationStore};
    use shared::upload::{
        CHUNKS_MAX, CHUNKS_MIN, DISTRIBUTED_PEER_COUNT, SelectedFile, UploadId, UploadStatus,
    };

    fn test_task(id: u64) -> UploadTask {
        UploadTask::new(
            UploadId(id),
            SelectedFile {
                name: "report.pdf".into(),
                size: 10 * 1024 * 1024,
                mime: "application/pdf".into(),
            },
        )
    }

    async fn drain(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<UploadTask> {
        let mut snapshots = Vec::new();
        while let Some(event) = rx.recv().await {
            match event {
                AppEvent::UploadUpdated(snap) => snapshots.push(snap),
                _ => panic!("unexpected event variant"),
            }
        }
        snapshots
    }

    #[tokio::test]
    async fn driver_walks_to_completion_and_stops() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_driver(test_task(1), tx, Duration::from_millis(1));

        let snapshots = drain(&mut rx).await;
        handle.await.unwrap();

        let completed = snapshots
            .iter()
            .filter(|s| s.status == UploadStatus::Completed)
            .count();
        assert_eq!(completed, 1, "exactly one completed snapshot");

        let last = snapshots.last().unwrap();
        assert_eq!(last.status, UploadStatus::Completed);
        assert_eq!(last.progress, 100.0);
        let chunks = last.chunk_count.unwrap();
        assert!((CHUNKS_MIN..CHUNKS_MAX).contains(&chunks));
        assert_eq!(last.distributed_peers.len(), DISTRIBUTED_PEER_COUNT);
    }

    #[tokio::test]
    async fn snapshots_never_regress_within_a_phase() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_driver(test_task(2), tx, Duration::from_millis(1));

        let snapshots = drain(&mut rx).await;
        handle.await.unwrap();

        for pair in snapshots.windows(2) {
            if pair[0].status == pair[1].status {
                assert!(
                    pair[1].progress >= pair[0].progress,
                    "{:?} went {} -> {}",
                    pair[1].status,
                    pair[0].progress,
                    pair[1].progress
                );
            }
        }
    }

    #[tokio::test]
    async fn aborting_the_driver_stops_snapshots_short_of_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_driver(test_task(3), tx, Duration::from_millis(5));

        // let at least one tick land before cancelling
        let first = rx.recv().await.expect("driver never ticked");
        assert!(matches!(first, AppEvent::UploadUpdated(_)));
        handle.abort();

        let leftovers = drain(&mut rx).await;
        assert!(
            leftovers
                .iter()
                .all(|s| s.status != UploadStatus::Completed),
            "cancelled upload still completed"
        );
    }

    #[tokio::test]
    async fn completion_snapshot_lands_exactly_one_notification() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_driver(test_task(4), tx, Duration::from_millis(1));
        handle.await.unwrap();

        // replay the buffered snapshots the way the UI applies them
        let mut store = NotificationStore::new();
        let mut last_status = UploadStatus::Uploading;
        for snap in drain(&mut rx).await {
            if snap.status == UploadStatus::Completed && last_status != UploadStatus::Completed {
                store.add(
                    NotificationKind::Success,
                    "Backup Completed",
                    format!("{} has been successfully backed up to the network.", snap.name),
                );
            }
            last_status = snap.status;
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.unread(), 1);
    }
}
