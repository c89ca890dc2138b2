//! Background worker applying queued click events to durable state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{EventLog, LinkRepository};

/// Runs the click ingestion worker until the channel is closed and drained.
///
/// Wakes on a fixed cadence and applies at most `batch_size` events per tick
/// in FIFO order, so a click burst cannot starve other scheduled work. For
/// each event it appends a record to the event log and increments the
/// owning link's click count.
///
/// This worker is the sole mutator of click counts and the sole appender to
/// the event log. Eventual consistency only: counts converge once the queue
/// drains, with no ordering guarantee relative to concurrent resolutions.
///
/// Failures never crash the loop. A click for a code that no longer exists
/// is dropped (the redirect it belongs to was already served); a log append
/// failure is logged and the event is skipped.
///
/// Exits after draining the remaining buffered events once every sender has
/// been dropped, so shutdown discards nothing that was accepted.
pub async fn run_click_worker<L, E>(
    mut rx: mpsc::Receiver<ClickEvent>,
    link_repository: Arc<L>,
    event_log: Arc<E>,
    flush_interval: Duration,
    batch_size: usize,
) where
    L: LinkRepository + ?Sized,
    E: EventLog + ?Sized,
{
    let mut tick = tokio::time::interval(flush_interval);

    loop {
        tick.tick().await;

        for _ in 0..batch_size {
            match rx.try_recv() {
                Ok(event) => apply_event(event, link_repository.as_ref(), event_log.as_ref()).await,
                Err(TryRecvError::Empty) => break,
                // Disconnected is only returned once the buffer is empty,
                // so everything accepted has been applied.
                Err(TryRecvError::Disconnected) => {
                    debug!("click channel closed, worker exiting");
                    return;
                }
            }
        }
    }
}

/// Applies a single click event: log append, then counter increment.
async fn apply_event<L, E>(event: ClickEvent, link_repository: &L, event_log: &E)
where
    L: LinkRepository + ?Sized,
    E: EventLog + ?Sized,
{
    let code = event.code.clone();

    if let Err(e) = event_log.append(event.into_click()).await {
        warn!(code, "failed to append click to event log: {e}");
        return;
    }

    match link_repository.increment_clicks(&code).await {
        Ok(true) => {}
        Ok(false) => debug!(code, "dropping click for unknown code"),
        Err(e) => warn!(code, "failed to increment click count: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockEventLog, MockLinkRepository};
    use serde_json::json;

    fn event_for(code: &str) -> ClickEvent {
        ClickEvent::new(code.to_string(), Some("test-agent"), None, 0.1)
    }

    #[tokio::test]
    async fn test_apply_event_appends_then_increments() {
        let mut log = MockEventLog::new();
        log.expect_append()
            .withf(|click| click.code == "abc1234")
            .times(1)
            .returning(|_| Ok(()));

        let mut repo = MockLinkRepository::new();
        repo.expect_increment_clicks()
            .withf(|code| code == "abc1234")
            .times(1)
            .returning(|_| Ok(true));

        apply_event(event_for("abc1234"), &repo, &log).await;
    }

    #[tokio::test]
    async fn test_apply_event_tolerates_stale_code() {
        let mut log = MockEventLog::new();
        log.expect_append().times(1).returning(|_| Ok(()));

        let mut repo = MockLinkRepository::new();
        repo.expect_increment_clicks()
            .times(1)
            .returning(|_| Ok(false));

        // Must not panic or error out.
        apply_event(event_for("gone"), &repo, &log).await;
    }

    #[tokio::test]
    async fn test_apply_event_skips_increment_on_log_failure() {
        let mut log = MockEventLog::new();
        log.expect_append()
            .times(1)
            .returning(|_| Err(crate::error::AppError::internal("log down", json!({}))));

        let mut repo = MockLinkRepository::new();
        repo.expect_increment_clicks().times(0);

        apply_event(event_for("abc1234"), &repo, &log).await;
    }

    #[tokio::test]
    async fn test_worker_drains_remaining_events_on_close() {
        let (tx, rx) = mpsc::channel(16);
        for _ in 0..5 {
            tx.try_send(event_for("abc1234")).unwrap();
        }
        drop(tx);

        let mut log = MockEventLog::new();
        log.expect_append().times(5).returning(|_| Ok(()));
        let mut repo = MockLinkRepository::new();
        repo.expect_increment_clicks()
            .times(5)
            .returning(|_| Ok(true));

        run_click_worker(
            rx,
            Arc::new(repo),
            Arc::new(log),
            Duration::from_millis(1),
            2, // smaller than the backlog, forcing multiple ticks
        )
        .await;
    }
}
