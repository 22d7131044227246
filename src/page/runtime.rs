//! Event loop for a [`PageController`].
//!
//! Events are applied strictly one at a time on a single task, which owns the
//! controller. Scheduled resets run as timer tasks that post
//! [`PageEvent::ResetForm`] back onto the same queue; they hold only a weak
//! sender, so dropping the last [`PageHandle`] stops the loop.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::page::broadcaster::RenderBroadcaster;
use crate::page::controller::{PageController, PageSnapshot};
use crate::page::{Effect, PageEvent};

const EVENT_BUFFER: usize = 64;

/// Client side of a running page.
pub struct PageHandle {
    events: mpsc::Sender<PageEvent>,
    broadcaster: RenderBroadcaster,
    task: JoinHandle<PageController>,
}

impl PageHandle {
    /// Queue an event for the page.
    pub async fn send(&self, event: PageEvent) -> Result<(), PageError> {
        self.events.send(event).await.map_err(|_| PageError::Closed)
    }

    /// Receive a snapshot after every event that was applied successfully.
    pub fn subscribe(&self) -> broadcast::Receiver<PageSnapshot> {
        self.broadcaster.subscribe()
    }

    /// Stop accepting events, drain the queue and return the final controller.
    pub async fn shutdown(self) -> Result<PageController, PageError> {
        let PageHandle { events, task, .. } = self;
        drop(events);
        task.await.map_err(|_| PageError::Closed)
    }
}

/// Start a page on the current tokio runtime.
pub fn spawn_page(config: &PageConfig) -> PageHandle {
    let (events, queue) = mpsc::channel(EVENT_BUFFER);
    let broadcaster = RenderBroadcaster::new(config.render_buffer);
    let controller = PageController::new(config);

    let task = tokio::spawn(run_page(
        controller,
        queue,
        events.downgrade(),
        broadcaster.clone(),
    ));

    PageHandle {
        events,
        broadcaster,
        task,
    }
}

async fn run_page(
    mut controller: PageController,
    mut queue: mpsc::Receiver<PageEvent>,
    timers: mpsc::WeakSender<PageEvent>,
    broadcaster: RenderBroadcaster,
) -> PageController {
    tracing::debug!("page runtime started");

    while let Some(event) = queue.recv().await {
        match controller.dispatch(event) {
            Ok(effects) => {
                for effect in effects {
                    schedule(effect, timers.clone());
                }
                broadcaster.send(controller.snapshot());
            }
            Err(e) => {
                tracing::warn!(error = %e, "page event rejected");
            }
        }
    }

    tracing::debug!("page runtime stopped");
    controller
}

fn schedule(effect: Effect, timers: mpsc::WeakSender<PageEvent>) {
    match effect {
        Effect::ScheduleReset(delay) => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if let Some(events) = timers.upgrade() {
                    if events.send(PageEvent::ResetForm).await.is_err() {
                        tracing::debug!("page closed before scheduled reset");
                    }
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::theme::Theme;

    #[tokio::test]
    async fn applies_events_in_order() {
        let page = spawn_page(&PageConfig::default());
        let mut renders = page.subscribe();

        page.send(PageEvent::Increment).await.unwrap();
        page.send(PageEvent::Increment).await.unwrap();
        page.send(PageEvent::Decrement).await.unwrap();

        let counters: Vec<i64> = vec![
            renders.recv().await.unwrap().counter,
            renders.recv().await.unwrap().counter,
            renders.recv().await.unwrap().counter,
        ];
        assert_eq!(counters, vec![1, 2, 1]);

        let controller = page.shutdown().await.unwrap();
        assert_eq!(controller.counter().value(), 1);
    }

    #[tokio::test]
    async fn rejected_event_does_not_stop_the_page() {
        let page = spawn_page(&PageConfig::default());
        let mut renders = page.subscribe();

        page.send(PageEvent::SelectTab { id: "nope".into() })
            .await
            .unwrap();
        page.send(PageEvent::ToggleTheme).await.unwrap();

        // the failed event publishes nothing; the next snapshot is the theme change
        let snapshot = renders.recv().await.unwrap();
        assert_eq!(snapshot.theme, Theme::Dark);
        assert_eq!(snapshot.active_tab.as_deref(), Some("html"));
    }
}
