//! Cancellable tick scheduling on the tokio runtime.
//!
//! Each scheduled tick is a one-shot task that sleeps for its delay and then
//! sends [`Message::DrawTick`] back into the TEA loop. Cancelling aborts the
//! task; a tick that was already queued before the abort is rejected by the
//! draw controller's handle check.

use std::collections::HashMap;
use std::time::Duration;

use lucky_core::TimerHandle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use crate::message::Message;

/// Tracks in-flight tick tasks by handle
#[derive(Debug)]
pub struct TimerRegistry {
    msg_tx: mpsc::Sender<Message>,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
}

impl TimerRegistry {
    pub fn new(msg_tx: mpsc::Sender<Message>) -> Self {
        Self {
            msg_tx,
            tasks: HashMap::new(),
        }
    }

    /// Deliver `Message::DrawTick { handle }` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, handle: TimerHandle, delay: Duration) {
        self.tasks.retain(|_, task| !task.is_finished());

        let tx = self.msg_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Message::DrawTick { handle }).await.is_err() {
                trace!("tick {} dropped: loop closed", handle);
            }
        });

        if let Some(previous) = self.tasks.insert(handle, task) {
            warn!("timer {} scheduled twice, aborting the earlier task", handle);
            previous.abort();
        }
        trace!("scheduled {} in {:?}", handle, delay);
    }

    /// Abort a scheduled tick. Returns false if it was unknown or already fired.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.tasks.remove(&handle) {
            Some(task) => {
                let pending = !task.is_finished();
                task.abort();
                trace!("cancelled {}", handle);
                pending
            }
            None => false,
        }
    }

    /// Abort every scheduled tick
    pub fn cancel_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }

    /// Number of ticks still waiting to fire
    pub fn pending(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Drop for TimerRegistry {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_tick_is_delivered_after_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = TimerRegistry::new(tx);
        let handle = TimerHandle::new(1);

        timers.schedule(handle, Duration::from_millis(100));
        assert_eq!(timers.pending(), 1);

        let msg = rx.recv().await.unwrap();
        assert_eq!(msg, Message::DrawTick { handle });
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_tick_never_arrives() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = TimerRegistry::new(tx);
        let handle = TimerHandle::new(7);

        timers.schedule(handle, Duration::from_millis(50));
        assert!(timers.cancel(handle));
        assert_eq!(timers.pending(), 0);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_unknown_handle() {
        let (tx, _rx) = mpsc::channel(8);
        let mut timers = TimerRegistry::new(tx);
        assert!(!timers.cancel(TimerHandle::new(99)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_ticks() {
        let (tx, mut rx) = mpsc::channel(8);
        {
            let mut timers = TimerRegistry::new(tx);
            timers.schedule(TimerHandle::new(1), Duration::from_millis(10));
            timers.schedule(TimerHandle::new(2), Duration::from_millis(20));
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
        // Every sender was dropped with the aborted tasks
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_in_schedule_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = TimerRegistry::new(tx);
        timers.schedule(TimerHandle::new(2), Duration::from_millis(30));
        timers.schedule(TimerHandle::new(1), Duration::from_millis(10));

        assert_eq!(
            rx.recv().await.unwrap(),
            Message::DrawTick {
                handle: TimerHandle::new(1)
            }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            Message::DrawTick {
                handle: TimerHandle::new(2)
            }
        );
    }
}
