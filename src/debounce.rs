//! C2 Debouncer: a generic single-handler debounce primitive.
//!
//! Spec §4.2 wants `trigger`/`flush`/`cancel` with latest-args-wins
//! semantics: each `trigger` restarts the delay window and replaces the
//! pending payload, so only the most recent call within a window survives.
//! Adapted from, but not identical to, the teacher's polling
//! `HashMap<PathBuf, Instant>` multi-key debouncer (kept in spirit for the
//! File Watcher's path-batching use in `watch::ignore`), since this is a
//! single-slot primitive rather than a per-key map.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Debounces calls carrying a payload of type `T`, invoking a handler with
/// only the most recent payload once the delay has elapsed without a new
/// `trigger`.
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    inner: Arc<Mutex<Inner<T>>>,
}

struct Inner<T> {
    generation: u64,
    pending: Option<T>,
    task: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: Arc::new(Mutex::new(Inner {
                generation: 0,
                pending: None,
                task: None,
            })),
        }
    }

    /// Record a new payload and (re)start the delay window. When the window
    /// elapses without an intervening `trigger` or `cancel`, `handler` is
    /// invoked with the latest payload.
    pub async fn trigger<F, Fut>(&self, payload: T, handler: F)
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let mut guard = self.inner.lock().await;
        guard.generation += 1;
        let my_generation = guard.generation;
        guard.pending = Some(payload);

        if let Some(old) = guard.task.take() {
            old.abort();
        }

        let inner = self.inner.clone();
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let payload = {
                let mut guard = inner.lock().await;
                if guard.generation != my_generation {
                    return;
                }
                guard.task = None;
                guard.pending.take()
            };
            if let Some(payload) = payload {
                handler(payload).await;
            }
        });
        guard.task = Some(task);
    }

    /// Immediately run the pending payload's handler, skipping the
    /// remaining delay. No-op if nothing is pending.
    pub async fn flush<F, Fut>(&self, handler: F)
    where
        F: FnOnce(T) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        let payload = {
            let mut guard = self.inner.lock().await;
            guard.generation += 1;
            if let Some(task) = guard.task.take() {
                task.abort();
            }
            guard.pending.take()
        };
        if let Some(payload) = payload {
            handler(payload).await;
        }
    }

    /// Discard any pending payload without invoking the handler.
    pub async fn cancel(&self) {
        let mut guard = self.inner.lock().await;
        guard.generation += 1;
        if let Some(task) = guard.task.take() {
            task.abort();
        }
        guard.pending = None;
    }

    pub async fn has_pending(&self) -> bool {
        self.inner.lock().await.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn trigger_fires_after_delay_with_latest_payload() {
        let debouncer = Debouncer::new(Duration::from_millis(20));
        let calls = Arc::new(std::sync::Mutex::new(Vec::new()));

        for i in 0..5 {
            let calls = calls.clone();
            debouncer
                .trigger(i, move |payload| async move {
                    calls.lock().unwrap().push(payload);
                })
                .await;
        }

        tokio::time::sleep(Duration::from_millis(60)).await;
        let recorded = calls.lock().unwrap().clone();
        assert_eq!(recorded, vec![4]);
    }

    #[tokio::test]
    async fn cancel_suppresses_pending_call() {
        let debouncer: Debouncer<u32> = Debouncer::new(Duration::from_millis(20));
        let fired = Arc::new(AtomicU32::new(0));
        let fired2 = fired.clone();
        debouncer
            .trigger(1, move |_| async move {
                fired2.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        debouncer.cancel().await;
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn flush_runs_handler_immediately() {
        let debouncer = Debouncer::new(Duration::from_secs(10));
        let fired = Arc::new(AtomicU32::new(0));
        let fired2 = fired.clone();
        debouncer
            .trigger(7u32, move |payload| async move {
                fired2.store(payload, Ordering::SeqCst);
            })
            .await;
        debouncer
            .flush(|payload| async move {
                assert_eq!(payload, 7);
            })
            .await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
