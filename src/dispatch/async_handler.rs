//! # AsyncHandler: redirects delivery through an executor, with permanent mute.
//!
//! [`AsyncHandler`] wraps an exclusively-owned delegate [`Handler`] so that
//! events are delivered on an [`Executor`] instead of the caller's thread,
//! and adds [`mute`](AsyncHandler::mute): a synchronous, permanent off
//! switch that is safe to flip from any thread, at any time, including while
//! a delivery is in flight.
//!
//! ## What it guarantees
//! - `receive(event)` returns after enqueue time; the delegate never runs on
//!   the caller's thread.
//! - Once `mute()` returns, no delivery that has not yet reached the
//!   delegate will reach it. A delegate call already in progress completes.
//! - Muting from inside the delegate (a handler unsubscribing itself) does
//!   not deadlock.
//! - A delivery job scheduled but not yet executed keeps the dispatcher
//!   state alive, even after every external handle is dropped.
//! - Delegate calls for one dispatcher never overlap.
//!
//! ## What it does **not** guarantee
//! - No cancellation of already-submitted jobs: a muted dispatcher's queued
//!   jobs still run, they just skip the delegate.
//! - No cross-dispatcher ordering, and no ordering beyond what the chosen
//!   executor provides.
//!
//! ## Diagram
//! ```text
//!   caller thread                      executor context
//!   receive(event)                          │
//!        │  clone shared state (strong ref) │
//!        └─► submit [job: state + event] ──►│ later, any thread:
//!                                           │   lock gate
//!   mute()                                  │   muted? ── yes ─► drop event
//!        │ lock gate, set flag, unlock      │     │ no
//!        ▼ returns: no delegate call        │     ▼
//!          can start unmuted anymore        │   delegate.receive(event)
//!                                           │   unlock gate
//! ```
//!
//! ## The gate
//! One re-entrant lock guards both the muted flag and every call into the
//! delegate:
//! - mute must take effect without waiting for queued deliveries to drain,
//!   so it cannot be a message on the same queue;
//! - holding the gate across the delegate call is what makes mute-then-drop
//!   safe: after `mute()` returns, no delegate call is running or can start,
//!   so the delegate's environment may be torn down;
//! - the lock is re-entrant because the delegate may call `mute()` on its
//!   own dispatcher, and a plain mutex would deadlock there.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventgate::{AsyncHandler, HandlerFn, ManualExecutor};
//!
//! let exec = Arc::new(ManualExecutor::new());
//! let handler = AsyncHandler::new(
//!     exec.clone(),
//!     HandlerFn::boxed(|event| {
//!         if let Ok(value) = event {
//!             println!("got {value}");
//!         }
//!     }),
//! );
//!
//! handler.receive(Ok(5));
//! handler.mute();
//! handler.receive(Ok(6));
//!
//! exec.run_all();
//! // only 5 was printed: the first event was scheduled before the mute,
//! // but both jobs check the flag at delivery time
//! ```

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

use parking_lot::ReentrantMutex;

use crate::exec::{Executor, Job};
use crate::handlers::{BoxHandler, EventResult, Handler};

/// State shared between external handles and scheduled delivery jobs.
struct Shared<T> {
    executor: Arc<dyn Executor>,
    delegate: BoxHandler<T>,
    /// Guards the muted flag and every call into `delegate`. Re-entrant:
    /// the delegate may call `mute()` on this same dispatcher.
    gate: ReentrantMutex<Cell<bool>>,
}

/// Dispatcher handle that delivers events through an executor and can be
/// muted.
///
/// ### Properties
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed state);
///   all clones drive the same dispatcher.
/// - **Fixed wiring**: executor and delegate are set at construction and
///   never change.
/// - **One-way mute**: the flag only ever goes from active to muted.
pub struct AsyncHandler<T> {
    shared: Arc<Shared<T>>,
}

impl<T: Send + 'static> AsyncHandler<T> {
    /// Creates a dispatcher delivering to `delegate` via `executor`.
    ///
    /// The delegate is exclusively owned: nothing else may call it, so the
    /// gate is the only serialization it ever needs.
    #[must_use]
    pub fn new(executor: Arc<dyn Executor>, delegate: BoxHandler<T>) -> Self {
        Self {
            shared: Arc::new(Shared {
                executor,
                delegate,
                gate: ReentrantMutex::new(Cell::new(false)),
            }),
        }
    }

    /// Schedules `event` for delivery to the delegate.
    ///
    /// Returns once the job is enqueued; never waits for execution. The job
    /// owns a strong reference to the dispatcher state, so the delivery
    /// survives even if every [`AsyncHandler`] handle is dropped first.
    ///
    /// If the executor rejects the job (full or closed), the event is
    /// dropped and a warning is logged; there is no retry.
    pub fn receive(&self, event: EventResult<T>) {
        let shared = Arc::clone(&self.shared);
        let job: Job = Box::new(move || {
            let gate = shared.gate.lock();
            if !gate.get() {
                shared.delegate.receive(event);
            }
        });

        if let Err(err) = self.shared.executor.submit(job) {
            eprintln!(
                "[eventgate] executor '{}' rejected delivery for handler '{}': {err}",
                self.shared.executor.name(),
                self.shared.delegate.name(),
            );
        }
    }
}

impl<T> AsyncHandler<T> {
    /// Permanently mutes the dispatcher.
    ///
    /// Synchronous and thread-safe. Blocks at most for the duration of one
    /// in-flight delegate call; when it returns, the delegate is not running
    /// and will never be called again. Already-queued jobs still execute and
    /// observe the flag. Idempotent.
    pub fn mute(&self) {
        let gate = self.shared.gate.lock();
        gate.set(true);
    }

    /// True once [`mute`](AsyncHandler::mute) has been called.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.shared.gate.lock().get()
    }
}

impl<T> Clone for AsyncHandler<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> fmt::Debug for AsyncHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncHandler")
            .field("executor", &self.shared.executor.name())
            .field("muted", &self.is_muted())
            .finish_non_exhaustive()
    }
}

/// A dispatcher is itself a [`Handler`], so it can serve as the delegate of
/// another dispatcher (stacked redirection).
impl<T: Send + 'static> Handler<T> for AsyncHandler<T> {
    fn receive(&self, event: EventResult<T>) {
        AsyncHandler::receive(self, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;
    use std::sync::OnceLock;
    use std::time::Duration;

    use crate::exec::{InlineExecutor, ManualExecutor, WorkerQueue};
    use crate::handlers::HandlerFn;

    fn recording_handler(seen: &Arc<StdMutex<Vec<i32>>>) -> BoxHandler<i32> {
        let sink = Arc::clone(seen);
        HandlerFn::boxed(move |event| {
            if let Ok(value) = event {
                sink.lock().unwrap().push(value);
            }
        })
    }

    #[test]
    fn test_mute_before_execution_suppresses_delivery() {
        let exec = Arc::new(ManualExecutor::new());
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let handler = AsyncHandler::new(exec.clone(), recording_handler(&seen));

        handler.receive(Ok(5));
        handler.mute();
        assert_eq!(exec.run_all(), 1);

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_delivery_then_mute_then_more_events() {
        let exec = Arc::new(ManualExecutor::new());
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let handler = AsyncHandler::new(exec.clone(), recording_handler(&seen));

        handler.receive(Ok(5));
        exec.run_all();
        handler.mute();
        handler.receive(Ok(6));
        exec.run_all();

        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[test]
    fn test_mute_is_idempotent() {
        let exec = Arc::new(ManualExecutor::new());
        let handler =
            AsyncHandler::new(exec, HandlerFn::boxed(|_event: EventResult<i32>| {}));

        assert!(!handler.is_muted());
        handler.mute();
        handler.mute();
        assert!(handler.is_muted());
    }

    #[test]
    fn test_reentrant_mute_from_delegate_does_not_deadlock() {
        let slot: Arc<OnceLock<AsyncHandler<i32>>> = Arc::new(OnceLock::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let unsubscribe = Arc::clone(&slot);
        let counter = Arc::clone(&calls);
        let handler = AsyncHandler::new(
            Arc::new(InlineExecutor),
            HandlerFn::boxed(move |_event: EventResult<i32>| {
                counter.fetch_add(1, Ordering::SeqCst);
                if let Some(h) = unsubscribe.get() {
                    h.mute();
                }
            }),
        );
        slot.set(handler.clone()).unwrap();

        // Inline executor: the delegate runs, and mutes, during receive.
        handler.receive(Ok(1));
        handler.receive(Ok(2));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(handler.is_muted());
    }

    #[test]
    fn test_queued_job_keeps_state_alive_after_drop() {
        let exec = Arc::new(ManualExecutor::new());
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let handler = AsyncHandler::new(exec.clone(), recording_handler(&seen));

        handler.receive(Ok(5));
        drop(handler);

        assert_eq!(exec.run_all(), 1);
        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[test]
    fn test_receive_after_executor_close_is_silently_dropped() {
        let exec = Arc::new(ManualExecutor::new());
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let handler = AsyncHandler::new(exec.clone(), recording_handler(&seen));

        exec.close();
        handler.receive(Ok(5));

        assert_eq!(exec.pending(), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_dispatcher_can_delegate_to_another_dispatcher() {
        let exec = Arc::new(ManualExecutor::new());
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let inner = AsyncHandler::new(exec.clone(), recording_handler(&seen));
        let outer = AsyncHandler::new(exec.clone(), Box::new(inner.clone()));

        outer.receive(Ok(9));
        assert_eq!(exec.run_all(), 2);
        assert_eq!(*seen.lock().unwrap(), vec![9]);

        // Muting the inner stage stops delivery; the outer keeps relaying.
        inner.mute();
        outer.receive(Ok(10));
        exec.run_all();
        assert_eq!(*seen.lock().unwrap(), vec![9]);
    }

    #[test]
    fn test_clones_share_the_mute_flag() {
        let exec = Arc::new(ManualExecutor::new());
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let handler = AsyncHandler::new(exec.clone(), recording_handler(&seen));
        let clone = handler.clone();

        clone.mute();
        handler.receive(Ok(1));
        exec.run_all();

        assert!(handler.is_muted());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_order_preserved_through_worker_queue() {
        // current_thread runtime: the worker only starts once we await, so
        // all events are queued in submission order first.
        let queue = Arc::new(WorkerQueue::new("ordered", 64));
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let handler = AsyncHandler::new(queue.clone(), recording_handler(&seen));

        for i in 0..8 {
            handler.receive(Ok(i));
        }
        queue.shutdown().await;

        assert_eq!(*seen.lock().unwrap(), (0..8).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_receive_never_blocks_on_a_full_queue() {
        // Capacity 1 and a current_thread runtime: the second and third
        // events are rejected at submit time, and receive still returns.
        let queue = Arc::new(WorkerQueue::new("full", 1));
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let handler = AsyncHandler::new(queue.clone(), recording_handler(&seen));

        handler.receive(Ok(1));
        handler.receive(Ok(2));
        handler.receive(Ok(3));
        queue.shutdown().await;

        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_mute_returns_after_inflight_delivery_completes() {
        let queue = Arc::new(WorkerQueue::new("inflight", 8));
        let delivered = Arc::new(AtomicUsize::new(0));
        let (entered_tx, entered_rx) = std::sync::mpsc::channel::<()>();

        let counter = Arc::clone(&delivered);
        let handler = AsyncHandler::new(
            queue.clone(),
            HandlerFn::boxed(move |_event: EventResult<u8>| {
                entered_tx.send(()).unwrap();
                std::thread::sleep(Duration::from_millis(150));
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        handler.receive(Ok(1));
        entered_rx.recv().unwrap();

        // The delegate is mid-call on the worker thread. mute() must wait
        // for it, so the count is visible as soon as mute() returns.
        handler.mute();
        assert_eq!(delivered.load(Ordering::SeqCst), 1);

        handler.receive(Ok(2));
        queue.shutdown().await;
        assert_eq!(delivered.load(Ordering::SeqCst), 1);
    }
}
