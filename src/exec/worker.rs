//! # WorkerQueue: serial FIFO execution context on a dedicated worker task.
//!
//! [`WorkerQueue`] runs submitted jobs **in submission order** on a single
//! tokio worker task, behind a bounded queue.
//!
//! ## What it guarantees
//! - `submit` returns immediately (bounded `try_send`).
//! - FIFO execution: jobs run one at a time, in the order accepted.
//! - Panics inside jobs are caught and logged (isolation); the worker keeps
//!   draining.
//!
//! ## What it does **not** guarantee
//! - No delivery of jobs rejected with [`SubmitError::QueueFull`].
//! - No execution of jobs still queued when [`WorkerQueue::cancel`] fires.
//!
//! ## Diagram
//! ```text
//!    submit(job)                         worker task
//!        │                                   │
//!        └──► [bounded mpsc queue] ──recv──► run job (catch panic)
//!                                            │
//!                            cancel() ───────┤ exit without draining
//!                            shutdown() ─────┘ drain queue, then exit
//! ```
//!
//! ## Example
//! ```rust
//! use eventgate::{Executor, WorkerQueue};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let queue = WorkerQueue::new("delivery", 128);
//!     queue
//!         .submit(Box::new(|| println!("ran on the worker")))
//!         .expect("queue accepts while open");
//!     queue.shutdown().await;
//! }
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};

use parking_lot::Mutex;
use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::error::SubmitError;
use crate::exec::executor::{Executor, Job};

/// Serial FIFO execution context with a bounded queue and one worker task.
///
/// Must be created inside a tokio runtime: construction spawns the worker.
pub struct WorkerQueue {
    name: &'static str,
    tx: Mutex<Option<mpsc::Sender<Job>>>,
    token: CancellationToken,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl WorkerQueue {
    /// Creates a new queue and spawns its worker task.
    ///
    /// `capacity` is clamped to a minimum of 1. Jobs submitted past capacity
    /// are rejected with [`SubmitError::QueueFull`], never queued unbounded.
    #[must_use]
    pub fn new(name: &'static str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, mut rx) = mpsc::channel::<Job>(capacity);
        let token = CancellationToken::new();
        let worker_token = token.clone();

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    () = worker_token.cancelled() => break,
                    job = rx.recv() => {
                        let Some(job) = job else { break };
                        if let Err(panic_err) = catch_unwind(AssertUnwindSafe(job)) {
                            eprintln!("[eventgate] worker '{name}' job panicked: {panic_err:?}");
                        }
                    }
                }
            }
        });

        Self {
            name,
            tx: Mutex::new(Some(tx)),
            token,
            worker: Mutex::new(Some(handle)),
        }
    }

    /// Graceful shutdown: stop accepting jobs, drain what was accepted,
    /// await worker completion.
    ///
    /// Subsequent `submit` calls fail with [`SubmitError::Closed`]. Safe to
    /// call more than once; later calls return once the worker is gone.
    pub async fn shutdown(&self) {
        self.tx.lock().take();
        let worker = self.worker.lock().take();
        if let Some(worker) = worker {
            let _ = worker.await;
        }
    }

    /// Stops the worker without draining: jobs still queued are dropped.
    ///
    /// The job currently running (if any) completes; the worker exits before
    /// picking up another. Call [`WorkerQueue::shutdown`] afterwards to join
    /// the worker task.
    pub fn cancel(&self) {
        self.token.cancel();
        self.tx.lock().take();
    }

    /// True once the queue no longer accepts jobs.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.lock().is_none()
    }
}

impl Executor for WorkerQueue {
    fn submit(&self, job: Job) -> Result<(), SubmitError> {
        let tx = self.tx.lock();
        let Some(tx) = tx.as_ref() else {
            return Err(SubmitError::Closed);
        };
        tx.try_send(job).map_err(|err| match err {
            TrySendError::Full(_) => SubmitError::QueueFull,
            TrySendError::Closed(_) => SubmitError::Closed,
        })
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
