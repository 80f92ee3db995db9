//! # ManualExecutor: deterministic execution for tests.
//!
//! [`ManualExecutor`] accepts jobs but never runs them on its own; the
//! caller drives execution with [`run_next`](ManualExecutor::run_next) or
//! [`run_all`](ManualExecutor::run_all). That separation makes "submitted
//! but not yet executed" a state a test can hold the system in, which is
//! exactly where the interesting mute/teardown interleavings live.
//!
//! ## Example
//! ```rust
//! use eventgate::{Executor, ManualExecutor};
//!
//! let exec = ManualExecutor::new();
//! exec.submit(Box::new(|| println!("later"))).unwrap();
//! assert_eq!(exec.pending(), 1);
//!
//! exec.run_all();
//! assert_eq!(exec.pending(), 0);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::error::SubmitError;
use crate::exec::executor::{Executor, Job};

/// Executor that queues jobs until the caller runs them explicitly.
#[derive(Default)]
pub struct ManualExecutor {
    jobs: Mutex<VecDeque<Job>>,
    closed: AtomicBool,
}

impl ManualExecutor {
    /// Creates an empty, open executor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the oldest queued job, if any. Returns whether one ran.
    ///
    /// The queue lock is released before the job runs, so a job may submit
    /// further jobs to this executor.
    pub fn run_next(&self) -> bool {
        let job = self.jobs.lock().pop_front();
        match job {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }

    /// Runs queued jobs until the queue is empty, including jobs enqueued
    /// while draining. Returns how many ran.
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }

    /// Number of jobs waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.jobs.lock().len()
    }

    /// Rejects all further submissions. Already-queued jobs stay runnable.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Relaxed);
    }
}

impl Executor for ManualExecutor {
    fn submit(&self, job: Job) -> Result<(), SubmitError> {
        if self.closed.load(Ordering::Relaxed) {
            return Err(SubmitError::Closed);
        }
        self.jobs.lock().push_back(job);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}
