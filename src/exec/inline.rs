//! Immediate execution context: runs each job inside `submit`.
//!
//! [`InlineExecutor`] gives up every scheduling property in exchange for
//! synchronous determinism: the job has already run when `submit` returns,
//! on the calling thread. Useful in tests and in single-threaded setups
//! where redirection would only add latency.

use crate::error::SubmitError;
use crate::exec::executor::{Executor, Job};

/// Executor that runs jobs on the calling thread, immediately.
///
/// Never rejects a job.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn submit(&self, job: Job) -> Result<(), SubmitError> {
        job();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "inline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_job_runs_before_submit_returns() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);

        InlineExecutor
            .submit(Box::new(move || flag.store(true, Ordering::SeqCst)))
            .unwrap();

        assert!(ran.load(Ordering::SeqCst));
    }
}
