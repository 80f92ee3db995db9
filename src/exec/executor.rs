//! # Execution-context trait.
//!
//! Provides [`Executor`] the submission seam between event producers and the
//! context that runs delivery jobs, plus the [`Job`] alias for the unit of
//! work.
//!
//! ## Rules
//! - `submit` never blocks: an executor either accepts the job or rejects it
//!   with a [`SubmitError`] immediately.
//! - Accepted jobs eventually run, on any thread the executor owns, unless
//!   the executor is cancelled first. Each executor documents its own
//!   shutdown behavior.
//! - Ordering is an executor property. [`WorkerQueue`](crate::WorkerQueue)
//!   preserves submission order; other implementations may not.

use crate::error::SubmitError;

/// Unit of work accepted by an executor.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// # Task-scheduling collaborator that runs submitted jobs.
///
/// Implementations must be thread-safe: any number of threads may submit
/// concurrently.
pub trait Executor: Send + Sync + 'static {
    /// Schedules `job` for later execution.
    ///
    /// Returns an error if the job cannot be accepted. Rejected jobs are
    /// dropped; there is no retry at this layer.
    fn submit(&self, job: Job) -> Result<(), SubmitError>;

    /// Returns the executor name used in logs.
    ///
    /// The default uses `type_name::<Self>()` - override it with a short
    /// name when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
