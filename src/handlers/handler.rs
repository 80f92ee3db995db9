//! # Event handler trait.
//!
//! Provides [`Handler`] an extension point for plugging event consumers into
//! the dispatch pipeline, plus the payload alias [`EventResult`] and the
//! owned-handle alias [`BoxHandler`].
//!
//! ## Rules
//! - `receive` is the sole entry point and is called at most once per
//!   emitted event.
//! - The payload is a value **or** an error; the handler itself branches on
//!   success/failure. Nothing upstream filters errors out.
//! - Calls into one handler instance are serialized by whoever owns it
//!   (see [`AsyncHandler`](crate::AsyncHandler)); implementations do not
//!   need their own locking for that.
//!
//! ## Implementing custom handlers
//! ```rust
//! use eventgate::{EventResult, Handler};
//!
//! struct Counter(std::sync::atomic::AtomicUsize);
//!
//! impl Handler<u64> for Counter {
//!     fn receive(&self, event: EventResult<u64>) {
//!         if event.is_ok() {
//!             self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//! ```

use crate::error::EventError;

/// Payload delivered to a handler: a value of `T` or an upstream error.
///
/// The dispatch layer treats this as opaque cargo and forwards it unchanged.
pub type EventResult<T> = Result<T, EventError>;

/// Owned handler handle, suitable for storing as an exclusive delegate.
pub type BoxHandler<T> = Box<dyn Handler<T>>;

/// # Single-method capability that receives value-or-error events.
///
/// ### Implementation requirements
/// - Handle errors internally; do not panic. Delivery workers isolate
///   panics, but a panicking handler loses its own event.
/// - Return promptly. A handler that blocks stalls every event queued
///   behind it on the same execution context.
pub trait Handler<T>: Send + Sync + 'static {
    /// Consumes a single event, value and error alike.
    fn receive(&self, event: EventResult<T>);

    /// Returns the handler name used in logs.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit", "cache").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
