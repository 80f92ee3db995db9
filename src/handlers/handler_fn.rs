//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(EventResult<T>)` and forwards every
//! event to it verbatim, errors included.
//!
//! ## Concurrency semantics
//! - The closure is `Fn`, not `FnMut`: calls may arrive from any thread the
//!   owning execution context uses, and the closure holds no exclusive
//!   state. If shared state is needed, put an `Arc<...>` inside the closure
//!   explicitly.
//!
//! ## Example
//! ```rust
//! use eventgate::{BoxHandler, EventResult, HandlerFn};
//!
//! let handler: BoxHandler<u32> = HandlerFn::boxed(|event: EventResult<u32>| {
//!     match event {
//!         Ok(value) => { let _ = value; /* use it */ }
//!         Err(err) => { let _ = err.as_label(); /* count it */ }
//!     }
//! });
//!
//! handler.receive(Ok(7));
//! ```

use crate::handlers::handler::{BoxHandler, EventResult, Handler};

/// Function-backed handler implementation.
///
/// Forwards each event to the stored closure, without filtering.
#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::boxed`] when you immediately need a
    /// [`BoxHandler`].
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the handler and returns it as an owned delegate handle.
    ///
    /// ## Example
    /// ```rust
    /// use eventgate::{BoxHandler, EventResult, HandlerFn};
    ///
    /// let h: BoxHandler<i32> = HandlerFn::boxed(|_event: EventResult<i32>| {});
    /// h.receive(Ok(1));
    /// ```
    pub fn boxed<T>(f: F) -> BoxHandler<T>
    where
        F: Fn(EventResult<T>) + Send + Sync + 'static,
    {
        Box::new(Self::new(f))
    }
}

impl<T, F> Handler<T> for HandlerFn<F>
where
    F: Fn(EventResult<T>) + Send + Sync + 'static, // Fn, not FnMut
{
    fn receive(&self, event: EventResult<T>) {
        (self.f)(event);
    }
}
