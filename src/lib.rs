//! # eventgate
//!
//! **Eventgate** is a small event-dispatch library for Rust.
//!
//! It wraps synchronous event handlers so that events are delivered on a
//! designated execution context (a worker queue) instead of the caller's
//! thread, and lets the handler be permanently muted at any time, from any
//! thread, with a hard guarantee: once `mute()` returns, the handler will
//! not observe another event. The crate is designed as a building block for
//! listener registries, watch APIs, and other subscription surfaces that
//! must tear handlers down while deliveries are still in flight.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//!   │  producer #1 │    │  producer #2 │    │  producer #N │
//!   └──────┬───────┘    └──────┬───────┘    └──────┬───────┘
//!          │ receive(Ok(v) | Err(e))              │
//!          ▼                  ▼                   ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  AsyncHandler<T>  (one per wrapped handler)                   │
//! │  - clones its shared state into each delivery job             │
//! │  - submits the job to the executor, never runs it inline      │
//! │  - gate: re-entrant lock over {muted flag, delegate calls}    │
//! └──────────────────────────────┬────────────────────────────────┘
//!                                ▼
//!                 ┌────────────────────────────┐
//!                 │  Executor (opaque context) │
//!                 │  WorkerQueue / Inline / …  │
//!                 └─────────────┬──────────────┘
//!                               │ later, any thread
//!                               ▼
//!                    lock gate ─► muted? ──yes──► drop event
//!                               │ no
//!                               ▼
//!                    delegate.receive(event)     (Handler<T>)
//! ```
//!
//! ### Mute
//! ```text
//! mute()                         delivery job
//!   │                                │
//!   ├─ lock gate ◄── mutual ────────►├─ lock gate
//!   ├─ muted = true   exclusion      ├─ muted? no ─► delegate.receive(..)
//!   └─ unlock, return                └─ unlock
//!
//! after mute() returns:
//!   - no delegate call is running (the gate was free when mute held it)
//!   - every later job observes muted = true and drops its event
//!   - queued jobs still run; they just no longer reach the delegate
//! ```
//!
//! ## Features
//! | Area           | Description                                                  | Key types / traits              |
//! |----------------|--------------------------------------------------------------|---------------------------------|
//! | **Handlers**   | Receive value-or-error events; closure adapter included.     | [`Handler`], [`HandlerFn`]      |
//! | **Dispatch**   | Executor-redirected delivery with synchronous mute.          | [`AsyncHandler`], [`MuteGuard`] |
//! | **Executors**  | Where delivery jobs run; serial FIFO queue included.         | [`Executor`], [`WorkerQueue`]   |
//! | **Test tools** | Deterministic executors for interleaving tests.              | [`ManualExecutor`], [`InlineExecutor`] |
//! | **Errors**     | Event error descriptor and executor rejection.               | [`EventError`], [`SubmitError`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogHandler`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventgate::{AsyncHandler, EventError, HandlerFn, WorkerQueue};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // One serial queue; a slow handler only backs up its own deliveries.
//!     let queue = Arc::new(WorkerQueue::new("delivery", 128));
//!
//!     let handler = AsyncHandler::new(
//!         queue.clone(),
//!         HandlerFn::boxed(|event| match event {
//!             Ok(value) => println!("value: {value}"),
//!             Err(err) => println!("upstream error: {err}"),
//!         }),
//!     );
//!
//!     handler.receive(Ok(5));
//!     handler.receive(Err(EventError::failed("stream broke")));
//!
//!     // Permanent, takes effect before returning: the handler will not
//!     // see the event below even though it gets scheduled.
//!     handler.mute();
//!     handler.receive(Ok(6));
//!
//!     queue.shutdown().await;
//! }
//! ```

mod dispatch;
mod error;
mod exec;
mod handlers;

// ---- Public re-exports ----

pub use dispatch::{AsyncHandler, MuteGuard};
pub use error::{EventError, SubmitError};
pub use exec::{Executor, InlineExecutor, Job, ManualExecutor, WorkerQueue};
pub use handlers::{BoxHandler, EventResult, Handler, HandlerFn};

// Optional: expose a simple built-in logging handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use handlers::LogHandler;
