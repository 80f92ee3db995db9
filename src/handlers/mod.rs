//! Event handlers: the receiving end of the dispatch pipeline.
//!
//! This module groups the handler **capability** and its leaf
//! implementations.
//!
//! ## Contents
//! - [`Handler`], [`EventResult`], [`BoxHandler`] the single-method
//!   capability and its payload/handle aliases
//! - [`HandlerFn`] closure-backed handler
//! - [`LogHandler`] stdout debug handler (feature = `logging`)
//!
//! ## Quick reference
//! - **Callers**: [`AsyncHandler`](crate::AsyncHandler) delivery jobs are the
//!   only place a wrapped delegate is invoked; leaf handlers may also be
//!   driven directly when no redirection is needed.
//! - **Implementors**: anything `Send + Sync` with a `receive` method;
//!   [`HandlerFn`] covers the common closure case.

mod handler;
mod handler_fn;

#[cfg(feature = "logging")]
mod log;

pub use handler::{BoxHandler, EventResult, Handler};
pub use handler_fn::HandlerFn;

#[cfg(feature = "logging")]
pub use log::LogHandler;
