//! Dispatch layer: executor-redirected delivery with permanent muting.
//!
//! This module contains the dispatcher that sits between event producers and
//! handlers.
//!
//! ## Contents
//! - [`AsyncHandler`] the decorator: schedule-on-executor delivery plus a
//!   synchronous, one-way mute
//! - [`MuteGuard`] RAII handle that mutes on drop
//!
//! See `async_handler.rs` for the delivery/mute contract in full.

mod async_handler;
mod guard;

pub use async_handler::AsyncHandler;
pub use guard::MuteGuard;
