//! # Simple logging handler for debugging and demos.
//!
//! [`LogHandler`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [event] value=5
//! [error] label=event_failed error: connection refused
//! ```

use std::fmt::Debug;

use crate::handlers::handler::{EventResult, Handler};

/// Simple stdout logging handler.
///
/// Enabled via the `logging` feature. Prints a human-readable line per event
/// for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Handler`] for
/// structured logging or metrics collection.
pub struct LogHandler;

impl<T: Debug + Send + Sync + 'static> Handler<T> for LogHandler {
    fn receive(&self, event: EventResult<T>) {
        match event {
            Ok(value) => println!("[event] value={value:?}"),
            Err(err) => println!("[error] label={} {}", err.as_label(), err.as_message()),
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
