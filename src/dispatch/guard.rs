//! Scope guard that mutes a dispatcher on drop.
//!
//! [`MuteGuard`] ties [`AsyncHandler::mute`] to a scope: when the guard goes
//! away, so does delivery. Deciding *when* teardown happens stays with the
//! caller; the guard only makes sure mute is not forgotten on the way out.

use crate::dispatch::async_handler::AsyncHandler;

/// Guard that mutes its dispatcher when dropped.
///
/// Use [`remove`](MuteGuard::remove) to mute explicitly, or
/// [`detach`](MuteGuard::detach) to get the handler back without muting.
#[derive(Debug)]
pub struct MuteGuard<T> {
    handler: Option<AsyncHandler<T>>,
}

impl<T> MuteGuard<T> {
    /// Wraps a dispatcher handle. Other clones of the handle stay usable;
    /// the mute applies to all of them.
    #[must_use]
    pub fn new(handler: AsyncHandler<T>) -> Self {
        Self {
            handler: Some(handler),
        }
    }

    /// Mutes the dispatcher now. Equivalent to dropping the guard, just
    /// explicit at the call site.
    pub fn remove(mut self) {
        if let Some(handler) = self.handler.take() {
            handler.mute();
        }
    }

    /// Disarms the guard and returns the handler, leaving it unmuted.
    #[must_use]
    pub fn detach(mut self) -> AsyncHandler<T> {
        self.handler.take().expect("guard already consumed")
    }
}

impl<T> Drop for MuteGuard<T> {
    fn drop(&mut self) {
        if let Some(handler) = self.handler.take() {
            handler.mute();
        }
    }
}
