//! `StackDeferred` — move-only deferred cell.

use crate::cell::macros::deferred_lifecycle;
use crate::cell::raw::RawDeferred;

/// A deferred cell without `Clone`.
///
/// Same lifecycle as [`Deferred`](crate::Deferred), but the cell can only be
/// moved, never copied. Moving the cell is a plain bitwise move of its inline
/// storage; the held value's own code never runs. This makes it a natural host
/// for values with restricted copy semantics such as atomics or locks.
///
/// ```
/// use deferred::StackDeferred;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let mut counter = StackDeferred::new();
/// counter.construct(AtomicUsize::new(0));
/// counter.get().fetch_add(1, Ordering::Relaxed);
///
/// let moved = counter;
/// assert_eq!(moved.get().load(Ordering::Relaxed), 1);
/// ```
pub struct StackDeferred<T> {
    pub(crate) raw: RawDeferred<T>,
}

deferred_lifecycle!(StackDeferred);
