//! Free-function constructors for already-constructed cells.

use crate::{Deferred, StaticDeferred};

/// Builds a constructed [`Deferred`] holding `value`.
///
/// ```
/// let cell = deferred::make_deferred(42);
/// assert_eq!(*cell.get(), 42);
/// ```
#[inline]
pub fn make_deferred<T>(value: T) -> Deferred<T> {
    Deferred::from_value(value)
}

/// Builds a constructed [`Deferred`] from the value returned by `init`.
#[inline]
pub fn make_deferred_with<T, F>(init: F) -> Deferred<T>
where
    F: FnOnce() -> T,
{
    Deferred::from_fn(init)
}

/// Builds a constructed [`StaticDeferred`] holding `value`.
#[inline]
pub fn make_static_deferred<T>(value: T) -> StaticDeferred<T> {
    StaticDeferred::from_value(value)
}
