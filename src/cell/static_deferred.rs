//! `StaticDeferred` — deferred cell intended for long-lived objects.

use crate::cell::macros::{deferred_clone, deferred_lifecycle};
use crate::cell::raw::RawDeferred;
use crate::Deferred;

/// A deferred cell for objects that live for the whole process.
///
/// Behaves exactly like [`Deferred`]; the separate name documents intent.
/// Because [`new`](Self::new) is `const`, the cell can be placed in a `static`
/// behind a lock and constructed once the program has what it needs.
///
/// ```
/// use deferred::StaticDeferred;
/// use std::sync::Mutex;
///
/// static GREETING: Mutex<StaticDeferred<String>> = Mutex::new(StaticDeferred::new());
///
/// let mut slot = GREETING.lock().unwrap();
/// if !slot.is_constructed() {
///     slot.construct(String::from("hello"));
/// }
/// assert_eq!(slot.get(), "hello");
/// ```
pub struct StaticDeferred<T> {
    pub(crate) raw: RawDeferred<T>,
}

deferred_lifecycle!(StaticDeferred);
deferred_clone!(StaticDeferred);

impl<T> StaticDeferred<T> {
    /// Converts a [`Deferred`] into a `StaticDeferred`, keeping its state.
    #[inline]
    pub fn from_deferred(cell: Deferred<T>) -> Self {
        Self { raw: cell.raw }
    }

    /// Converts this cell into a [`Deferred`], keeping its state.
    #[inline]
    pub fn into_deferred(self) -> Deferred<T> {
        Deferred { raw: self.raw }
    }
}
