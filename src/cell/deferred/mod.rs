//! `Deferred` — a cell whose value is constructed on demand, stored inline.


use crate::cell::macros::{deferred_clone, deferred_lifecycle};
use crate::cell::raw::RawDeferred;

/// A slot for one `T` that starts empty and is constructed explicitly.
///
/// The value lives inline in the cell (no heap allocation). The cell tracks
/// whether it is constructed and drops the value exactly once: on
/// [`destruct`](Self::destruct), or when the cell itself goes out of scope.
///
/// Cloning a constructed cell deep-copies the value; cloning an empty cell
/// yields an empty cell. Moving the value out of a cell that stays in place is
/// done with [`take`](Self::take) or `std::mem::take`, both of which leave the
/// source empty.
///
/// # Examples
///
/// ```
/// use deferred::Deferred;
///
/// let mut cell = Deferred::new();
/// assert!(!cell.is_constructed());
///
/// cell.construct(42);
/// assert_eq!(*cell.get(), 42);
///
/// cell.destruct();
/// assert!(!cell.is_constructed());
///
/// cell.construct(43);
/// assert_eq!(*cell.get(), 43);
/// ```
pub struct Deferred<T> {
    pub(crate) raw: RawDeferred<T>,
}

deferred_lifecycle!(Deferred);
deferred_clone!(Deferred);
