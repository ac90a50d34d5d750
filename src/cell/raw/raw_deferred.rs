//! `RawDeferred` — inline slot + construction flag shared by all cell variants.
//!
//! The public cells (`Deferred`, `StackDeferred`, `StaticDeferred`) are thin
//! wrappers around this type; they differ only in which traits they expose.

use core::mem::MaybeUninit;

use crate::cell::raw::access::maybe_uninit as mu;

/// Inline storage for at most one `T`, plus the flag that says whether it is live.
///
/// Invariant: `value` holds a live `T` iff `is_init` is `true`.
pub(crate) struct RawDeferred<T> {
    value: MaybeUninit<T>,
    is_init: bool,
}

#[inline(always)]
fn trace_event<T>(event: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "deferred", ty = core::any::type_name::<T>(), "{}", event);
    #[cfg(not(feature = "tracing"))]
    let _ = event;
}

#[cold]
#[inline(never)]
#[track_caller]
fn access_violation() -> ! {
    panic!("deferred value accessed before construction")
}

impl<T> RawDeferred<T> {
    #[inline(always)]
    pub(crate) const fn empty() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            is_init: false,
        }
    }

    #[inline]
    pub(crate) fn with_value(value: T) -> Self {
        let mut raw = Self::empty();
        raw.write(value);
        raw
    }

    #[inline(always)]
    pub(crate) const fn is_init(&self) -> bool {
        self.is_init
    }

    /// Stores `value` and marks the slot live.
    ///
    /// A live value already in the slot is overwritten without being dropped
    /// (leaked). Callers check the construction contract before getting here.
    #[inline]
    fn write(&mut self, value: T) -> &mut T {
        trace_event::<T>("construct");
        let slot = self.value.write(value);
        self.is_init = true;
        slot
    }

    #[inline]
    #[track_caller]
    fn debug_check_empty(&self) {
        debug_assert!(!self.is_init, "deferred value constructed twice");
    }

    #[inline]
    #[track_caller]
    pub(crate) fn construct(&mut self, value: T) -> &mut T {
        self.debug_check_empty();
        self.write(value)
    }

    #[inline]
    #[track_caller]
    pub(crate) fn construct_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.debug_check_empty();
        // A panic in `init` unwinds before the flag is touched.
        let value = init();
        self.write(value)
    }

    #[inline]
    #[track_caller]
    pub(crate) fn try_construct_with<F, E>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.debug_check_empty();
        let value = init()?;
        Ok(self.write(value))
    }

    #[inline]
    pub(crate) fn destruct(&mut self) {
        if !self.is_init {
            return;
        }
        trace_event::<T>("destruct");
        // Cleared first so a panicking `Drop` cannot lead to a second drop.
        self.is_init = false;
        // SAFETY: `is_init` was true, and the flag is now cleared.
        unsafe { mu::drop_in_place_slot(&mut self.value) }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn get(&self) -> &T {
        if !self.is_init {
            access_violation();
        }
        // SAFETY: `is_init` is true.
        unsafe { mu::assume_init_ref(&self.value) }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn get_mut(&mut self) -> &mut T {
        if !self.is_init {
            access_violation();
        }
        // SAFETY: `is_init` is true.
        unsafe { mu::assume_init_mut(&mut self.value) }
    }

    #[inline]
    pub(crate) fn try_get(&self) -> Option<&T> {
        if self.is_init {
            // SAFETY: `is_init` is true.
            Some(unsafe { mu::assume_init_ref(&self.value) })
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn try_get_mut(&mut self) -> Option<&mut T> {
        if self.is_init {
            // SAFETY: `is_init` is true.
            Some(unsafe { mu::assume_init_mut(&mut self.value) })
        } else {
            None
        }
    }

    /// # Safety
    /// The slot must be initialized.
    #[inline(always)]
    #[track_caller]
    pub(crate) unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.is_init, "deferred value accessed before construction");
        // SAFETY: upheld by the caller.
        unsafe { mu::assume_init_ref(&self.value) }
    }

    /// # Safety
    /// The slot must be initialized.
    #[inline(always)]
    #[track_caller]
    pub(crate) unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.is_init, "deferred value accessed before construction");
        // SAFETY: upheld by the caller.
        unsafe { mu::assume_init_mut(&mut self.value) }
    }

    #[inline]
    pub(crate) fn take(&mut self) -> Option<T> {
        if !self.is_init {
            return None;
        }
        trace_event::<T>("take");
        self.is_init = false;
        // SAFETY: the slot was initialized and is now marked empty.
        Some(unsafe { mu::read_slot(&self.value) })
    }

    #[inline]
    pub(crate) fn replace(&mut self, value: T) -> Option<T> {
        let old = self.take();
        self.write(value);
        old
    }
}

impl<T: Clone> Clone for RawDeferred<T> {
    fn clone(&self) -> Self {
        match self.try_get() {
            Some(value) => Self::with_value(value.clone()),
            None => Self::empty(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.destruct();
        if let Some(value) = source.try_get() {
            self.write(value.clone());
        }
    }
}

impl<T> Drop for RawDeferred<T> {
    fn drop(&mut self) {
        self.destruct();
    }
}

#[cfg(test)]
mod tests {
    use super::RawDeferred;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    struct PanicOnDrop(Rc<Cell<usize>>);

    impl Drop for PanicOnDrop {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
            panic!("drop failed");
        }
    }

    #[test]
    fn test_flag_tracks_lifecycle() {
        let mut raw = RawDeferred::empty();
        assert!(!raw.is_init());
        raw.construct(1u8);
        assert!(raw.is_init());
        raw.destruct();
        assert!(!raw.is_init());
        assert_eq!(raw.replace(2), None);
        assert_eq!(raw.replace(3), Some(2));
        assert_eq!(raw.take(), Some(3));
        assert!(!raw.is_init());
    }

    #[test]
    fn test_panicking_drop_runs_once() {
        let drops = Rc::new(Cell::new(0));
        let mut raw = RawDeferred::with_value(PanicOnDrop(Rc::clone(&drops)));

        let result = catch_unwind(AssertUnwindSafe(|| raw.destruct()));
        assert!(result.is_err());
        assert!(!raw.is_init());
        assert_eq!(drops.get(), 1);

        // Dropping the cell afterwards must not touch the value again.
        drop(raw);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_panicking_init_leaves_slot_empty() {
        let mut raw: RawDeferred<String> = RawDeferred::empty();
        let result = catch_unwind(AssertUnwindSafe(|| {
            raw.construct_with(|| panic!("constructor failed"));
        }));
        assert!(result.is_err());
        assert!(!raw.is_init());
        assert_eq!(raw.try_get(), None);
    }

    #[test]
    #[should_panic(expected = "deferred value accessed before construction")]
    fn test_get_on_empty_panics() {
        let raw: RawDeferred<u32> = RawDeferred::empty();
        let _ = raw.get();
    }
}
