//! Unsafe, centralized operations on the `MaybeUninit<T>` slot of a deferred cell.
//!
//! Every cell variant stores its value inline as a `MaybeUninit<T>` next to an
//! `is_init` flag. These helpers are the only place in the crate that turns the
//! slot into a `T`:
//! - references (`assume_init_ref` / `assume_init_mut`)
//! - bitwise moves out of the slot (`read_slot`)
//! - in-place drops (`drop_in_place_slot`)
//!
//! ## Core invariant
//! The slot is initialized *exactly when* the owning cell's `is_init` flag is set.
//! Callers flip the flag after a successful write and clear it before a value
//! leaves the slot (by read or by drop).

use core::{mem::MaybeUninit, ptr};

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` guarantees exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves an initialized value out of a slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The slot must be treated as uninitialized afterwards, otherwise the value
///   is dropped twice.
#[inline(always)]
pub(crate) unsafe fn read_slot<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and gives up the slot's ownership.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Drops an initialized value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place_slot<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}
