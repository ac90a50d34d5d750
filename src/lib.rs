//! # `deferred` - Inline Deferred-Construction Cells
//!
//! Value holders that reserve storage for one `T` inline and construct the value
//! only when asked. No heap allocation is involved: the slot is a
//! `MaybeUninit<T>` living inside the cell, next to a flag recording whether the
//! slot currently holds a live value.
//!
//! ## Lifecycle
//!
//! A cell is either **empty** or **constructed**.
//! - `new()` / `Default` create an empty cell; `from_value`, `from_fn`, `From<T>`
//!   and the `make_*` helpers create a constructed one.
//! - `construct*` moves an empty cell to constructed.
//! - `destruct`, `take` and the cell's own drop move it back to empty. The held
//!   value is dropped exactly once.
//!
//! ## Contract checks
//!
//! - Constructing into a constructed cell is a caller bug, caught by a
//!   `debug_assert!`. Release builds leak the previous value instead of
//!   dropping it twice.
//! - `get` / `get_mut` on an empty cell panic. `try_get*` return `None`, and the
//!   `unsafe` `get_unchecked*` accessors skip the check entirely in release builds.
//!
//! ## Variants
//!
//! | Type | `Clone` | Intended use |
//! |------|---------|--------------|
//! | [`Deferred`] | deep copy | locals and struct members |
//! | [`StackDeferred`] | no | move-only hosts (atomics, locks, handles) |
//! | [`StaticDeferred`] | deep copy | long-lived objects, `static` slots behind a lock |
//!
//! Moving a cell is a bitwise move. To move the value out of a cell that stays
//! in place, use `take` or `std::mem::take`; both leave the source empty.
//!
//! ## Features
//!
//! - `serde` (default): cells serialize as `Option<T>`.
//! - `tracing`: emit `trace`-level lifecycle events under the `deferred` target.
//!
//! ## Example
//!
//! ```rust
//! use deferred::Deferred;
//!
//! struct Service {
//!     connection: Deferred<String>,
//! }
//!
//! let mut service = Service { connection: Deferred::new() };
//! assert!(!service.connection.is_constructed());
//!
//! service.connection.construct_with(|| format!("db://{}", "primary"));
//! assert_eq!(service.connection.get(), "db://primary");
//!
//! let copy = service.connection.clone();
//! service.connection.destruct();
//! assert_eq!(copy.get(), "db://primary");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;

pub use cell::{
    make_deferred,
    make_deferred_with,
    make_static_deferred,
    Deferred,
    StackDeferred,
    StaticDeferred,
};

// Compile-time assertions for the inline layout.
const _: () = {
    use core::mem;

    // The slot keeps the alignment of the held type.
    assert!(mem::align_of::<Deferred<u64>>() == mem::align_of::<u64>());
    assert!(mem::align_of::<StackDeferred<u16>>() == mem::align_of::<u16>());

    // Storage is the value plus one flag, rounded up to the alignment.
    assert!(mem::size_of::<Deferred<u8>>() == 2);
    assert!(mem::size_of::<Deferred<u64>>() == 2 * mem::size_of::<u64>());
    assert!(mem::size_of::<StackDeferred<[u32; 4]>>() == 20);
    assert!(mem::size_of::<Deferred<()>>() == 1);

    // Variants share one layout.
    assert!(mem::size_of::<StaticDeferred<u64>>() == mem::size_of::<Deferred<u64>>());
    assert!(mem::size_of::<StackDeferred<u64>>() == mem::size_of::<Deferred<u64>>());
};
