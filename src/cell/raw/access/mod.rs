//! Centralized unsafe accessors for the raw cell layer.
//!
//! Higher layers (`cell::raw::raw_deferred`, the public cell variants) must not
//! perform ad-hoc `ptr::*` / `MaybeUninit` unsafe operations; they call the
//! small, audited surface here instead.

pub(crate) mod maybe_uninit;
