//! Raw building blocks shared by every deferred cell variant.
//!
//! This layer concentrates the unsafe code: `access` holds the slot operations
//! and `raw_deferred` holds the lifecycle state machine built on top of them.

pub(crate) mod access;
pub(crate) mod raw_deferred;

pub(crate) use raw_deferred::RawDeferred;
