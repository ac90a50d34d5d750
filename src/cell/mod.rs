//! Deferred cell family - inline slots whose value is constructed on demand.
//!
//! The module tree is stratified:
//! - `raw::*` holds the unsafe slot operations and the shared lifecycle core.
//! - `deferred`, `stack_deferred` and `static_deferred` are the public variants.
//! - `factory` holds free-function constructors.

mod macros;

pub mod deferred;
pub mod factory;
pub(crate) mod raw;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod stack_deferred;
pub mod static_deferred;

pub use deferred::Deferred;
pub use factory::{make_deferred, make_deferred_with, make_static_deferred};
pub use stack_deferred::StackDeferred;
pub use static_deferred::StaticDeferred;
