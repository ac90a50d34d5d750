//! Shared API surface for the public cell variants.
//!
//! Each variant is a newtype over [`RawDeferred`](crate::cell::raw::RawDeferred)
//! stored in a field named `raw`. `deferred_lifecycle!` stamps out the common
//! lifecycle methods and trait impls; `deferred_clone!` adds value-semantics
//! copying for the variants that allow it.

macro_rules! deferred_lifecycle {
    ($name:ident) => {
        impl<T> $name<T> {
            /// Creates an empty cell. Nothing is constructed and nothing is allocated.
            #[inline(always)]
            pub const fn new() -> Self {
                Self {
                    raw: $crate::cell::raw::RawDeferred::empty(),
                }
            }

            /// Creates a cell that already holds `value`.
            #[inline]
            pub fn from_value(value: T) -> Self {
                Self {
                    raw: $crate::cell::raw::RawDeferred::with_value(value),
                }
            }

            /// Creates a cell holding the value produced by `init`.
            ///
            /// A panic inside `init` propagates unchanged.
            #[inline]
            pub fn from_fn<F>(init: F) -> Self
            where
                F: FnOnce() -> T,
            {
                let mut cell = Self::new();
                cell.raw.construct_with(init);
                cell
            }

            /// Constructs `value` in the cell and returns a reference to it.
            ///
            /// The cell must be empty. Constructing twice trips a debug assertion;
            /// in release builds the previous value is leaked, never dropped twice.
            #[inline]
            #[track_caller]
            pub fn construct(&mut self, value: T) -> &mut T {
                self.raw.construct(value)
            }

            /// Constructs the value produced by `init` in the cell.
            ///
            /// Same contract as [`construct`](Self::construct). If `init` panics
            /// the cell stays empty.
            #[inline]
            #[track_caller]
            pub fn construct_with<F>(&mut self, init: F) -> &mut T
            where
                F: FnOnce() -> T,
            {
                self.raw.construct_with(init)
            }

            /// Constructs the value produced by a fallible `init`.
            ///
            /// On `Err` the error is returned unchanged and the cell stays empty.
            #[inline]
            #[track_caller]
            pub fn try_construct_with<F, E>(&mut self, init: F) -> Result<&mut T, E>
            where
                F: FnOnce() -> Result<T, E>,
            {
                self.raw.try_construct_with(init)
            }

            /// Drops the held value, if any, and leaves the cell empty.
            ///
            /// Calling this on an empty cell does nothing.
            #[inline]
            pub fn destruct(&mut self) {
                self.raw.destruct();
            }

            /// Returns `true` if the cell currently holds a value.
            #[inline(always)]
            pub const fn is_constructed(&self) -> bool {
                self.raw.is_init()
            }

            /// Returns a reference to the held value.
            ///
            /// # Panics
            /// Panics if the cell is empty.
            #[inline]
            #[track_caller]
            pub fn get(&self) -> &T {
                self.raw.get()
            }

            /// Returns a mutable reference to the held value.
            ///
            /// # Panics
            /// Panics if the cell is empty.
            #[inline]
            #[track_caller]
            pub fn get_mut(&mut self) -> &mut T {
                self.raw.get_mut()
            }

            /// Returns the held value, or `None` if the cell is empty.
            #[inline]
            pub fn try_get(&self) -> Option<&T> {
                self.raw.try_get()
            }

            /// Returns the held value mutably, or `None` if the cell is empty.
            #[inline]
            pub fn try_get_mut(&mut self) -> Option<&mut T> {
                self.raw.try_get_mut()
            }

            /// Returns the held value without checking the cell's state.
            ///
            /// # Safety
            /// The cell must hold a value. Debug builds assert this.
            #[inline(always)]
            #[track_caller]
            pub unsafe fn get_unchecked(&self) -> &T {
                // SAFETY: forwarded to the caller.
                unsafe { self.raw.get_unchecked() }
            }

            /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
            ///
            /// # Safety
            /// The cell must hold a value. Debug builds assert this.
            #[inline(always)]
            #[track_caller]
            pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
                // SAFETY: forwarded to the caller.
                unsafe { self.raw.get_unchecked_mut() }
            }

            /// Moves the held value out, leaving the cell empty.
            #[inline]
            pub fn take(&mut self) -> Option<T> {
                self.raw.take()
            }

            /// Stores `value`, returning the previously held value if there was one.
            #[inline]
            pub fn replace(&mut self, value: T) -> Option<T> {
                self.raw.replace(value)
            }

            /// Consumes the cell, returning the held value if there was one.
            #[inline]
            pub fn into_inner(mut self) -> Option<T> {
                self.raw.take()
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> From<T> for $name<T> {
            fn from(value: T) -> Self {
                Self::from_value(value)
            }
        }

        impl<T: core::fmt::Debug> core::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.raw.try_get() {
                    Some(value) => f.debug_tuple(stringify!($name)).field(value).finish(),
                    None => f
                        .debug_tuple(stringify!($name))
                        .field(&format_args!("<empty>"))
                        .finish(),
                }
            }
        }

        impl<T: PartialEq> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.raw.try_get() == other.raw.try_get()
            }
        }

        impl<T: Eq> Eq for $name<T> {}
    };
}

macro_rules! deferred_clone {
    ($name:ident) => {
        impl<T: Clone> Clone for $name<T> {
            /// Deep-copies the held value; an empty cell clones to an empty cell.
            fn clone(&self) -> Self {
                Self {
                    raw: self.raw.clone(),
                }
            }

            /// Drops this cell's value first, then copies `source`'s state into it.
            fn clone_from(&mut self, source: &Self) {
                self.raw.clone_from(&source.raw);
            }
        }
    };
}

pub(crate) use deferred_clone;
pub(crate) use deferred_lifecycle;
