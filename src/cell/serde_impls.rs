//! `serde` support: every cell variant serializes like `Option<T>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Deferred, StackDeferred, StaticDeferred};

macro_rules! deferred_serde {
    ($name:ident) => {
        impl<T: Serialize> Serialize for $name<T> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.try_get().serialize(serializer)
            }
        }

        impl<'de, T: Deserialize<'de>> Deserialize<'de> for $name<T> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                Ok(match Option::<T>::deserialize(deserializer)? {
                    Some(value) => Self::from_value(value),
                    None => Self::new(),
                })
            }
        }
    };
}

deferred_serde!(Deferred);
deferred_serde!(StackDeferred);
deferred_serde!(StaticDeferred);
