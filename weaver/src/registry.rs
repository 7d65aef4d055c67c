//! Process-wide table of member descriptors, one entry per concrete type
//!
//! Tables are built on first use and never change afterwards, so they are
//! leaked into `'static` slices and shared freely between threads.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::member::MemberDescriptor;

type Tables = HashMap<TypeId, &'static [MemberDescriptor]>;

static TABLES: Lazy<RwLock<Tables>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Get the member table for `T`, building it with `build` the first time `T` is seen
///
/// Derived `Weave` implementations call this from `members()`. Entries are only
/// ever inserted, so a poisoned lock still holds consistent data and is recovered.
pub fn members_of<T: 'static>(
    build: impl FnOnce() -> Vec<MemberDescriptor>,
) -> &'static [MemberDescriptor] {
    let key = TypeId::of::<T>();

    let cached = TABLES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .copied();
    if let Some(table) = cached {
        return table;
    }

    let mut tables = TABLES.write().unwrap_or_else(PoisonError::into_inner);
    *tables.entry(key).or_insert_with(|| {
        tracing::trace!(type_name = std::any::type_name::<T>(), "Building member table");
        Vec::leak(build())
    })
}
