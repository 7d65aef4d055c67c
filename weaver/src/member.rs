//! Member descriptors: the static shape of a type as seen by the mapper
//!
//! A descriptor records what the mapper needs to pair two members: the kind of
//! member, its name, its exact declared type and whether it can be written.

use std::any::TypeId;

use serde::Serialize;
use strum_macros::AsRefStr;
use strum_macros::Display;
use strum_macros::EnumIter;

/// The two kinds of data member, matched in separate passes
///
/// Iteration order is the pass order: fields first, then properties.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// A struct field
    Field,
    /// A getter (and optional setter) pair declared on the type
    Property,
}

/// Describes one data member of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberDescriptor {
    name:      &'static str,
    kind:      MemberKind,
    type_id:   TypeId,
    type_name: &'static str,
    writable:  bool,
}

impl MemberDescriptor {
    /// Describe a field of type `T`
    #[must_use]
    pub fn field<T: 'static>(name: &'static str, writable: bool) -> Self {
        Self::new::<T>(name, MemberKind::Field, writable)
    }

    /// Describe a property of type `T`; `writable` is true when it has a setter
    #[must_use]
    pub fn property<T: 'static>(name: &'static str, writable: bool) -> Self {
        Self::new::<T>(name, MemberKind::Property, writable)
    }

    fn new<T: 'static>(name: &'static str, kind: MemberKind, writable: bool) -> Self {
        Self {
            name,
            kind,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            writable,
        }
    }

    /// Member name, unique per type and kind
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Field or property
    #[must_use]
    pub const fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Exact declared type
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Declared type name, for diagnostics only
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the mapper may write this member
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        self.writable
    }

    /// Same kind and name
    #[must_use]
    pub fn same_slot(&self, other: &Self) -> bool {
        self.kind == other.kind && self.name == other.name
    }

    /// Same kind, same name and exactly the same declared type
    ///
    /// Writability is not considered here; a read-only destination still
    /// "matches" its source counterpart, it just is not written.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.same_slot(other) && self.type_id == other.type_id
    }
}
