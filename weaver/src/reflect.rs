//! The `Weave` trait: typed member access standing in for runtime reflection
//!
//! Implementations are normally generated by `#[derive(Weave)]`, which emits a
//! member table plus `read_member` / `write_member` match arms for every
//! field and declared property.

use std::any::Any;

use crate::member::MemberDescriptor;
use crate::member::MemberKind;

/// Type-erased view of a value, available on every `'static` type
pub trait AsAny: Any {
    /// Borrow as `&dyn Any` so callers can downcast or read the concrete `TypeId`
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, for diagnostics only
    fn weave_type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn weave_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A type whose members can be enumerated, read and written by name
pub trait Weave: AsAny {
    /// The member table for this type, built once and shared
    fn members(&self) -> &'static [MemberDescriptor];

    /// Read a member by kind and name, cloning fields and calling property getters
    ///
    /// Returns `None` for unknown members.
    fn read_member(&self, kind: MemberKind, name: &str) -> Option<Box<dyn Any>>;

    /// Write a member by kind and name
    ///
    /// The value is handed back untouched when the member is unknown, not
    /// writable, or `value` is not exactly the member's declared type.
    fn write_member(
        &mut self,
        kind: MemberKind,
        name: &str,
        value: Box<dyn Any>,
    ) -> Result<(), Box<dyn Any>>;
}
