//! Extension-style entry points callable on any value

use std::any::Any;

use error_stack::ResultExt;

use crate::custom;
use crate::custom::CustomMapper;
use crate::error::Result;
use crate::mapper;
use crate::reflect::Weave;
use crate::report::MappingReport;

/// `value.map_to::<D>()` and `value.map_with(&mapper)`, available on every `'static` type
pub trait MapTo: Any + Sized {
    /// Automatic mapping into a default-constructed `D`
    #[must_use]
    fn map_to<D: Weave + Default>(&self) -> D
    where
        Self: Weave,
    {
        mapper::map_to(self)
    }

    /// Automatic mapping, also returning the [`MappingReport`]
    #[must_use]
    fn map_to_with_report<D: Weave + Default>(&self) -> (D, MappingReport)
    where
        Self: Weave,
    {
        mapper::map_to_with_report(self)
    }

    /// Delegate to `mapper`, which expects a source of type `S`
    ///
    /// A `Box<dyn Any>` (optionally `+ Send` / `+ Sync`) is looked through and its
    /// contents are matched against `S`. Other smart pointers are matched as
    /// themselves, so dereference them first: `(*boxed).map_with(..)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TypeMismatch`] when the value is not an `S`.
    fn map_with<S, D, M>(&self, mapper: &M) -> Result<D>
    where
        S: Any,
        M: CustomMapper<S, D> + ?Sized,
    {
        custom::map_with(erased_contents(self), mapper)
            .attach(format!("Actual source type: {}", std::any::type_name::<Self>()))
    }
}

impl<T: Any> MapTo for T {}

/// `handle.map_any_with(&mapper)` for type-erased `dyn Any` handles
///
/// `MapTo` needs a sized receiver, so a `&dyn Any` or the inside of a
/// `Box<dyn Any>` reaches custom mappers through this trait instead.
pub trait MapAny {
    /// Downcast the handle to `S` and delegate to `mapper`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TypeMismatch`] when the handle does not hold an `S`.
    fn map_any_with<S, D, M>(&self, mapper: &M) -> Result<D>
    where
        S: Any,
        M: CustomMapper<S, D> + ?Sized;
}

impl MapAny for dyn Any {
    fn map_any_with<S, D, M>(&self, mapper: &M) -> Result<D>
    where
        S: Any,
        M: CustomMapper<S, D> + ?Sized,
    {
        custom::map_with(self, mapper)
    }
}

impl MapAny for dyn Any + Send {
    fn map_any_with<S, D, M>(&self, mapper: &M) -> Result<D>
    where
        S: Any,
        M: CustomMapper<S, D> + ?Sized,
    {
        custom::map_with(self, mapper)
    }
}

impl MapAny for dyn Any + Send + Sync {
    fn map_any_with<S, D, M>(&self, mapper: &M) -> Result<D>
    where
        S: Any,
        M: CustomMapper<S, D> + ?Sized,
    {
        custom::map_with(self, mapper)
    }
}

/// The value a boxed `dyn Any` holds, or `value` itself
fn erased_contents(value: &dyn Any) -> &dyn Any {
    if let Some(boxed) = value.downcast_ref::<Box<dyn Any>>() {
        return &**boxed;
    }
    if let Some(boxed) = value.downcast_ref::<Box<dyn Any + Send>>() {
        return &**boxed;
    }
    if let Some(boxed) = value.downcast_ref::<Box<dyn Any + Send + Sync>>() {
        return &**boxed;
    }
    value
}
