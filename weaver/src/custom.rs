//! Custom mappers: caller-supplied transformations for one source/destination pair
//!
//! There is no registry. The caller picks the mapper for each call and the
//! result is returned exactly as the mapper produced it.

use std::any::Any;

use error_stack::Report;

use crate::error::Error;
use crate::error::Result;

/// Transforms a borrowed `S` into a new `D`
///
/// Implement this when automatic matching is not enough: renamed members,
/// derived values, conditional logic. Any `Fn(&S) -> D` closure is a mapper too.
/// A mapper that can fail should use a `Result` as its destination type.
pub trait CustomMapper<S: ?Sized, D> {
    /// Produce the destination value from `source`
    fn map(&self, source: &S) -> D;
}

impl<S: ?Sized, D, F> CustomMapper<S, D> for F
where
    F: Fn(&S) -> D,
{
    fn map(&self, source: &S) -> D {
        self(source)
    }
}

/// Downcast `object` to `S` and hand it to `mapper`
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] when `object` is not an `S`. The mapper is not
/// called in that case.
pub fn map_with<S, D, M>(object: &dyn Any, mapper: &M) -> Result<D>
where
    S: Any,
    M: CustomMapper<S, D> + ?Sized,
{
    let Some(source) = object.downcast_ref::<S>() else {
        tracing::warn!(
            expected = std::any::type_name::<S>(),
            "Custom mapper received an object of another type"
        );
        return Err(Report::new(Error::type_mismatch::<S>()));
    };

    Ok(mapper.map(source))
}
