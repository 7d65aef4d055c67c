//! Procedural macros for `object_weaver`

mod attributes;
mod weave;

use proc_macro::TokenStream;

/// Derives `object_weaver::Weave` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// #[derive(Default, Weave)]
/// #[weave(property(name = "full_name", ty = "String", get = "full_name"))]
/// #[weave(property(name = "nickname", ty = "String", get = "nickname", set = "set_nickname"))]
/// pub struct EmployeeDto {
///     pub employee_id: Uuid,
///
///     #[weave(readonly)]
///     pub created_by: String, // read, never written
///
///     #[weave(skip)]
///     pub scratch: Vec<u8>,   // not a member
/// }
/// ```
///
/// This will generate:
/// - A member table with one field entry per non-skipped field and one property
///   entry per `property(...)`, built once per type
/// - `read_member`, which clones fields and calls property getters
/// - `write_member`, which assigns writable fields and calls property setters
///
/// Every field that is not skipped must be `Clone`. Getters take `&self` and
/// return `ty` by value; setters take `&mut self` and a `ty`.
#[proc_macro_derive(Weave, attributes(weave))]
pub fn derive_weave(input: TokenStream) -> TokenStream {
    weave::derive_weave_impl(input)
}
