//! Shallow object-to-object mapping
//!
//! Builds a new destination value and copies every member (field or property)
//! whose kind, name and declared type exactly match a member of the source.
//! Nothing is coerced, nested or collected: a member either matches exactly
//! and is cloned across, or the destination keeps its default.
//!
//! When the shapes diverge (renamed members, derived values) a [`CustomMapper`]
//! is passed explicitly instead.
//!
//! # Usage
//!
//! ```
//! use object_weaver::MapTo;
//! use object_weaver::Weave;
//!
//! #[derive(Default, Weave)]
//! struct PersonModel {
//!     first_name: String,
//!     age:        u32,
//! }
//!
//! #[derive(Default, Weave)]
//! #[weave(property(name = "greeting", ty = "String", get = "greeting"))]
//! struct PersonDto {
//!     first_name: String,
//!     age:        u64,
//! }
//!
//! impl PersonDto {
//!     fn greeting(&self) -> String {
//!         format!("Hello, {}", self.first_name)
//!     }
//! }
//!
//! let model = PersonModel {
//!     first_name: "Ada".to_string(),
//!     age:        36,
//! };
//! let dto: PersonDto = model.map_to();
//!
//! assert_eq!(dto.first_name, "Ada");
//! assert_eq!(dto.age, 0); // u32 and u64 do not match
//! assert_eq!(dto.greeting(), "Hello, Ada");
//! ```
//!
//! # Members
//!
//! `#[derive(Weave)]` describes every named field as a writable field member.
//! - `#[weave(readonly)]` on a field: read from, never written to
//! - `#[weave(skip)]` on a field: not a member at all
//! - `#[weave(property(name = "..", ty = "..", get = "..", set = ".."))]` on the
//!   struct: a property backed by a getter and, optionally, a setter
//!
//! Fields are matched against fields and properties against properties, in that
//! order.

extern crate self as object_weaver;

mod custom;
mod error;
mod ext;
mod mapper;
mod member;
mod plan;
pub mod registry;
mod reflect;
mod report;

pub use custom::CustomMapper;
pub use custom::map_with;
pub use error::Error;
pub use error::Result;
pub use ext::MapAny;
pub use ext::MapTo;
pub use mapper::map_to;
pub use mapper::map_to_with_report;
pub use mapper::weave_into;
pub use member::MemberDescriptor;
pub use member::MemberKind;
pub use object_weaver_macros::Weave;
pub use plan::MatchPlan;
pub use plan::plan_for;
pub use reflect::AsAny;
pub use reflect::Weave;
pub use report::MappingReport;
pub use report::MemberRef;
pub use report::SkipReason;
pub use report::SkippedMember;
