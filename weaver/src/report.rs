//! What a mapping call copied and what it left at the default

use serde::Serialize;

use crate::member::MemberKind;

/// A member copied from source to destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemberRef {
    /// Field or property
    pub kind: MemberKind,
    /// Member name, identical on both sides
    pub name: &'static str,
}

/// Why a destination member was left at its default value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The source has no member of this kind and name
    NoCounterpart,
    /// The source member has the same name but a different declared type
    TypeMismatch {
        /// Declared type on the source
        source_type:      &'static str,
        /// Declared type on the destination
        destination_type: &'static str,
    },
    /// The destination member is read-only or computed
    ReadOnly,
    /// The source listed the member but produced no value for it
    Unreadable,
    /// The destination refused a value its table said it would accept
    Rejected,
}

/// A destination member that was not written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedMember {
    /// Field or property
    pub kind:   MemberKind,
    /// Destination member name
    pub name:   &'static str,
    /// Why it was skipped
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Outcome of one automatic mapping call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingReport {
    /// Concrete source type name
    pub source_type:      &'static str,
    /// Concrete destination type name
    pub destination_type: &'static str,
    /// Members written into the destination, fields first
    pub copied:           Vec<MemberRef>,
    /// Destination members left at their default value
    pub skipped:          Vec<SkippedMember>,
    /// Source members nothing in the destination consumed
    pub unused_source:    Vec<MemberRef>,
}

impl MappingReport {
    /// True when every destination member was written
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Whether the named member of the given kind was copied
    #[must_use]
    pub fn was_copied(&self, kind: MemberKind, name: &str) -> bool {
        self.copied
            .iter()
            .any(|member| member.kind == kind && member.name == name)
    }

    /// Skip reason for the named destination member, if it was skipped
    #[must_use]
    pub fn skip_reason(&self, kind: MemberKind, name: &str) -> Option<SkipReason> {
        self.skipped
            .iter()
            .find(|member| member.kind == kind && member.name == name)
            .map(|member| member.reason)
    }
}
