//! Match plans: which members to copy between one source type and one destination type
//!
//! Building a plan is the pairwise scan over both member tables. The result only
//! depends on the two types, so it is cached per `(source, destination)` pair.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

use itertools::Itertools;
use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use crate::member::MemberDescriptor;
use crate::member::MemberKind;
use crate::reflect::Weave;
use crate::report::MemberRef;
use crate::report::SkipReason;
use crate::report::SkippedMember;

type Plans = HashMap<(TypeId, TypeId), Arc<MatchPlan>>;

static PLANS: Lazy<RwLock<Plans>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// The copy instructions for one `(source, destination)` type pair
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchPlan {
    pairs:         Vec<MemberRef>,
    skipped:       Vec<SkippedMember>,
    unused_source: Vec<MemberRef>,
}

impl MatchPlan {
    /// Pair source and destination members by exact kind, name and type
    ///
    /// Runs one pass per member kind, fields before properties. Within a pass
    /// every source member is compared with every destination member.
    #[must_use]
    pub fn build(source: &[MemberDescriptor], destination: &[MemberDescriptor]) -> Self {
        let mut plan = Self::default();

        for kind in MemberKind::iter() {
            let source_members = source.iter().filter(|member| member.kind() == kind);
            let destination_members = destination.iter().filter(|member| member.kind() == kind);

            for (from, to) in source_members.cartesian_product(destination_members) {
                if from.matches(to) && to.is_writable() {
                    plan.pairs.push(MemberRef {
                        kind,
                        name: to.name(),
                    });
                }
            }

            for to in destination.iter().filter(|member| member.kind() == kind) {
                if let Some(reason) = skip_reason(source, to) {
                    plan.skipped.push(SkippedMember {
                        kind,
                        name: to.name(),
                        reason,
                    });
                }
            }

            for from in source.iter().filter(|member| member.kind() == kind) {
                let consumed = destination
                    .iter()
                    .any(|to| from.matches(to) && to.is_writable());
                if !consumed {
                    plan.unused_source.push(MemberRef {
                        kind,
                        name: from.name(),
                    });
                }
            }
        }

        plan
    }

    /// Members to copy, fields first
    #[must_use]
    pub fn pairs(&self) -> &[MemberRef] {
        &self.pairs
    }

    /// Destination members the plan leaves at their default
    #[must_use]
    pub fn skipped(&self) -> &[SkippedMember] {
        &self.skipped
    }

    /// Source members with no writable counterpart
    #[must_use]
    pub fn unused_source(&self) -> &[MemberRef] {
        &self.unused_source
    }
}

/// Why `to` would be left alone, or `None` when it gets written
fn skip_reason(source: &[MemberDescriptor], to: &MemberDescriptor) -> Option<SkipReason> {
    let same_slot: Vec<&MemberDescriptor> =
        source.iter().filter(|from| from.same_slot(to)).collect();

    if same_slot.is_empty() {
        return Some(SkipReason::NoCounterpart);
    }

    match same_slot.iter().find(|from| from.matches(to)) {
        Some(_) if to.is_writable() => None,
        Some(_) => Some(SkipReason::ReadOnly),
        None => Some(SkipReason::TypeMismatch {
            source_type:      same_slot[0].type_name(),
            destination_type: to.type_name(),
        }),
    }
}

/// Get the cached plan for mapping `source`'s type into `destination`'s type
pub fn plan_for(source: &dyn Weave, destination: &dyn Weave) -> Arc<MatchPlan> {
    let key = (source.as_any().type_id(), destination.as_any().type_id());

    let cached = PLANS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .cloned();
    if let Some(plan) = cached {
        return plan;
    }

    let plan = Arc::new(MatchPlan::build(source.members(), destination.members()));
    tracing::debug!(
        source = source.weave_type_name(),
        destination = destination.weave_type_name(),
        pairs = plan.pairs.len(),
        skipped = plan.skipped.len(),
        "Built match plan"
    );

    let mut plans = PLANS.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(plans.entry(key).or_insert(plan))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Vec<MemberDescriptor> {
        vec![
            MemberDescriptor::field::<u64>("id", true),
            MemberDescriptor::field::<String>("name", true),
            MemberDescriptor::field::<u32>("age", true),
            MemberDescriptor::property::<String>("display", false),
        ]
    }

    #[test]
    fn test_exact_matches_become_pairs() {
        let destination = vec![
            MemberDescriptor::field::<String>("name", true),
            MemberDescriptor::field::<u64>("id", true),
        ];

        let plan = MatchPlan::build(&person(), &destination);

        let names: Vec<&str> = plan.pairs().iter().map(|pair| pair.name).collect();
        assert_eq!(names, vec!["id", "name"]);
        assert!(plan.skipped().is_empty());
    }

    #[test]
    fn test_skip_reasons() {
        let destination = vec![
            MemberDescriptor::field::<u64>("age", true),
            MemberDescriptor::field::<u64>("id", false),
            MemberDescriptor::field::<bool>("active", true),
        ];

        let plan = MatchPlan::build(&person(), &destination);

        assert!(plan.pairs().is_empty());
        assert_eq!(
            plan.skipped(),
            &[
                SkippedMember {
                    kind:   MemberKind::Field,
                    name:   "age",
                    reason: SkipReason::TypeMismatch {
                        source_type:      std::any::type_name::<u32>(),
                        destination_type: std::any::type_name::<u64>(),
                    },
                },
                SkippedMember {
                    kind:   MemberKind::Field,
                    name:   "id",
                    reason: SkipReason::ReadOnly,
                },
                SkippedMember {
                    kind:   MemberKind::Field,
                    name:   "active",
                    reason: SkipReason::NoCounterpart,
                },
            ]
        );
    }

    #[test]
    fn test_fields_do_not_pair_with_properties() {
        let destination = vec![MemberDescriptor::property::<String>("name", true)];

        let plan = MatchPlan::build(&person(), &destination);

        assert!(plan.pairs().is_empty());
        assert_eq!(plan.skipped()[0].reason, SkipReason::NoCounterpart);
    }

    #[test]
    fn test_unused_source_members_are_listed_per_kind() {
        let destination = vec![MemberDescriptor::field::<u64>("id", true)];

        let plan = MatchPlan::build(&person(), &destination);

        let unused: Vec<(MemberKind, &str)> = plan
            .unused_source()
            .iter()
            .map(|member| (member.kind, member.name))
            .collect();
        assert_eq!(
            unused,
            vec![
                (MemberKind::Field, "name"),
                (MemberKind::Field, "age"),
                (MemberKind::Property, "display"),
            ]
        );
    }

    #[test]
    fn test_property_pass_runs_after_field_pass() {
        let source = vec![
            MemberDescriptor::property::<String>("label", false),
            MemberDescriptor::field::<u8>("level", true),
        ];
        let destination = vec![
            MemberDescriptor::property::<String>("label", true),
            MemberDescriptor::field::<u8>("level", true),
        ];

        let plan = MatchPlan::build(&source, &destination);

        let kinds: Vec<MemberKind> = plan.pairs().iter().map(|pair| pair.kind).collect();
        assert_eq!(kinds, vec![MemberKind::Field, MemberKind::Property]);
    }
}
