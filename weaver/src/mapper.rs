//! Automatic mapping: copy every member whose kind, name and type match exactly
//!
//! Mapping never fails. Members without an exact, writable counterpart keep the
//! destination's default value; the returned `MappingReport` says which ones.

use crate::plan::plan_for;
use crate::reflect::Weave;
use crate::report::MappingReport;
use crate::report::SkipReason;
use crate::report::SkippedMember;

/// Copy matching members from `source` into an existing `destination`
///
/// The source is only read. Destination members outside the plan are untouched.
pub fn weave_into(source: &dyn Weave, destination: &mut dyn Weave) -> MappingReport {
    let plan = plan_for(source, &*destination);

    let mut report = MappingReport {
        source_type:      source.weave_type_name(),
        destination_type: (*destination).weave_type_name(),
        copied:           Vec::with_capacity(plan.pairs().len()),
        skipped:          plan.skipped().to_vec(),
        unused_source:    plan.unused_source().to_vec(),
    };

    for pair in plan.pairs() {
        let Some(value) = source.read_member(pair.kind, pair.name) else {
            tracing::warn!(
                source = report.source_type,
                kind = %pair.kind,
                member = pair.name,
                "Source did not produce a value for a listed member"
            );
            report.skipped.push(SkippedMember {
                kind:   pair.kind,
                name:   pair.name,
                reason: SkipReason::Unreadable,
            });
            continue;
        };

        match destination.write_member(pair.kind, pair.name, value) {
            Ok(()) => {
                tracing::trace!(kind = %pair.kind, member = pair.name, "Copied member");
                report.copied.push(*pair);
            }
            Err(_) => {
                tracing::warn!(
                    destination = report.destination_type,
                    kind = %pair.kind,
                    member = pair.name,
                    "Destination rejected a value for a matching member"
                );
                report.skipped.push(SkippedMember {
                    kind:   pair.kind,
                    name:   pair.name,
                    reason: SkipReason::Rejected,
                });
            }
        }
    }

    tracing::debug!(
        source = report.source_type,
        destination = report.destination_type,
        copied = report.copied.len(),
        skipped = report.skipped.len(),
        "Mapped object"
    );

    report
}

/// Build a default `D` and copy every matching member of `source` into it
#[must_use]
pub fn map_to<D: Weave + Default>(source: &dyn Weave) -> D {
    map_to_with_report(source).0
}

/// Like [`map_to`], also returning what was copied and what was left at the default
#[must_use]
pub fn map_to_with_report<D: Weave + Default>(source: &dyn Weave) -> (D, MappingReport) {
    let mut destination = D::default();
    let report = weave_into(source, &mut destination);
    (destination, report)
}
