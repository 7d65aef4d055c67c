//! Property-based checks of the mapping guarantees

mod fixtures;

use fixtures::EmployeeDto;
use fixtures::PersonDto;
use fixtures::PersonModel;
use fixtures::PersonSummary;
use fixtures::PersonToEmployeeMapper;
use object_weaver::MapTo;
use proptest::prelude::*;
use uuid::Uuid;

fn person_model() -> impl Strategy<Value = PersonModel> {
    (
        any::<u128>(),
        "[A-Za-z]{0,12}",
        "[A-Za-z' -]{0,16}",
        any::<i32>(),
        any::<bool>(),
    )
        .prop_map(|(id, first_name, last_name, age, is_active)| PersonModel {
            id: Uuid::from_u128(id),
            first_name,
            last_name,
            age,
            is_active,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: every member with the same name and type is copied
    #[test]
    fn matching_members_are_copied(model in person_model()) {
        let dto = model.map_to::<PersonDto>();

        prop_assert_eq!(dto.id, model.id);
        prop_assert_eq!(&dto.first_name, &model.first_name);
        prop_assert_eq!(&dto.last_name, &model.last_name);
        prop_assert_eq!(dto.age, model.age);
        prop_assert_eq!(dto.is_active, model.is_active);
    }

    /// Property: destination members without an exact match keep their default
    #[test]
    fn unmatched_members_keep_defaults(model in person_model()) {
        let summary = model.map_to::<PersonSummary>();
        let defaults = PersonSummary::default();

        prop_assert_eq!(summary.age, defaults.age);
        prop_assert_eq!(&summary.department, &defaults.department);
        prop_assert_eq!(summary.revision, defaults.revision);
        prop_assert_eq!(summary.display_name(), defaults.display_name());
        prop_assert_eq!(summary.id, model.id);
    }

    /// Property: mapping to a DTO and back reproduces the original
    #[test]
    fn round_trip_reproduces_source(model in person_model()) {
        let back = model.map_to::<PersonDto>().map_to::<PersonModel>();

        prop_assert_eq!(back, model);
    }

    /// Property: the same custom mapper with equal inputs gives equal outputs
    #[test]
    fn custom_mapper_is_deterministic(model in person_model()) {
        let copy = model.clone();

        let first = model.map_with::<PersonModel, EmployeeDto, _>(&PersonToEmployeeMapper);
        let second = copy.map_with::<PersonModel, EmployeeDto, _>(&PersonToEmployeeMapper);

        prop_assert_eq!(first.ok(), second.ok());
    }
}
