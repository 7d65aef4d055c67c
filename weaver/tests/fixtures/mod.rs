//! Models, DTOs and mappers shared by the integration tests

#![allow(dead_code, reason = "each test binary uses a different subset of the fixtures")]

use object_weaver::CustomMapper;
use object_weaver::Weave;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Install a test subscriber honouring `RUST_LOG`; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Domain model used as the mapping source
#[derive(Debug, Clone, PartialEq, Eq, Default, Weave)]
pub struct PersonModel {
    pub id:         Uuid,
    pub first_name: String,
    pub last_name:  String,
    pub age:        i32,
    pub is_active:  bool,
}

impl PersonModel {
    pub fn sample() -> Self {
        Self {
            id:         Uuid::new_v4(),
            first_name: "MohammadReza".to_string(),
            last_name:  "Lamei".to_string(),
            age:        25,
            is_active:  true,
        }
    }
}

/// DTO sharing every member of `PersonModel`
#[derive(Debug, Clone, PartialEq, Eq, Default, Weave)]
pub struct PersonDto {
    pub id:         Uuid,
    pub first_name: String,
    pub last_name:  String,
    pub age:        i32,
    pub is_active:  bool,
}

/// DTO whose members are all renamed, plus a computed `full_name`
#[derive(Debug, Clone, PartialEq, Eq, Default, Weave)]
#[weave(property(name = "full_name", ty = "String", get = "full_name"))]
pub struct EmployeeDto {
    pub employee_id:         Uuid,
    pub employee_first_name: String,
    pub employee_last_name:  String,
    pub employee_age:        i32,
    pub employee_is_active:  bool,
}

impl EmployeeDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.employee_first_name, self.employee_last_name)
    }
}

/// DTO with a superset of `PersonModel`'s members, some of a different type
#[derive(Debug, Clone, PartialEq, Default, Weave)]
#[weave(property(name = "display_name", ty = "String", get = "display_name", set = "set_display_name"))]
pub struct PersonSummary {
    pub id:         Uuid,
    pub first_name: String,
    pub last_name:  String,
    pub age:        i64,
    pub is_active:  bool,
    pub department: Option<String>,
    pub rating:     f32,
    #[weave(readonly)]
    pub revision:   u32,
    #[weave(skip)]
    pub(crate) display_name: String,
}

impl PersonSummary {
    pub fn display_name(&self) -> String {
        self.display_name.clone()
    }

    pub fn set_display_name(&mut self, display_name: String) {
        self.display_name = display_name;
    }
}

/// Maps a `PersonModel` onto the renamed members of `EmployeeDto`
pub struct PersonToEmployeeMapper;

impl CustomMapper<PersonModel, EmployeeDto> for PersonToEmployeeMapper {
    fn map(&self, source: &PersonModel) -> EmployeeDto {
        EmployeeDto {
            employee_id:         source.id,
            employee_first_name: source.first_name.clone(),
            employee_last_name:  source.last_name.clone(),
            employee_age:        source.age,
            employee_is_active:  source.is_active,
        }
    }
}
