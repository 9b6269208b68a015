//! Field validation rules and entry classification.
//!
//! Each field has a pure predicate in [`rules`]. The classifier walks the
//! fields of every entry in [`FieldName::CHECK_ORDER`](entry_model::FieldName::CHECK_ORDER)
//! and stops at the first failure, so an invalid entry is reported with a
//! single reason even when several of its fields are wrong.

pub mod classify;
pub mod rules;

pub use classify::{check_entry, classify, entry_failures};
pub use rules::{
    FieldRule, RULES, check_academic_degree, check_address, check_height, check_passport_series,
    check_snils, check_telephone, check_university, check_work_experience, check_worldview,
};
