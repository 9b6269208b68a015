//! Per-field syntax rules.
//!
//! Every pattern is matched against the whole value. Cyrillic letters are the
//! ranges `а-я` and `А-Я`, which leave out `ё` and `Ё`.

use std::sync::LazyLock;

use entry_model::FieldName;
use regex::Regex;

/// `+7-(DDD)-DDD-DD-DD`
static TELEPHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+7-\(\d{3}\)-\d{3}-\d{2}-\d{2}$").expect("Invalid telephone regex")
});

static SNILS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{11}$").expect("Invalid SNILS regex"));

static PASSPORT_SERIES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2} \d{2}$").expect("Invalid passport series regex"));

/// Street name followed directly by a house number.
static ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[а-яА-Я\-\s]+\d+$").expect("Invalid address regex"));

static UNIVERSITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[а-яА-Я\-\s.]+$").expect("Invalid university regex"));

/// Shared by academic degree and worldview. Only the plain space is allowed.
static LATIN_CYRILLIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zа-яА-Я \-]+$").expect("Invalid text regex"));

const HEIGHT_MIN: f64 = 1.20;
const HEIGHT_MAX: f64 = 2.10;
const WORK_EXPERIENCE_MIN: i64 = 2;
const WORK_EXPERIENCE_MAX: i64 = 20;

pub fn check_telephone(value: &str) -> bool {
    TELEPHONE_REGEX.is_match(value)
}

pub fn check_snils(value: &str) -> bool {
    SNILS_REGEX.is_match(value)
}

pub fn check_passport_series(value: &str) -> bool {
    PASSPORT_SERIES_REGEX.is_match(value)
}

/// Height in metres, exclusive on both ends.
pub fn check_height(value: &str) -> bool {
    match value.trim().parse::<f64>() {
        Ok(height) => height > HEIGHT_MIN && height < HEIGHT_MAX,
        Err(_) => false,
    }
}

/// Whole years of experience, at least 2 and below 20.
pub fn check_work_experience(value: &str) -> bool {
    match value.trim().parse::<i64>() {
        Ok(years) => (WORK_EXPERIENCE_MIN..WORK_EXPERIENCE_MAX).contains(&years),
        Err(_) => false,
    }
}

pub fn check_address(value: &str) -> bool {
    ADDRESS_REGEX.is_match(value)
}

pub fn check_university(value: &str) -> bool {
    UNIVERSITY_REGEX.is_match(value)
}

pub fn check_academic_degree(value: &str) -> bool {
    LATIN_CYRILLIC_REGEX.is_match(value)
}

pub fn check_worldview(value: &str) -> bool {
    LATIN_CYRILLIC_REGEX.is_match(value)
}

/// A field paired with its predicate.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: FieldName,
    pub check: fn(&str) -> bool,
    /// Short human-readable statement of what the rule accepts.
    pub description: &'static str,
}

impl FieldRule {
    pub fn is_valid(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

/// Rules in check order. The classifier reports the first rule that fails.
pub static RULES: [FieldRule; 9] = [
    FieldRule {
        field: FieldName::Telephone,
        check: check_telephone,
        description: "+7-(DDD)-DDD-DD-DD",
    },
    FieldRule {
        field: FieldName::Snils,
        check: check_snils,
        description: "exactly 11 digits",
    },
    FieldRule {
        field: FieldName::PassportSeries,
        check: check_passport_series,
        description: "DD DD",
    },
    FieldRule {
        field: FieldName::Height,
        check: check_height,
        description: "number, 1.20 < height < 2.10",
    },
    FieldRule {
        field: FieldName::WorkExperience,
        check: check_work_experience,
        description: "integer, 2 <= years < 20",
    },
    FieldRule {
        field: FieldName::Address,
        check: check_address,
        description: "Cyrillic letters, '-' or whitespace, then a house number",
    },
    FieldRule {
        field: FieldName::University,
        check: check_university,
        description: "Cyrillic letters, '-', '.' or whitespace",
    },
    FieldRule {
        field: FieldName::AcademicDegree,
        check: check_academic_degree,
        description: "Latin or Cyrillic letters, '-' or space",
    },
    FieldRule {
        field: FieldName::Worldview,
        check: check_worldview,
        description: "Latin or Cyrillic letters, '-' or space",
    },
];
