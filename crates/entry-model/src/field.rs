//! Field names of a user entry.

use std::fmt;

/// One of the nine fields every entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Telephone,
    Height,
    Snils,
    PassportSeries,
    University,
    WorkExperience,
    AcademicDegree,
    Worldview,
    Address,
}

impl FieldName {
    /// All fields in report order.
    ///
    /// Error summaries and the valid-records dump list fields in this order.
    pub const ALL: [FieldName; 9] = [
        FieldName::Telephone,
        FieldName::Height,
        FieldName::Snils,
        FieldName::PassportSeries,
        FieldName::University,
        FieldName::WorkExperience,
        FieldName::AcademicDegree,
        FieldName::Worldview,
        FieldName::Address,
    ];

    /// All fields in the order the classifier checks them.
    pub const CHECK_ORDER: [FieldName; 9] = [
        FieldName::Telephone,
        FieldName::Snils,
        FieldName::PassportSeries,
        FieldName::Height,
        FieldName::WorkExperience,
        FieldName::Address,
        FieldName::University,
        FieldName::AcademicDegree,
        FieldName::Worldview,
    ];

    /// Key used for this field in input and output documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Telephone => "telephone",
            Self::Height => "height",
            Self::Snils => "snils",
            Self::PassportSeries => "passport_series",
            Self::University => "university",
            Self::WorkExperience => "work_experience",
            Self::AcademicDegree => "academic_degree",
            Self::Worldview => "worldview",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_order_is_permutation_of_all() {
        let mut all = FieldName::ALL.to_vec();
        let mut checked = FieldName::CHECK_ORDER.to_vec();
        all.sort();
        checked.sort();
        assert_eq!(all, checked);
    }
}
