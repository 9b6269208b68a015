use crate::entry::Entry;
use crate::field::FieldName;

/// Result of checking a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// The first field, in check order, that failed its rule.
    Invalid(FieldName),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn failed_field(&self) -> Option<FieldName> {
        match self {
            Self::Valid => None,
            Self::Invalid(field) => Some(*field),
        }
    }
}

/// A batch of entries split into invalid and valid partitions.
///
/// Each invalid entry contributes one failure list. The lists hold a single
/// field today; the nested shape is kept so consumers can accept several
/// reasons per entry later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub invalid: Vec<Vec<FieldName>>,
    pub valid: Vec<Entry>,
}

impl Classification {
    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }

    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    pub fn total(&self) -> usize {
        self.invalid_count() + self.valid_count()
    }
}
