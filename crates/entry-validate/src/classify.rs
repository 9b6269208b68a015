//! Entry classification.

use entry_model::{Classification, Entry, FieldName, ValidationOutcome};
use tracing::{debug, info};

use crate::rules::RULES;

/// Check an entry field by field, stopping at the first failure.
pub fn check_entry(entry: &Entry) -> ValidationOutcome {
    RULES
        .iter()
        .find(|rule| !rule.is_valid(entry.get(rule.field)))
        .map_or(ValidationOutcome::Valid, |rule| {
            ValidationOutcome::Invalid(rule.field)
        })
}

/// Failure reasons for one entry: empty when valid, otherwise the single
/// field that failed first.
pub fn entry_failures(entry: &Entry) -> Vec<FieldName> {
    check_entry(entry).failed_field().into_iter().collect()
}

/// Split entries into invalid failure lists and valid entries.
///
/// Both partitions keep input order.
pub fn classify(entries: Vec<Entry>) -> Classification {
    let total = entries.len();
    let mut classification = Classification {
        invalid: Vec::new(),
        valid: Vec::with_capacity(total),
    };

    for (index, entry) in entries.into_iter().enumerate() {
        match check_entry(&entry) {
            ValidationOutcome::Valid => classification.valid.push(entry),
            ValidationOutcome::Invalid(field) => {
                debug!(index, field = %field, "entry rejected");
                classification.invalid.push(vec![field]);
            }
        }
    }

    info!(
        total,
        valid = classification.valid_count(),
        invalid = classification.invalid_count(),
        "classification complete"
    );
    classification
}
