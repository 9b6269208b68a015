//! Property tests for the field rules and the classifier.

use entry_model::Entry;
use entry_validate::{check_height, check_snils, check_telephone, check_work_experience, classify};
use proptest::prelude::*;
use serde_json::{Value, json};

fn entry(telephone: &str, snils: &str) -> Entry {
    let Value::Object(map) = json!({
        "telephone": telephone,
        "height": "1.75",
        "snils": snils,
        "passport_series": "12 34",
        "university": "МГУ",
        "work_experience": "5",
        "academic_degree": "PhD",
        "worldview": "atheism",
        "address": "Ленина 10",
    }) else {
        unreachable!()
    };
    Entry::try_from_map(&map).expect("build entry")
}

proptest! {
    #[test]
    fn telephone_format_always_accepted(
        a in "[0-9]{3}", b in "[0-9]{3}", c in "[0-9]{2}", d in "[0-9]{2}"
    ) {
        let telephone = format!("+7-({a})-{b}-{c}-{d}");
        prop_assert!(check_telephone(&telephone));
    }

    #[test]
    fn telephone_without_separators_rejected(digits in "[0-9]{10}") {
        let telephone = format!("+7{digits}");
        prop_assert!(!check_telephone(&telephone));
    }

    #[test]
    fn snils_of_eleven_digits_accepted(snils in "[0-9]{11}") {
        prop_assert!(check_snils(&snils));
    }

    #[test]
    fn snils_of_other_length_rejected(snils in "[0-9]{0,10}|[0-9]{12,20}") {
        prop_assert!(!check_snils(&snils));
    }

    #[test]
    fn snils_with_non_digit_rejected(head in "[0-9]{5}", bad in "[a-zA-Z -]", tail in "[0-9]{5}") {
        let snils = format!("{head}{bad}{tail}");
        prop_assert!(!check_snils(&snils));
    }

    #[test]
    fn height_inside_bounds_accepted(height in 1.2001f64..2.0999) {
        prop_assert!(check_height(&height.to_string()));
    }

    #[test]
    fn height_outside_bounds_rejected(height in prop_oneof![0.0f64..=1.20, 2.10f64..10.0]) {
        prop_assert!(!check_height(&height.to_string()));
    }

    #[test]
    fn work_experience_matches_range(years in -100i64..100) {
        let expected = (2..20).contains(&years);
        prop_assert_eq!(check_work_experience(&years.to_string()), expected);
    }

    #[test]
    fn classification_keeps_every_entry(flags in proptest::collection::vec(any::<bool>(), 0..40)) {
        let entries: Vec<Entry> = flags
            .iter()
            .map(|valid| {
                if *valid {
                    entry("+7-(123)-456-78-90", "12345678901")
                } else {
                    entry("+71234567890", "bad")
                }
            })
            .collect();
        let expected_valid = flags.iter().filter(|valid| **valid).count();

        let result = classify(entries);

        prop_assert_eq!(result.invalid.len() + result.valid.len(), flags.len());
        prop_assert_eq!(result.valid.len(), expected_valid);
        prop_assert!(result.invalid.iter().all(|reasons| reasons.len() == 1));
    }
}
