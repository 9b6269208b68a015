//! The user entry record.

use serde_json::{Map, Number, Value};

use crate::error::{EntryError, Result};
use crate::field::FieldName;

/// A single user entry with its nine raw field values.
///
/// Values are kept as text; interpreting them is the job of the field
/// validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    telephone: String,
    height: String,
    snils: String,
    passport_series: String,
    university: String,
    work_experience: String,
    academic_degree: String,
    worldview: String,
    address: String,
}

impl Entry {
    /// Build an entry from a JSON object.
    ///
    /// Every one of the nine keys must be present. Strings are taken as-is,
    /// numbers by their textual form. A fractional number given for work
    /// experience is truncated to whole years first, so `5.9` reads as `"5"`
    /// while the string `"5.9"` is kept and later rejected. Extra keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::MissingField`] for the first absent key (in
    /// report order) and [`EntryError::InvalidFieldType`] for values that are
    /// neither strings nor numbers.
    pub fn try_from_map(map: &Map<String, Value>) -> Result<Self> {
        let take = |field: FieldName| -> Result<String> {
            let value = map
                .get(field.as_str())
                .ok_or(EntryError::MissingField { field })?;
            value_to_text(field, value)
        };
        Ok(Self {
            telephone: take(FieldName::Telephone)?,
            height: take(FieldName::Height)?,
            snils: take(FieldName::Snils)?,
            passport_series: take(FieldName::PassportSeries)?,
            university: take(FieldName::University)?,
            work_experience: take(FieldName::WorkExperience)?,
            academic_degree: take(FieldName::AcademicDegree)?,
            worldview: take(FieldName::Worldview)?,
            address: take(FieldName::Address)?,
        })
    }

    /// Raw value of the given field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Telephone => &self.telephone,
            FieldName::Height => &self.height,
            FieldName::Snils => &self.snils,
            FieldName::PassportSeries => &self.passport_series,
            FieldName::University => &self.university,
            FieldName::WorkExperience => &self.work_experience,
            FieldName::AcademicDegree => &self.academic_degree,
            FieldName::Worldview => &self.worldview,
            FieldName::Address => &self.address,
        }
    }

    pub fn telephone(&self) -> &str {
        &self.telephone
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn snils(&self) -> &str {
        &self.snils
    }

    pub fn passport_series(&self) -> &str {
        &self.passport_series
    }

    pub fn university(&self) -> &str {
        &self.university
    }

    pub fn work_experience(&self) -> &str {
        &self.work_experience
    }

    pub fn academic_degree(&self) -> &str {
        &self.academic_degree
    }

    pub fn worldview(&self) -> &str {
        &self.worldview
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl TryFrom<&Map<String, Value>> for Entry {
    type Error = EntryError;

    fn try_from(map: &Map<String, Value>) -> Result<Self> {
        Self::try_from_map(map)
    }
}

/// Work experience is read as whole years; other numbers keep their text.
fn number_to_text(field: FieldName, number: &Number) -> String {
    if field != FieldName::WorkExperience || number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        // Saturates for magnitudes beyond i64, which are out of range anyway.
        Some(years) => (years.trunc() as i64).to_string(),
        None => number.to_string(),
    }
}

fn value_to_text(field: FieldName, value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number_to_text(field, number)),
        Value::Null => Err(EntryError::InvalidFieldType {
            field,
            found: "null",
        }),
        Value::Bool(_) => Err(EntryError::InvalidFieldType {
            field,
            found: "boolean",
        }),
        Value::Array(_) => Err(EntryError::InvalidFieldType {
            field,
            found: "array",
        }),
        Value::Object(_) => Err(EntryError::InvalidFieldType {
            field,
            found: "object",
        }),
    }
}
