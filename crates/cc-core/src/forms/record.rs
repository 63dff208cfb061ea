//! Flat record of submitted form values

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::entities::SubmissionKind;
use crate::error::DomainError;
use crate::forms::form_schema;

/// Field name -> submitted value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord(BTreeMap<String, String>);

impl FormRecord {
    /// Accumulate a submitted JSON object into a record for `kind`.
    ///
    /// Keys outside the kind's schema are dropped, nulls and blank strings
    /// are skipped, strings are trimmed and other scalars are stored as
    /// their string form. Arrays and objects have no field to land in and
    /// are ignored.
    pub fn collect(kind: SubmissionKind, values: &Map<String, Value>) -> Self {
        let mut record = Self::default();
        for field in form_schema(kind) {
            let value = match values.get(field.name) {
                Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
                Some(Value::Number(n)) => n.to_string(),
                Some(Value::Bool(b)) => b.to_string(),
                _ => continue,
            };
            record.insert(field.name, value);
        }
        record
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Non-blank value of a field
    fn present(&self, field: &str) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }

    /// The applicant's name and email, which every submission must carry
    pub fn identity(&self) -> Result<(&str, &str), DomainError> {
        let name = self
            .present("name")
            .ok_or_else(|| DomainError::ValidationError("name is required".to_string()))?;
        let email = self
            .present("email")
            .ok_or_else(|| DomainError::ValidationError("email is required".to_string()))?;
        Ok((name, email))
    }
}

impl From<BTreeMap<String, String>> for FormRecord {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<FormRecord> for BTreeMap<String, String> {
    fn from(record: FormRecord) -> Self {
        record.0
    }
}
