//! Parsing of loosely typed payload fields into engine values.
//!
//! Every helper records a message under the field name when a value is
//! missing or malformed and returns `None`; handlers collect all problems of
//! a payload before answering.

use api_types::Numeric;
use chrono::{DateTime, NaiveDate};
use engine::{EngineError, EntryType, Period, ValidationErrors};

use crate::ServerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Presence {
    Required,
    Optional,
}

#[derive(Debug, Default)]
pub(crate) struct Fields {
    errors: ValidationErrors,
}

impl Fields {
    fn present<T>(&mut self, field: &str, value: Option<T>, presence: Presence) -> Option<T> {
        if value.is_none() && presence == Presence::Required {
            self.errors
                .add(field, format!("The {field} field is required."));
        }
        value
    }

    pub(crate) fn text(
        &mut self,
        field: &str,
        value: Option<String>,
        presence: Presence,
    ) -> Option<String> {
        self.present(field, value, presence)
    }

    pub(crate) fn integer(
        &mut self,
        field: &str,
        value: Option<Numeric>,
        presence: Presence,
    ) -> Option<i64> {
        let value = self.present(field, value, presence)?;
        let parsed = value.as_i64();
        if parsed.is_none() {
            self.errors
                .add(field, format!("The {field} field must be an integer."));
        }
        parsed
    }

    /// A reference to another row. Ids outside the key range cannot exist.
    pub(crate) fn id(
        &mut self,
        field: &str,
        value: Option<Numeric>,
        presence: Presence,
    ) -> Option<i32> {
        let value = self.integer(field, value, presence)?;
        let id = i32::try_from(value).ok();
        if id.is_none() {
            self.errors
                .add(field, format!("The selected {field} is invalid."));
        }
        id
    }

    pub(crate) fn entry_type(
        &mut self,
        field: &str,
        value: Option<String>,
        presence: Presence,
    ) -> Option<EntryType> {
        let value = self.present(field, value, presence)?;
        let parsed = value.parse().ok();
        if parsed.is_none() {
            self.errors.add(
                field,
                format!(
                    "The selected {field} is invalid. Accepted values: {}.",
                    EntryType::ACCEPTED.join(", ")
                ),
            );
        }
        parsed
    }

    pub(crate) fn period(
        &mut self,
        field: &str,
        value: Option<String>,
        presence: Presence,
    ) -> Option<Period> {
        let value = self.present(field, value, presence)?;
        let parsed = value.trim().parse().ok();
        if parsed.is_none() {
            self.errors
                .add(field, format!("The {field} field must match the format YYYY-MM."));
        }
        parsed
    }

    pub(crate) fn date(
        &mut self,
        field: &str,
        value: Option<String>,
        presence: Presence,
    ) -> Option<NaiveDate> {
        let value = self.present(field, value, presence)?;
        let parsed = parse_date(&value);
        if parsed.is_none() {
            self.errors
                .add(field, format!("The {field} field must be a valid date."));
        }
        parsed
    }

    /// `Ok(())` when every field parsed.
    pub(crate) fn into_result(self) -> Result<(), ServerError> {
        self.errors.into_result().map_err(ServerError::from)
    }

    /// The collected errors, for when a required value is absent.
    pub(crate) fn into_error(self) -> ServerError {
        EngineError::Validation(self.errors).into()
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}
