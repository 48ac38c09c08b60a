//! Visit transport representation
//!
//! Visits travel as a flat record with the pet reduced to its id and the
//! date as an ISO-8601 string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Visit;
use crate::error::ParseError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub visit_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pet_id: Option<i32>,
}

impl VisitDto {
    /// The visit date, if present, as a calendar date
    pub fn parsed_visit_date(&self) -> Result<Option<NaiveDate>, ParseError> {
        self.visit_date.as_deref().map(parse_visit_date).transpose()
    }
}

impl From<&Visit> for VisitDto {
    fn from(visit: &Visit) -> Self {
        Self {
            id: Some(visit.id.0),
            visit_date: visit
                .visit_date
                .map(|d| d.format(DATE_FORMAT).to_string()),
            description: visit.description.clone(),
            pet_id: Some(visit.pet_id.0),
        }
    }
}

/// Parse a `YYYY-MM-DD` date. Only the zero-padded form without a sign is
/// accepted, so the value must read back unchanged.
pub fn parse_visit_date(value: &str) -> Result<NaiveDate, ParseError> {
    let date =
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| ParseError::VisitDate {
            value: value.to_string(),
            source,
        })?;

    if date.format(DATE_FORMAT).to_string() != value {
        return Err(ParseError::VisitDateFormat(value.to_string()));
    }
    Ok(date)
}
