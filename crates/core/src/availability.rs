//! Availability slot rules: slot input and public listing filters.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::schedule::{parse_date, TimeWindow};
use crate::volunteer::Modality;

/// Field names used by the availability endpoints.
pub const SLOT_FIELDS: [&str; 3] = ["date", "start_time", "end_time"];

/// Validate a new slot's date and time window.
pub fn parse_slot(
    date: Option<&str>,
    start_time: Option<&str>,
    end_time: Option<&str>,
) -> Result<TimeWindow, CoreError> {
    TimeWindow::parse(date, start_time, end_time, SLOT_FIELDS)
}

/// Optional filters for the public listing of unreserved slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotFilter {
    /// Volunteer must list this specialty.
    pub specialty: Option<String>,
    pub modality: Option<Modality>,
    /// Exact slot date.
    pub date: Option<NaiveDate>,
}

impl SlotFilter {
    /// Build a filter from raw query values. Blank values are ignored.
    pub fn parse(
        specialty: Option<&str>,
        modality: Option<&str>,
        date: Option<&str>,
    ) -> Result<Self, CoreError> {
        fn non_blank(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }

        Ok(Self {
            specialty: non_blank(specialty).map(str::to_string),
            modality: non_blank(modality).map(str::parse).transpose()?,
            date: non_blank(date).map(|d| parse_date(d, "date")).transpose()?,
        })
    }
}
