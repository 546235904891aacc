//! Project posting and claim validation.

use crate::error::{required, CoreError};
use crate::schedule::TimeWindow;
use crate::types::DbId;

/// A validated project posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub window: TimeWindow,
}

impl NewProject {
    pub fn parse(
        name: Option<&str>,
        description: Option<&str>,
        date: Option<&str>,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> Result<Self, CoreError> {
        let name = required(name, "name")?.to_string();
        let description = required(description, "description")?.to_string();
        let window = TimeWindow::parse(date, start_time, end_time, ["date", "startTime", "endTime"])?;
        Ok(Self {
            name,
            description,
            window,
        })
    }
}

/// Volunteer identity attached to a project by a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub volunteer_id: DbId,
    pub volunteer_name: String,
}

impl Claim {
    pub fn parse(volunteer_id: Option<DbId>, volunteer_name: Option<&str>) -> Result<Self, CoreError> {
        let volunteer_id = volunteer_id
            .ok_or_else(|| CoreError::Validation("Missing required field: volunteerId".into()))?;
        let volunteer_name = required(volunteer_name, "volunteerName")?.to_string();
        Ok(Self {
            volunteer_id,
            volunteer_name,
        })
    }
}
