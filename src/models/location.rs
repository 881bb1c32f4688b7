//! Areas and schools

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const UNKNOWN_SCHOOL: &str = "Unknown School";
pub const UNKNOWN_AREA: &str = "Unknown Area";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Area {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct School {
    pub id: i32,
    pub name: String,
    pub area_id: Option<i32>,
}

/// School name joined with its area name, if the school has one
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SchoolLocation {
    pub school_name: String,
    pub area_name: Option<String>,
}

/// Names stamped on an update log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub school_name: String,
    pub area_name: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            school_name: UNKNOWN_SCHOOL.to_string(),
            area_name: UNKNOWN_AREA.to_string(),
        }
    }
}

impl From<SchoolLocation> for Location {
    fn from(found: SchoolLocation) -> Self {
        Self {
            school_name: found.school_name,
            area_name: found.area_name.unwrap_or_else(|| UNKNOWN_AREA.to_string()),
        }
    }
}
