//! Volunteer profile values: modality and specialties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const MODALITY_ONLINE: &str = "online";
pub const MODALITY_PRESENCIAL: &str = "presencial";

/// How a volunteer delivers sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    #[default]
    Online,
    Presencial,
}

impl Modality {
    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Online => MODALITY_ONLINE,
            Modality::Presencial => MODALITY_PRESENCIAL,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            MODALITY_ONLINE => Ok(Modality::Online),
            MODALITY_PRESENCIAL => Ok(Modality::Presencial),
            _ => Err(CoreError::Validation(format!(
                "Invalid modality '{s}'. Must be one of: {MODALITY_ONLINE}, {MODALITY_PRESENCIAL}"
            ))),
        }
    }
}

/// Trim specialties, drop blanks and duplicates while keeping first-seen order.
pub fn normalize_specialties(specialties: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(specialties.len());
    for s in specialties {
        let s = s.trim();
        if !s.is_empty() && !out.iter().any(|existing| existing == s) {
            out.push(s.to_string());
        }
    }
    out
}
