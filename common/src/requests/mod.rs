use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::form::FormDefinition;

/// Lifecycle of a stored form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    Draft,
    Active,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Draft => "draft",
            FormStatus::Active => "active",
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(FormStatus::Draft),
            "active" => Ok(FormStatus::Active),
            other => Err(format!("unknown form status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Request payload for the form save endpoint.
/// `status` tells whether the form is kept as a draft or activated.
pub struct SaveFormRequest {
    pub form: FormDefinition,
    pub status: FormStatus,
}

/// Row of the stored forms listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub question_count: usize,
    pub status: FormStatus,
    /// SQLite `CURRENT_TIMESTAMP` text (UTC, `YYYY-MM-DD HH:MM:SS`).
    pub last_modified: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_the_same_name_in_json_and_storage() {
        for status in [FormStatus::Draft, FormStatus::Active] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<FormStatus>(), Ok(status));
        }
        assert!("archived".parse::<FormStatus>().is_err());
    }
}
