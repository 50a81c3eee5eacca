use super::{FilingStatus, TaxPayment};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/**
Structure representing a FreeAgent Self Assessment Return of one user.

Returns live under their user (`/v2/users/:user_id/self_assessment_returns/:period_ends_on`),
so there is no top-level collection path.

See https://dev.freeagent.com/docs/self_assessment_returns
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfAssessmentReturn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_starts_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_ends_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_due_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_status: Option<FilingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filed_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filed_reference: Option<String>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub payments: Vec<TaxPayment>,
}

impl SelfAssessmentReturn {
    /// Collection path of the returns of the user with the given id.
    pub fn path(user_id: impl std::fmt::Display) -> String {
        format!("users/{user_id}/self_assessment_returns")
    }
}
