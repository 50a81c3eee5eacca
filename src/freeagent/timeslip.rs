/*!
Structs related to FreeAgent timeslips.
*/

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/**
Structure representing a FreeAgent Timeslip, time a user spent on a project task.

See https://dev.freeagent.com/docs/timeslips
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeslip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated_on: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub hours: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// URL of the invoice the time was billed on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_on_invoice: Option<String>,
    /// Present while a timer is attached to the timeslip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimeslipTimer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeslipTimer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
    /// Wall clock time the timer was started, without offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_from: Option<NaiveDateTime>,
}
