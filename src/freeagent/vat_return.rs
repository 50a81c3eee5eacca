/*!
Structs and Enums related to FreeAgent VAT returns.
*/

use super::{FilingStatus, TaxPayment};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/**
Structure representing a FreeAgent VAT Return.

Returns are identified by the date their period ends on, e.g.
`https://api.freeagent.com/v2/vat_returns/2024-03-31`.

See https://dev.freeagent.com/docs/vat_returns
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VatReturn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_starts_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_ends_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<VatReturnFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_due_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_status: Option<FilingStatus>,
    /// Keeps the offset HMRC acknowledged the filing with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filed_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filed_reference: Option<String>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub payments: Vec<TaxPayment>,
}

impl VatReturn {
    pub fn is_filed(&self) -> bool {
        matches!(
            self.filing_status,
            Some(FilingStatus::Filed | FilingStatus::MarkedAsFiled)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VatReturnFrequency {
    Monthly,
    Quarterly,
    Annually,
}
