/*!
Structs and Enums related to FreeAgent corporation tax returns (CT600).
*/

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/**
Structure representing a FreeAgent Corporation Tax Return, identified by the end date of
its accounting period.

See https://dev.freeagent.com/docs/corporation_tax_returns
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorporationTaxReturn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_starts_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_ends_on: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub amount_due: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_due_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<CorporationTaxPaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_due_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_status: Option<CorporationTaxFilingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filed_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filed_reference: Option<String>,
}

/// Like [`super::FilingStatus`], plus the `draft` state a CT600 starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CorporationTaxFilingStatus {
    Draft,
    Unfiled,
    Pending,
    Rejected,
    Filed,
    MarkedAsFiled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CorporationTaxPaymentStatus {
    Unpaid,
    MarkedAsPaid,
}
