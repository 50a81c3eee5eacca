use super::SalesTaxRegistrationStatus;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/**
Structure representing a FreeAgent Sales Tax Period, the sales tax settings in force from
`effective_date` onwards (Universal companies).

See https://dev.freeagent.com/docs/sales_tax_periods
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesTaxPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_registration_status: Option<SalesTaxRegistrationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub sales_tax_rate_1: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub sales_tax_rate_2: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub sales_tax_rate_3: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_is_value_added: Option<bool>,
    /// Periods covered by a filed return cannot be changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
