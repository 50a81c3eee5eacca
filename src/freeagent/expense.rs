/*!
Structs and Enums related to FreeAgent expenses, including mileage claims.
*/

use super::{Attachment, EcStatus, RebillType, RecurringFrequency, SalesTaxStatus};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/**
Structure representing a FreeAgent Expense claimed by a user.

A mileage claim is an expense whose category is the mileage category; it carries
`mileage`, `vehicle_type` and `engine_type`/`engine_size` instead of a gross value.

See https://dev.freeagent.com/docs/expenses
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Negative for money spent, positive for refunds.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub gross_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub native_gross_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub sales_tax_rate: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub sales_tax_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub native_sales_tax_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_status: Option<SalesTaxStatus>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub manual_sales_tax_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec_status: Option<EcStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebill_type: Option<RebillType>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub rebill_factor: Option<Decimal>,
    /// URL of the invoice the expense was rebilled on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebilled_on_invoice_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_recurs_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub mileage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<EngineType>,
    /// e.g. "Up to 1400cc".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reclaim_mileage: Option<i32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub reclaim_mileage_rate: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub rebill_mileage_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub have_vat_receipt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expense {
    pub fn is_mileage_claim(&self) -> bool {
        self.mileage.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum VehicleType {
    Car,
    Motorcycle,
    Bicycle,
}

wire_enum! {
    /// Fuel of the vehicle on a mileage claim.
    pub enum EngineType {
        Petrol => "Petrol",
        Diesel => "Diesel",
        Lpg => "LPG",
        Electric => "Electric",
        ElectricHomeCharger => "Electric (Home charger)",
        ElectricPublicCharger => "Electric (Public charger)",
    }
}
