/*!
Structs related to FreeAgent bank transaction explanations.
*/

use super::{Attachment, EcStatus, RebillType, SalesTaxStatus};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/**
Structure representing a FreeAgent Bank Transaction Explanation.

See https://dev.freeagent.com/docs/bank_transaction_explanations

An explanation says what (part of) a bank transaction was: a categorised payment, an
invoice or bill payment, a transfer between accounts, or money paid to a user. Exactly
one of `category`, `paid_invoice`, `paid_bill`, `paid_user` and `transfer_bank_account`
is expected to be set.

The four link fields are always written, as `null` when unset, so an update can clear
a previous link.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankTransactionExplanation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_transaction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub gross_value: Option<Decimal>,
    /// Value in the transaction's original currency for foreign payments.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub foreign_currency_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub sales_tax_rate: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub second_sales_tax_rate: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub sales_tax_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_status: Option<SalesTaxStatus>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub manual_sales_tax_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub paid_invoice: Option<String>,
    pub paid_bill: Option<String>,
    pub paid_user: Option<String>,
    pub transfer_bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebill_type: Option<RebillType>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub rebill_factor: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebill_to_project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheque_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec_status: Option<EcStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_supply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marked_for_review: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_money_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_money_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_money_paid_to_user: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub locked_attributes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deletable: Option<bool>,
    /// Only for capital asset purchases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_life_years: Option<u32>,
    /// URL of the capital asset disposed of by this explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposed_asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_item: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub stock_altering_quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
