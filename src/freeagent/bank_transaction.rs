/*!
Structs related to FreeAgent bank transactions and statement uploads.
*/

use super::BankTransactionExplanation;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/**
Structure representing a FreeAgent Bank Transaction, one line of a bank statement.

See https://dev.freeagent.com/docs/bank_transactions

A transaction is "explained" by one or more explanations until `unexplained_amount`
reaches zero.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated_on: Option<NaiveDate>,
    /// Negative for money out.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Description as received from the bank feed, before FreeAgent tidies it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub unexplained_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_manual: Option<bool>,
    /// Bank's own id of the transaction (FITID for OFX imports).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_transactions_count: Option<u32>,
    /// Local time of the statement upload; carries no offset on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub bank_transaction_explanations: Vec<BankTransactionExplanation>,
}

impl BankTransaction {
    pub fn is_explained(&self) -> bool {
        self.unexplained_amount
            .map(|amount| amount.is_zero())
            .unwrap_or(false)
    }
}

/**
One line of a statement uploaded through `/v2/bank_transactions/statement`.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub amount: Option<Decimal>,
    /// Unique id used to skip duplicates on re-upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitid: Option<String>,
    /// e.g. "CREDIT", "DEBIT", "FEE"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
}

/// Request body of a statement upload.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRoot {
    #[serde(default, deserialize_with = "super::common::null_as_empty")]
    pub statement: Vec<StatementLine>,
}
