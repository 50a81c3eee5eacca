/*!
Structs related to FreeAgent manual journals.
*/

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/**
Structure representing a FreeAgent Journal Set: a dated group of balancing journal entries.

See https://dev.freeagent.com/docs/journal_sets
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Set by FreeAgent for system journals, e.g. "opening_balances".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub journal_entries: Vec<JournalEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl JournalSet {
    /// Sum of all debit values; a balanced set totals zero. `None` on overflow.
    pub fn total(&self) -> Option<Decimal> {
        self.journal_entries
            .iter()
            .try_fold(Decimal::ZERO, |acc, entry| acc.checked_add(entry.debit_value))
    }

    pub fn is_balanced(&self) -> bool {
        self.total().is_some_and(|total| total.is_zero())
    }
}

/// One line of a journal set. Positive values debit, negative values credit.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub category: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub debit_value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_altering_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_asset_type: Option<String>,
    #[serde(rename = "_destroy", default, skip_serializing_if = "Option::is_none")]
    pub destroy: Option<bool>,
}
