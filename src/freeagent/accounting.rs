/*!
Structs for FreeAgent accounting reports: trial balance, profit and loss, balance sheet.

Reports are read-only and take an optional date range, see [`crate::dates::date_range_query`].
*/

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/**
One category line of the trial balance.

See https://dev.freeagent.com/docs/accounting
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceSummaryEntry {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_nominal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Debits positive, credits negative.
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

/**
Response of /v2/accounting/trial_balance/summary
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialBalanceSummaryRoot {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub trial_balance_summary: Vec<TrialBalanceSummaryEntry>,
}

impl TrialBalanceSummaryRoot {
    pub const PATH: &'static str = "accounting/trial_balance/summary";

    /// A trial balance always nets to zero. `None` if the sum leaves the `Decimal` range.
    pub fn total(&self) -> Option<Decimal> {
        self.trial_balance_summary
            .iter()
            .try_fold(Decimal::ZERO, |acc, entry| acc.checked_add(entry.total))
    }
}

/// Profit and loss summary for a date range.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitAndLoss {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub income: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub expenses: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub operating_profit: Option<Decimal>,
    /// Deductions below operating profit, e.g. corporation tax.
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub less: Vec<ReportLine>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub retained_profit: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub retained_profit_brought_forward: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub retained_profit_carried_forward: Option<Decimal>,
}

/// A titled amount within a report section.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub total: Option<Decimal>,
}

/**
Response of /v2/accounting/profit_and_loss/summary
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitAndLossRoot {
    pub profit_and_loss_summary: Option<ProfitAndLoss>,
}

impl ProfitAndLossRoot {
    pub const PATH: &'static str = "accounting/profit_and_loss/summary";
}

/// Balance sheet at a date.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_period_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_at_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital_assets: Option<BalanceSheetSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_assets: Option<BalanceSheetSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_liabilities: Option<BalanceSheetSection>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub net_current_assets: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub total_assets: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners_equity: Option<BalanceSheetSection>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheetSection {
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub total: Option<Decimal>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub accounts: Vec<BalanceSheetAccount>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheetAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal_code: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub total: Option<Decimal>,
}

/**
Response of /v2/accounting/balance_sheet
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheetRoot {
    pub balance_sheet: Option<BalanceSheet>,
}

impl BalanceSheetRoot {
    pub const PATH: &'static str = "accounting/balance_sheet";
}
