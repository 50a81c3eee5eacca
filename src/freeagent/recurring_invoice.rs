/*!
Structs and Enums related to FreeAgent recurring invoices (read only).
*/

use super::{InvoiceItem, PaymentMethods};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/**
Structure representing a FreeAgent Recurring Invoice, the template from which invoices
are generated on a schedule.

See https://dev.freeagent.com/docs/recurring_invoices
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurringInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<RecurringFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_status: Option<RecurringStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_recurs_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms_in_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub net_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub sales_tax_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub total_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_new_invoice_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_reminder_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_thank_you_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<PaymentMethods>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub recurring_invoice_items: Vec<InvoiceItem>,
}

wire_enum! {
    /// Schedule of recurring invoices, bills and expenses.
    pub enum RecurringFrequency {
        Weekly => "Weekly",
        TwoWeekly => "Two Weekly",
        FourWeekly => "Four Weekly",
        TwoMonthly => "Two Monthly",
        Monthly => "Monthly",
        Quarterly => "Quarterly",
        Biannually => "Biannually",
        Annually => "Annually",
        TwoYearly => "2-Yearly",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum RecurringStatus {
    Draft,
    Active,
}
