/*!
Structs and Enums related to FreeAgent invoices.
*/

use super::{CisRate, EcStatus, ItemType, SalesTaxStatus};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/**
Structure representing a FreeAgent sales Invoice.

See https://dev.freeagent.com/docs/invoices

Values (`net_value`, `total_value`, ...) are computed by FreeAgent from the items and are
ignored when sent back.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// URL of the invoiced contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// URL of the related project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Invoice number; generated from the invoice sequence when left out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms_in_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Rate from the invoice currency to the company's native currency.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub exchange_rate: Option<Decimal>,
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
    /// Only for companies with two sales taxes (e.g. Canadian GST/PST).
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub second_sales_tax_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub total_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub paid_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub due_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub discount_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    /// Human readable status, e.g. "Overdue by 10 days".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omit_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_show_bic_and_iban: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_project_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_thank_you_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_reminder_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_new_invoice_emails: Option<bool>,
    /// URL of the bank account shown as payment details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_off_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub involves_sales_tax: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec_status: Option<EcStatus>,
    /// Two letter country code, only for EC VAT MOSS invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_supply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_interim_uk_vat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cis_rate: Option<CisRate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub cis_deduction_rate: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub cis_deduction: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub cis_deduction_suffered: Option<Decimal>,
    /// URL of the recurring invoice this was generated from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_invoice: Option<String>,
    /// URL of the estimate this was converted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<PaymentMethods>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub invoice_items: Vec<InvoiceItem>,
}

/**
Line of an invoice (also used by credit notes and recurring invoices).

See https://dev.freeagent.com/docs/invoices#invoice-items
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub quantity: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_status: Option<SalesTaxStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_sales_tax_status: Option<SalesTaxStatus>,
    /// URL of the income category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Set to `true` in an update to delete this item.
    #[serde(rename = "_destroy", skip_serializing_if = "Option::is_none")]
    pub destroy: Option<bool>,
}

/// Online payment options offered on the invoice.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethods {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gocardless_preauth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tyl: Option<bool>,
}

wire_enum! {
    /**
    Invoice Status Enum.

    See https://dev.freeagent.com/docs/invoices
    */
    pub enum InvoiceStatus {
        Draft => "Draft",
        Scheduled => "Scheduled",
        Sent => "Sent",
        Open => "Open",
        Overdue => "Overdue",
        Paid => "Paid",
        Cancelled => "Cancelled",
        WrittenOff => "Written-off",
    }
}
