/*!
Structs and Enums related to FreeAgent credit notes.
*/

use super::{EcStatus, InvoiceItem};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Credit note lines have the same shape as invoice lines.
pub type CreditNoteItem = InvoiceItem;

/**
Structure representing a FreeAgent Credit Note, a negative invoice issued to a contact.

See https://dev.freeagent.com/docs/credit_notes
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
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
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub total_value: Option<Decimal>,
    /// Amount already refunded or allocated against invoices.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub refunded_value: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub due_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CreditNoteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub involves_sales_tax: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec_status: Option<EcStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_supply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub credit_note_items: Vec<CreditNoteItem>,
}

wire_enum! {
    pub enum CreditNoteStatus {
        Draft => "Draft",
        Scheduled => "Scheduled",
        Sent => "Sent",
        Open => "Open",
        Overdue => "Overdue",
        Refunded => "Refunded",
        Cancelled => "Cancelled",
        WrittenOff => "Written-off",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_credit_note() {
        let note: CreditNote = serde_json::from_value(json!({
            "url": "https://api.freeagent.com/v2/credit_notes/3",
            "contact": "https://api.freeagent.com/v2/contacts/2",
            "reference": "CN-001",
            "total_value": "-100.00",
            "status": "Refunded",
            "credit_note_items": [
                {"item_type": "Products", "quantity": "1.0", "price": "-100.00"}
            ]
        }))
        .unwrap();

        assert_eq!(note.status, Some(CreditNoteStatus::Refunded));
        assert_eq!(note.total_value.unwrap().to_string(), "-100.00");
        assert_eq!(note.credit_note_items[0].price.unwrap().to_string(), "-100.00");
    }
}
