/*!
Structs and Enums related to FreeAgent contacts.
*/

use super::CisRate;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/**
Structure representing a FreeAgent Contact, a client or supplier.

See https://dev.freeagent.com/docs/contacts

A contact needs either `first_name` + `last_name` or `organisation_name` when created.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Unique identifier of the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_name: Option<String>,
    /// Read only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_projects_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Invoices are sent here instead of `email` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// Country name in English, e.g. "United Kingdom".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Show the contact's name as well as the organisation on invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name_on_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_payment_terms_in_days: Option<u32>,
    /// Language of invoices sent to the contact, e.g. "en", "fr".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Read only. Outstanding balance across invoices and bills.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub account_balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_contact_invoice_sequence: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_sales_tax: Option<ChargeSalesTax>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cis_subcontractor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cis_deduction_rate: Option<CisRate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_tax_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcontractor_verification_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// Organisation name, or "first last" for individuals.
    pub fn display_name(&self) -> Option<String> {
        if let Some(organisation) = &self.organisation_name {
            return Some(organisation.clone());
        }

        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum ChargeSalesTax {
    /// Decide from the contact's country.
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum ContactStatus {
    Active,
    Hidden,
}
