/*!
Structs and Enums related to the FreeAgent company endpoint.
*/

use super::SalesTaxRegistrationStatus;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/**
Structure representing the FreeAgent Company the authenticated user works for.

See https://dev.freeagent.com/docs/company

Read only; there is exactly one per account, so it has no id in its URL.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Part of the web app URL, `https://{subdomain}.freeagent.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub company_type: Option<CompanyType>,
    /// Native currency, ISO 4217 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage_units: Option<MileageUnits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_start_date: Option<NaiveDate>,
    /// Date the books were started in FreeAgent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeagent_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_accounting_year_end: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_registration_status: Option<SalesTaxRegistrationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_registration_number: Option<String>,
    /// "VAT" for UK companies, otherwise the configured sales tax name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_name: Option<String>,
    /// Rates currently available, in percent.
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub sales_tax_rates: Vec<SalesTaxRate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_is_value_added: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_effective_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_vat_basis: Option<VatBasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_vat_frs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_first_return_period_ends_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec_vat_reporting_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_auto_sales_tax_on_purchases: Option<bool>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    /// One of the names returned by the business categories endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,
    /// e.g. "dd mm yy"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_date_format: Option<String>,
    /// Attributes that can no longer be edited, e.g. after a filed return.
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub locked_attributes: Vec<String>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub annual_accounting_periods: Vec<AccountingPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A sales tax rate in percent, sent as a string (`"20.0"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesTaxRate(#[serde(with = "rust_decimal::serde::str")] pub Decimal);

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountingPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<NaiveDate>,
}

/**
Response of /v2/company/business_categories
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessCategoriesRoot {
    #[serde(default, deserialize_with = "super::common::null_as_empty")]
    pub business_categories: Vec<String>,
}

/**
Legal form and jurisdiction of the company.

See https://dev.freeagent.com/docs/company
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum CompanyType {
    UkLimitedCompany,
    UkLimitedLiabilityPartnership,
    UkPartnership,
    UkSoleTrader,
    UsCorporation,
    UsLimitedLiabilityCompany,
    UsPartnership,
    UsSoleProprietor,
    UniversalCompany,
    UniversalPartnership,
    UniversalSoleTrader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MileageUnits {
    Miles,
    Km,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum VatBasis {
    Invoice,
    Cash,
}
