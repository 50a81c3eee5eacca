/*!
Vocabularies and small records shared by several resources.
*/

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Owned lists decode `null` like a missing key: as an empty list.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

wire_enum! {
    /// Whether the company (or a sales tax period) is registered for VAT / sales tax.
    pub enum SalesTaxRegistrationStatus {
        Registered => "Registered",
        NotRegistered => "Not Registered",
    }
}

wire_enum! {
    /**
    EC / place-of-supply status of a sale or purchase.

    See https://dev.freeagent.com/docs/invoices
    */
    pub enum EcStatus {
        UkNonEc => "UK/Non-EC",
        EcGoods => "EC Goods",
        EcServices => "EC Services",
        ReverseCharge => "Reverse Charge",
        EcVatMoss => "EC VAT MOSS",
    }
}

wire_enum! {
    /// Unit of a line item on invoices, estimates, credit notes and price list items.
    pub enum ItemType {
        Hours => "Hours",
        Days => "Days",
        Weeks => "Weeks",
        Months => "Months",
        Years => "Years",
        Products => "Products",
        Services => "Services",
        Training => "Training",
        Expenses => "Expenses",
        Comment => "Comment",
        Bills => "Bills",
        Discount => "Discount",
        Credit => "Credit",
        Vat => "VAT",
        /// Quantity without a unit.
        NoUnit => "-no unit-",
    }
}

/// VAT treatment of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesTaxStatus {
    Taxable,
    Exempt,
    OutOfScope,
}

/// How a cost is passed on to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RebillType {
    /// Rebill at cost.
    Cost,
    /// Rebill at cost plus `rebill_factor` percent.
    Markup,
    /// Rebill at the fixed `rebill_factor` price.
    Price,
}

/// Filing state of VAT, self assessment and final accounts returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FilingStatus {
    Unfiled,
    Pending,
    Rejected,
    Filed,
    MarkedAsFiled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    MarkedAsPaid,
}

/// CIS deduction band on sales invoices and subcontractor contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CisRate {
    CisGross,
    CisStandard,
    CisHigher,
}

/**
One scheduled payment of a tax return (VAT, self assessment).

`due_on` and `amount_due` are always present.
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxPayment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub due_on: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_due: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
}
