/*!
Structs and Enums related to FreeAgent users.
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/**
Structure representing a FreeAgent User: a director, employee, partner or accountant with
access to the company.

See https://dev.freeagent.com/docs/users
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// 0 (no access) to 8 (full access).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_level: Option<u8>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub opening_mileage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ni_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_tax_reference: Option<String>,
    /// Request only: email an invitation to the new user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invitation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum Role {
    Owner,
    Director,
    Partner,
    CompanySecretary,
    Employee,
    Shareholder,
    Accountant,
}
