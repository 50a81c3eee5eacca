use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/**
Structure representing a FreeAgent Payroll Profile: the payroll details of one employee
for a tax year.

See https://dev.freeagent.com/docs/payroll_profiles
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_starts_on: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub total_pay_in_previous_employment: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub total_tax_in_previous_employment: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/**
Response of /v2/payroll_profiles/:year
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollProfilesRoot {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub profiles: Vec<PayrollProfile>,
}

impl PayrollProfilesRoot {
    pub fn path(year: i32) -> String {
        format!("payroll_profiles/{year}")
    }

    /// Profile of the user with the given URL, if that user was on the payroll.
    pub fn for_user(&self, user_url: &str) -> Option<&PayrollProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.user.as_deref() == Some(user_url))
    }
}

impl From<PayrollProfilesRoot> for Vec<PayrollProfile> {
    fn from(root: PayrollProfilesRoot) -> Self {
        root.profiles
    }
}
