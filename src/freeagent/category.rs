/*!
Structs related to FreeAgent accounting categories (the chart of accounts).
*/

use serde::{Deserialize, Serialize};

/**
Structure representing a FreeAgent Category.

See https://dev.freeagent.com/docs/categories

Categories are referenced by URL from invoice items, bill items, expenses and
explanations, e.g. `https://api.freeagent.com/v2/categories/285`.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// e.g. "285"; custom categories get a suffix like "285-1".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowable_for_tax: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_reporting_name: Option<String>,
    /// Default VAT rate name for auto sales tax, e.g. "Standard rate".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_sales_tax_rate: Option<String>,
}

/**
Response of /v2/categories

Unlike other list endpoints the categories come grouped under four keys.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesRoot {
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub admin_expenses_categories: Vec<Category>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub cost_of_sales_categories: Vec<Category>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub income_categories: Vec<Category>,
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub general_categories: Vec<Category>,
}

impl CategoriesRoot {
    /// All categories, group by group.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.admin_expenses_categories
            .iter()
            .chain(&self.cost_of_sales_categories)
            .chain(&self.income_categories)
            .chain(&self.general_categories)
    }

    pub fn find_by_nominal_code(&self, nominal_code: &str) -> Option<&Category> {
        self.iter()
            .find(|category| category.nominal_code.as_deref() == Some(nominal_code))
    }
}
