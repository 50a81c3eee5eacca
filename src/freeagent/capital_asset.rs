/*!
Structs and Enums related to FreeAgent capital assets and their depreciation.
*/

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/**
Structure representing a FreeAgent Capital Asset.

See https://dev.freeagent.com/docs/capital_assets
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_life_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposed_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depreciation_profile: Option<DepreciationProfile>,
    /// Only returned with `?include_history=true`.
    #[serde(deserialize_with = "super::common::null_as_empty")]
    pub capital_asset_history: Vec<CapitalAssetHistoryEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepreciationProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<DepreciationMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_life_years: Option<u32>,
    /// Percentage for reducing balance depreciation.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub annual_depreciation_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

/// An entry of the asset's history: purchase, depreciation or disposal.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalAssetHistoryEvent {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub value: Option<Decimal>,
    /// URL of the bank transaction explanation, bill or journal behind the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DepreciationMethod {
    StraightLine,
    ReducingBalance,
    NoDepreciation,
}

wire_enum! {
    pub enum AssetType {
        ComputerEquipment => "Computer Equipment",
        FixturesAndFittings => "Fixtures and Fittings",
        MotorVehicles => "Motor Vehicles",
        OfficeEquipment => "Office Equipment",
        OtherCapitalAsset => "Other Capital Asset",
        PlantAndMachinery => "Plant and Machinery",
        Property => "Property",
        Goodwill => "Goodwill",
    }
}
