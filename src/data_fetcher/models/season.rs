use super::common::null_as_default;
use super::datetime::option_api_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Response of the API root: service status and season range.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiIndex {
    pub name: Option<String>,
    pub api_version: Option<String>,
    // The service spells it this way
    #[serde(rename = "serviceMainifestName", alias = "serviceManifestName", default)]
    pub service_manifest_name: Option<String>,
    pub status: Option<String>,
    pub code_package_version: Option<String>,
    pub current_season: Option<i32>,
    pub max_season: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Championship {
    pub name: Option<String>,
    #[serde(default, with = "option_api_datetime")]
    pub start_date: Option<NaiveDateTime>,
    pub location: Option<String>,
}

/// Summary of a single season.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_count: i32,
    pub game_name: Option<String>,
    #[serde(default, with = "option_api_datetime")]
    pub kickoff: Option<NaiveDateTime>,
    #[serde(default, with = "option_api_datetime")]
    pub rookie_start: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_count: i32,
    #[serde(
        alias = "fRCChampionships",
        alias = "frcChampionships",
        default,
        deserialize_with = "null_as_default"
    )]
    pub championships: Vec<Championship>,
}
