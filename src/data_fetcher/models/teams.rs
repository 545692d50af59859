use super::common::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_number: u32,
    pub display_team_number: Option<String>,
    pub name_full: Option<String>,
    pub name_short: Option<String>,
    pub school_name: Option<String>,
    pub city: Option<String>,
    pub state_prov: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub rookie_year: Option<i32>,
    pub robot_name: Option<String>,
    pub district_code: Option<String>,
    #[serde(rename = "homeCMP")]
    pub home_cmp: Option<String>,
    pub home_region: Option<String>,
    pub display_location: Option<String>,
}

/// One page of the team listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<Team>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_count_total: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_count_page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_current: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_total: u32,
}
