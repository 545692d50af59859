use super::common::null_as_default;
use serde::{Deserialize, Serialize};

/// Ranking row, used both for event rankings and league rankings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    pub rank: i32,
    pub team_number: u32,
    pub display_team_number: Option<String>,
    pub team_name: Option<String>,
    #[serde(rename = "sortOrder1")]
    pub sort_order1: Option<f64>,
    #[serde(rename = "sortOrder2")]
    pub sort_order2: Option<f64>,
    #[serde(rename = "sortOrder3")]
    pub sort_order3: Option<f64>,
    #[serde(rename = "sortOrder4")]
    pub sort_order4: Option<f64>,
    #[serde(rename = "sortOrder5")]
    pub sort_order5: Option<f64>,
    #[serde(rename = "sortOrder6")]
    pub sort_order6: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wins: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub losses: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ties: i32,
    pub qual_average: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dq: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches_played: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches_counted: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RankingListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rankings: Vec<Ranking>,
}
