use super::common::null_as_default;
use super::datetime::option_api_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeam {
    pub team_number: Option<u32>,
    pub station: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dq: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub on_field: bool,
}

/// Played match with final results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default, with = "option_api_datetime")]
    pub actual_start_time: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub tournament_level: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub series: i32,
    pub match_number: i32,
    pub score_red_final: Option<i32>,
    pub score_red_foul: Option<i32>,
    pub score_red_auto: Option<i32>,
    pub score_blue_final: Option<i32>,
    pub score_blue_foul: Option<i32>,
    pub score_blue_auto: Option<i32>,
    #[serde(default, with = "option_api_datetime")]
    pub post_result_time: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<MatchTeam>,
    #[serde(default, with = "option_api_datetime")]
    pub modified_on: Option<NaiveDateTime>,
}

impl Match {
    /// True when the match has a posted result for both alliances.
    pub fn has_result(&self) -> bool {
        self.score_red_final.is_some() && self.score_blue_final.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<Match>,
}
