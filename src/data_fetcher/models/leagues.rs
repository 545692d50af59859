use super::common::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub region: Option<String>,
    pub code: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remote: bool,
    pub parent_league_code: Option<String>,
    pub parent_league_name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeagueListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub leagues: Vec<League>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeagueMemberListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<u32>,
}
