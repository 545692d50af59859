use super::common::null_as_default;
use serde::{Deserialize, Serialize};

/// Award given at an event, to a team or to a person.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub award_id: Option<i32>,
    pub team_id: Option<i64>,
    pub event_id: Option<String>,
    pub event_division_id: Option<String>,
    pub event_code: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub series: i32,
    pub team_number: Option<u32>,
    pub school_name: Option<String>,
    pub full_team_name: Option<String>,
    pub person: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AwardListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub awards: Vec<Award>,
}

/// Award type offered during a season.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AwardDefinition {
    pub award_id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub for_person: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AwardDefinitionListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub awards: Vec<AwardDefinition>,
}
