use super::common::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdvancementEntry {
    pub team: Option<u32>,
    pub display_team: Option<String>,
    pub slot: Option<i32>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_declined: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_skipped: bool,
}

/// Teams advancing out of an event and where they go.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Advancement {
    pub advances_to: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub advancement: Vec<AdvancementEntry>,
}

/// Teams that advanced into an event and the events they came from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdvancementSource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub advanced_from: Vec<String>,
    pub advanced_from_region: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub advancement: Vec<AdvancementEntry>,
}
