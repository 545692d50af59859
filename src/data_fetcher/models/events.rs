use super::common::null_as_default;
use super::datetime::option_api_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: Option<String>,
    pub code: String,
    pub division_code: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remote: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hybrid: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_count: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub type_name: Option<String>,
    pub region_code: Option<String>,
    pub league_code: Option<String>,
    pub district_code: Option<String>,
    pub venue: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "stateprov")]
    pub state_prov: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub live_stream_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub webcasts: Vec<serde_json::Value>,
    pub timezone: Option<String>,
    #[serde(default, with = "option_api_datetime")]
    pub date_start: Option<NaiveDateTime>,
    #[serde(default, with = "option_api_datetime")]
    pub date_end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_count: i32,
}
