use super::common::null_as_default;
use super::datetime::option_api_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTeam {
    pub team_number: Option<u32>,
    pub display_team_number: Option<String>,
    pub station: Option<String>,
    pub team: Option<String>,
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub surrogate: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub no_show: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMatch {
    pub description: Option<String>,
    pub field: Option<String>,
    pub tournament_level: Option<String>,
    #[serde(default, with = "option_api_datetime")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub series: i32,
    pub match_number: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<ScheduleTeam>,
    #[serde(default, with = "option_api_datetime")]
    pub modified_on: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: Vec<ScheduledMatch>,
}

/// Team slot in the hybrid schedule: scheduling data plus result flags.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HybridTeam {
    pub team_number: Option<u32>,
    pub display_team_number: Option<String>,
    pub station: Option<String>,
    pub team: Option<String>,
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub surrogate: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub no_show: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dq: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub on_field: bool,
}

/// Schedule entry merged with its result, if the match has been played.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HybridMatch {
    pub description: Option<String>,
    pub tournament_level: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub series: i32,
    pub match_number: i32,
    #[serde(default, with = "option_api_datetime")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default, with = "option_api_datetime")]
    pub actual_start_time: Option<NaiveDateTime>,
    #[serde(default, with = "option_api_datetime")]
    pub post_result_time: Option<NaiveDateTime>,
    pub score_red_final: Option<i32>,
    pub score_red_foul: Option<i32>,
    pub score_red_auto: Option<i32>,
    pub score_blue_final: Option<i32>,
    pub score_blue_foul: Option<i32>,
    pub score_blue_auto: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub red_wins: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blue_wins: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<HybridTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HybridScheduleListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: Vec<HybridMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_listing_decoding() {
        let json = r#"{
            "schedule": [{
                "description": "Qualification 3",
                "field": "1",
                "tournamentLevel": "QUALIFICATION",
                "startTime": "2024-12-07T10:20:00",
                "series": 0,
                "matchNumber": 3,
                "teams": [
                    {"teamNumber": 8393, "displayTeamNumber": "8393", "station": "Red1",
                     "team": "Gearheads", "teamName": "Gearheads Robotics",
                     "surrogate": false, "noShow": false},
                    {"teamNumber": 16072, "station": "Red2", "surrogate": true, "noShow": false}
                ],
                "modifiedOn": null
            }]
        }"#;

        let listing: ScheduleListing = serde_json::from_str(json).unwrap();
        let entry = &listing.schedule[0];
        assert_eq!(entry.match_number, 3);
        assert_eq!(entry.field.as_deref(), Some("1"));
        assert!(entry.start_time.is_some());
        assert!(entry.modified_on.is_none());
        assert!(entry.teams[1].surrogate);
        assert_eq!(entry.teams[0].team_name.as_deref(), Some("Gearheads Robotics"));
    }

    #[test]
    fn test_hybrid_schedule_decoding() {
        let json = r#"{
            "schedule": [
                {
                    "description": "Qualification 1",
                    "tournamentLevel": "QUALIFICATION",
                    "series": 0,
                    "matchNumber": 1,
                    "startTime": "2024-12-07T10:00:00",
                    "actualStartTime": "2024-12-07T10:02:11",
                    "postResultTime": "2024-12-07T10:06:40",
                    "scoreRedFinal": 40,
                    "scoreBlueFinal": 52,
                    "redWins": false,
                    "blueWins": true,
                    "teams": [{"teamNumber": 8393, "station": "Red1", "dq": false, "onField": true}]
                },
                {
                    "description": "Qualification 2",
                    "tournamentLevel": "QUALIFICATION",
                    "matchNumber": 2,
                    "startTime": "2024-12-07T10:10:00",
                    "actualStartTime": null,
                    "scoreRedFinal": null,
                    "teams": []
                }
            ]
        }"#;

        let listing: HybridScheduleListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.schedule.len(), 2);
        assert!(listing.schedule[0].blue_wins);
        assert_eq!(listing.schedule[0].score_blue_final, Some(52));
        assert!(listing.schedule[0].teams[0].on_field);
        assert!(listing.schedule[1].actual_start_time.is_none());
        assert!(listing.schedule[1].score_red_final.is_none());
    }
}
