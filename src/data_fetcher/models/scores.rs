use super::common::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Score breakdown for one alliance. The common totals are typed; the
/// game-specific breakdown changes every season and is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllianceScore {
    pub alliance: Option<String>,
    pub team: Option<u32>,
    pub total_points: Option<i32>,
    pub auto_points: Option<i32>,
    pub dc_points: Option<i32>,
    pub endgame_points: Option<i32>,
    pub penalty_points_committed: Option<i32>,
    pub pre_penalty_total: Option<i32>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchScores {
    pub match_level: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_series: i32,
    pub match_number: i32,
    pub randomization: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alliances: Vec<AllianceScore>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl MatchScores {
    /// Looks up an alliance breakdown by name (`"Red"`/`"Blue"`), ignoring case.
    pub fn alliance(&self, name: &str) -> Option<&AllianceScore> {
        self.alliances.iter().find(|a| {
            a.alliance
                .as_deref()
                .is_some_and(|alliance| alliance.eq_ignore_ascii_case(name))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScoreListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_scores: Vec<MatchScores>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_listing_keeps_season_specific_fields() {
        let json = r#"{
            "matchScores": [{
                "matchLevel": "QUALIFICATION",
                "matchSeries": 0,
                "matchNumber": 7,
                "randomization": 2,
                "alliances": [
                    {"alliance": "Red", "team": 0, "totalPoints": 112, "autoPoints": 30,
                     "dcPoints": 62, "endgamePoints": 20, "penaltyPointsCommitted": 5,
                     "prePenaltyTotal": 107, "autoSampleHigh": 3, "teleopSpecimenHigh": 6},
                    {"alliance": "Blue", "totalPoints": 98}
                ]
            }]
        }"#;

        let listing: ScoreListing = serde_json::from_str(json).unwrap();
        let scores = &listing.match_scores[0];
        assert_eq!(scores.match_number, 7);
        assert_eq!(scores.randomization, Some(2));

        let red = scores.alliance("red").unwrap();
        assert_eq!(red.total_points, Some(112));
        assert_eq!(red.details.get("autoSampleHigh"), Some(&Value::from(3)));
        assert!(!red.details.contains_key("totalPoints"));

        let blue = scores.alliance("BLUE").unwrap();
        assert_eq!(blue.total_points, Some(98));
        assert!(blue.auto_points.is_none());
        assert!(scores.alliance("green").is_none());
    }

    #[test]
    fn test_remote_score_shape_without_alliances() {
        let json = r#"{"matchScores": [{"matchLevel": "QUALIFICATION", "matchNumber": 1,
                       "teamNumber": 8393, "scores": {"totalPoints": 54}}]}"#;

        let listing: ScoreListing = serde_json::from_str(json).unwrap();
        let scores = &listing.match_scores[0];
        assert!(scores.alliances.is_empty());
        assert_eq!(scores.details.get("teamNumber"), Some(&Value::from(8393)));
        assert!(scores.details.contains_key("scores"));
    }
}
