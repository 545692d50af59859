use super::common::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Alliance {
    pub number: i32,
    pub name: Option<String>,
    pub captain: Option<u32>,
    pub captain_display: Option<String>,
    pub round1: Option<u32>,
    pub round1_display: Option<String>,
    pub round2: Option<u32>,
    pub round2_display: Option<String>,
    pub round3: Option<u32>,
    pub round3_display: Option<String>,
    pub backup: Option<u32>,
    pub backup_display: Option<String>,
    pub backup_replaced: Option<u32>,
    pub backup_replaced_display: Option<String>,
}

impl Alliance {
    /// Team numbers in pick order, skipping empty slots.
    pub fn team_numbers(&self) -> Vec<u32> {
        [self.captain, self.round1, self.round2, self.round3, self.backup]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AllianceListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub alliances: Vec<Alliance>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i32,
}

/// One step of the alliance selection process.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AllianceSelectionPick {
    pub index: i32,
    pub team: Option<u32>,
    pub result: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AllianceSelectionListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub selections: Vec<AllianceSelectionPick>,
}
