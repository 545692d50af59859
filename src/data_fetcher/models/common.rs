use crate::error::AppError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Field deserializer that treats an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Match phase used as a path segment and query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TournamentLevel {
    Qualification,
    Playoff,
}

impl TournamentLevel {
    /// Value the API expects in paths and query strings.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            TournamentLevel::Qualification => "qual",
            TournamentLevel::Playoff => "playoff",
        }
    }
}

impl fmt::Display for TournamentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

impl FromStr for TournamentLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qual" | "quals" | "qualification" | "qualifications" => {
                Ok(TournamentLevel::Qualification)
            }
            "playoff" | "playoffs" => Ok(TournamentLevel::Playoff),
            other => Err(AppError::config_error(format!(
                "Unknown tournament level '{other}', expected 'qual' or 'playoff'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Default)]
    struct Counters {
        #[serde(default, deserialize_with = "null_as_default")]
        count: i32,
        #[serde(default, deserialize_with = "null_as_default")]
        flag: bool,
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<u32>,
    }

    #[test]
    fn test_null_as_default_accepts_null_missing_and_values() {
        let nulls: Counters =
            serde_json::from_str(r#"{"count":null,"flag":null,"items":null}"#).unwrap();
        assert_eq!(nulls.count, 0);
        assert!(!nulls.flag);
        assert!(nulls.items.is_empty());

        let missing: Counters = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.count, 0);

        let set: Counters =
            serde_json::from_str(r#"{"count":3,"flag":true,"items":[1,2]}"#).unwrap();
        assert_eq!(set.count, 3);
        assert!(set.flag);
        assert_eq!(set.items, vec![1, 2]);
    }

    #[test]
    fn test_tournament_level_parsing() {
        assert_eq!("qual".parse::<TournamentLevel>().unwrap(), TournamentLevel::Qualification);
        assert_eq!(
            "QUALIFICATION".parse::<TournamentLevel>().unwrap(),
            TournamentLevel::Qualification
        );
        assert_eq!(" Playoff ".parse::<TournamentLevel>().unwrap(), TournamentLevel::Playoff);
        assert!("finals".parse::<TournamentLevel>().is_err());
    }

    #[test]
    fn test_tournament_level_display() {
        assert_eq!(TournamentLevel::Qualification.to_string(), "qual");
        assert_eq!(TournamentLevel::Playoff.to_string(), "playoff");
    }
}
