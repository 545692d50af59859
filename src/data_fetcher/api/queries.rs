//! Typed filters for endpoints that accept optional query parameters.
//!
//! Each filter emits only the fields that are set, in a fixed order, so the
//! resulting URL is deterministic.

use super::urls::QueryParams;
use crate::data_fetcher::models::TournamentLevel;

/// Filters for the team listing. Paging is handled by the accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamQuery {
    pub team_number: Option<u32>,
    pub event_code: Option<String>,
    pub state: Option<String>,
}

impl TeamQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("teamNumber", self.team_number)
            .push_opt("eventCode", self.event_code.as_deref())
            .push_opt("state", self.state.as_deref());
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub event_code: Option<String>,
    pub team_number: Option<u32>,
}

impl EventQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("eventCode", self.event_code.as_deref())
            .push_opt("teamNumber", self.team_number);
        query
    }
}

/// Inclusive match number range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl TimeRange {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        self.append_to(&mut query);
        query
    }

    fn append_to(&self, query: &mut QueryParams) {
        query.push_opt("start", self.start).push_opt("end", self.end);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchQuery {
    pub tournament_level: Option<TournamentLevel>,
    pub team_number: Option<u32>,
    pub match_number: Option<u32>,
    pub range: TimeRange,
}

impl MatchQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("tournamentLevel", self.tournament_level)
            .push_opt("teamNumber", self.team_number)
            .push_opt("matchNumber", self.match_number);
        self.range.append_to(&mut query);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub tournament_level: Option<TournamentLevel>,
    pub team_number: Option<u32>,
    pub range: TimeRange,
}

impl ScheduleQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("tournamentLevel", self.tournament_level)
            .push_opt("teamNumber", self.team_number);
        self.range.append_to(&mut query);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreQuery {
    pub team_number: Option<u32>,
    pub match_number: Option<u32>,
    pub range: TimeRange,
}

impl ScoreQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("teamNumber", self.team_number)
            .push_opt("matchNumber", self.match_number);
        self.range.append_to(&mut query);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingQuery {
    pub team_number: Option<u32>,
    /// Only return the top N teams.
    pub top: Option<u32>,
}

impl RankingQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("teamNumber", self.team_number)
            .push_opt("top", self.top);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueQuery {
    pub region_code: Option<String>,
    pub league_code: Option<String>,
}

impl LeagueQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("regionCode", self.region_code.as_deref())
            .push_opt("leagueCode", self.league_code.as_deref());
        query
    }
}
