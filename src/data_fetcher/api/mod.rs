pub mod client;
mod fetch_utils;
pub mod http_client;
pub mod queries;
pub mod urls;

mod advancement;
mod alliances;
mod awards;
mod events;
mod leagues;
mod matches;
mod rankings;
mod schedule;
mod scores;
mod season;
mod teams;

pub use client::FtcClient;
pub use http_client::create_http_client;
pub use queries::{
    EventQuery, LeagueQuery, MatchQuery, RankingQuery, ScheduleQuery, ScoreQuery, TeamQuery,
    TimeRange,
};
pub use urls::{QueryParams, build_season_url, build_url};
