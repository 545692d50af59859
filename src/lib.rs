//! FIRST Tech Challenge Events API client library
//!
//! Typed async access to the FTC Events API v2.0: seasons, events, teams,
//! matches, schedules, scores, awards, rankings, alliances, advancement and
//! leagues. Every request is a single authenticated GET whose JSON body is
//! decoded into the records in [`data_fetcher::models`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use ftc_events::{Config, FtcClient, MatchQuery, TournamentLevel};
//! use ftc_events::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     // Reads ~/.config/ftc_events/config.toml and FTC_* variables
//!     let client = FtcClient::from_env().await?;
//!
//!     let query = MatchQuery {
//!         tournament_level: Some(TournamentLevel::Qualification),
//!         ..MatchQuery::default()
//!     };
//!     for m in client.matches(2024, "USCAFFFAQ", &query).await? {
//!         println!("{:?}: {:?}-{:?}", m.description, m.score_red_final, m.score_blue_final);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{
    EventQuery, FtcClient, LeagueQuery, MatchQuery, RankingQuery, ScheduleQuery, ScoreQuery,
    TeamQuery, TimeRange,
};
pub use data_fetcher::models::{
    Advancement, AdvancementSource, Alliance, AllianceSelectionPick, ApiIndex, Award,
    AwardDefinition, Event, HybridMatch, League, Match, MatchScores, Ranking, ScheduledMatch,
    SeasonSummary, Team, TeamListing, TournamentLevel,
};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
