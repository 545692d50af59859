pub mod advancement;
pub mod alliances;
pub mod awards;
pub mod common;
pub mod datetime;
pub mod events;
pub mod leagues;
pub mod matches;
pub mod rankings;
pub mod schedule;
pub mod scores;
pub mod season;
pub mod teams;

pub use advancement::{Advancement, AdvancementEntry, AdvancementSource};
pub use alliances::{Alliance, AllianceListing, AllianceSelectionListing, AllianceSelectionPick};
pub use awards::{Award, AwardDefinition, AwardDefinitionListing, AwardListing};
pub use common::TournamentLevel;
pub use datetime::{format_api_datetime, parse_api_datetime};
pub use events::{Event, EventListing};
pub use leagues::{League, LeagueListing, LeagueMemberListing};
pub use matches::{Match, MatchListing, MatchTeam};
pub use rankings::{Ranking, RankingListing};
pub use schedule::{
    HybridMatch, HybridScheduleListing, HybridTeam, ScheduleListing, ScheduleTeam, ScheduledMatch,
};
pub use scores::{AllianceScore, MatchScores, ScoreListing};
pub use season::{ApiIndex, Championship, SeasonSummary};
pub use teams::{Team, TeamListing};
