use tracing::instrument;

use super::client::FtcClient;
use super::queries::{ScheduleQuery, TimeRange};
use crate::data_fetcher::models::{
    HybridMatch, HybridScheduleListing, ScheduleListing, ScheduledMatch, TournamentLevel,
};
use crate::error::AppError;

impl FtcClient {
    /// Fetches the match schedule of an event.
    #[instrument(skip(self))]
    pub async fn schedule(
        &self,
        season: i32,
        event_code: &str,
        query: &ScheduleQuery,
    ) -> Result<Vec<ScheduledMatch>, AppError> {
        let url = self.season_url(season, &["schedule", event_code], &query.to_query())?;
        let listing: ScheduleListing = self.get(url).await?;
        Ok(listing.schedule)
    }

    /// Fetches the schedule merged with results for one tournament level.
    #[instrument(skip(self))]
    pub async fn hybrid_schedule(
        &self,
        season: i32,
        event_code: &str,
        level: TournamentLevel,
        range: &TimeRange,
    ) -> Result<Vec<HybridMatch>, AppError> {
        let url = self.season_url(
            season,
            &["schedule", event_code, level.as_api_str(), "hybrid"],
            &range.to_query(),
        )?;
        let listing: HybridScheduleListing = self.get(url).await?;
        Ok(listing.schedule)
    }
}
