use tracing::instrument;

use super::client::FtcClient;
use super::queries::ScoreQuery;
use crate::data_fetcher::models::{MatchScores, ScoreListing, TournamentLevel};
use crate::error::AppError;

impl FtcClient {
    /// Fetches detailed score breakdowns for one tournament level of an event.
    #[instrument(skip(self))]
    pub async fn scores(
        &self,
        season: i32,
        event_code: &str,
        level: TournamentLevel,
        query: &ScoreQuery,
    ) -> Result<Vec<MatchScores>, AppError> {
        let url = self.season_url(
            season,
            &["scores", event_code, level.as_api_str()],
            &query.to_query(),
        )?;
        let listing: ScoreListing = self.get(url).await?;
        Ok(listing.match_scores)
    }
}
