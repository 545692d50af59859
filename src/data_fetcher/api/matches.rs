use tracing::instrument;

use super::client::FtcClient;
use super::queries::MatchQuery;
use crate::data_fetcher::models::{Match, MatchListing};
use crate::error::AppError;

impl FtcClient {
    /// Fetches played matches and their results for an event.
    #[instrument(skip(self))]
    pub async fn matches(
        &self,
        season: i32,
        event_code: &str,
        query: &MatchQuery,
    ) -> Result<Vec<Match>, AppError> {
        let url = self.season_url(season, &["matches", event_code], &query.to_query())?;
        let listing: MatchListing = self.get(url).await?;
        Ok(listing.matches)
    }
}
