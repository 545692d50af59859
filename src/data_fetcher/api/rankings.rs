use tracing::instrument;

use super::client::FtcClient;
use super::queries::RankingQuery;
use crate::data_fetcher::models::{Ranking, RankingListing};
use crate::error::AppError;

impl FtcClient {
    /// Fetches qualification rankings of an event.
    #[instrument(skip(self))]
    pub async fn rankings(
        &self,
        season: i32,
        event_code: &str,
        query: &RankingQuery,
    ) -> Result<Vec<Ranking>, AppError> {
        let url = self.season_url(season, &["rankings", event_code], &query.to_query())?;
        let listing: RankingListing = self.get(url).await?;
        Ok(listing.rankings)
    }
}
