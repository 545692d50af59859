use tracing::instrument;

use super::client::FtcClient;
use super::urls::QueryParams;
use crate::data_fetcher::models::{ApiIndex, SeasonSummary};
use crate::error::AppError;

impl FtcClient {
    /// Fetches the API root: service status and current/max season.
    #[instrument(skip(self))]
    pub async fn api_index(&self) -> Result<ApiIndex, AppError> {
        let url = self.url(&[], &QueryParams::new())?;
        self.get(url).await
    }

    /// Fetches the summary of a season (game name, kickoff, counts).
    #[instrument(skip(self))]
    pub async fn season_summary(&self, season: i32) -> Result<SeasonSummary, AppError> {
        let url = self.season_url(season, &[], &QueryParams::new())?;
        self.get(url).await
    }
}
