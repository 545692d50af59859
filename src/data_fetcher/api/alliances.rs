use tracing::instrument;

use super::client::FtcClient;
use super::urls::QueryParams;
use crate::data_fetcher::models::{
    Alliance, AllianceListing, AllianceSelectionListing, AllianceSelectionPick,
};
use crate::error::AppError;

impl FtcClient {
    /// Fetches the playoff alliances of an event.
    #[instrument(skip(self))]
    pub async fn alliances(&self, season: i32, event_code: &str) -> Result<Vec<Alliance>, AppError> {
        let url = self.season_url(season, &["alliances", event_code], &QueryParams::new())?;
        let listing: AllianceListing = self.get(url).await?;
        Ok(listing.alliances)
    }

    /// Fetches the alliance selection steps in the order they happened.
    #[instrument(skip(self))]
    pub async fn alliance_selection(
        &self,
        season: i32,
        event_code: &str,
    ) -> Result<Vec<AllianceSelectionPick>, AppError> {
        let url = self.season_url(
            season,
            &["alliances", event_code, "selection"],
            &QueryParams::new(),
        )?;
        let listing: AllianceSelectionListing = self.get(url).await?;
        Ok(listing.selections)
    }
}
