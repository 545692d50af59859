use tracing::instrument;

use super::client::FtcClient;
use super::urls::QueryParams;
use crate::data_fetcher::models::{Award, AwardDefinition, AwardDefinitionListing, AwardListing};
use crate::error::AppError;

impl FtcClient {
    /// Awards given at an event, optionally only those won by one team.
    #[instrument(skip(self))]
    pub async fn event_awards(
        &self,
        season: i32,
        event_code: &str,
        team_number: Option<u32>,
    ) -> Result<Vec<Award>, AppError> {
        let mut query = QueryParams::new();
        query.push_opt("teamNumber", team_number);
        let url = self.season_url(season, &["awards", event_code], &query)?;
        let listing: AwardListing = self.get(url).await?;
        Ok(listing.awards)
    }

    /// Every award a team won during a season, across events.
    #[instrument(skip(self))]
    pub async fn team_awards(&self, season: i32, team_number: u32) -> Result<Vec<Award>, AppError> {
        let query = QueryParams::new().with("teamNumber", team_number);
        let url = self.season_url(season, &["awards"], &query)?;
        let listing: AwardListing = self.get(url).await?;
        Ok(listing.awards)
    }

    /// Award types offered during a season.
    #[instrument(skip(self))]
    pub async fn award_definitions(&self, season: i32) -> Result<Vec<AwardDefinition>, AppError> {
        let url = self.season_url(season, &["awards", "list"], &QueryParams::new())?;
        let listing: AwardDefinitionListing = self.get(url).await?;
        Ok(listing.awards)
    }
}
