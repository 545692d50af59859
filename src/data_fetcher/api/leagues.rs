use tracing::instrument;

use super::client::FtcClient;
use super::queries::LeagueQuery;
use super::urls::QueryParams;
use crate::data_fetcher::models::{
    League, LeagueListing, LeagueMemberListing, Ranking, RankingListing,
};
use crate::error::AppError;

impl FtcClient {
    /// Lists leagues, optionally within one region or a single league.
    #[instrument(skip(self))]
    pub async fn leagues(&self, season: i32, query: &LeagueQuery) -> Result<Vec<League>, AppError> {
        let url = self.season_url(season, &["leagues"], &query.to_query())?;
        let listing: LeagueListing = self.get(url).await?;
        Ok(listing.leagues)
    }

    /// Team numbers belonging to a league.
    #[instrument(skip(self))]
    pub async fn league_members(
        &self,
        season: i32,
        region_code: &str,
        league_code: &str,
    ) -> Result<Vec<u32>, AppError> {
        let url = self.season_url(
            season,
            &["leagues", "members", region_code, league_code],
            &QueryParams::new(),
        )?;
        let listing: LeagueMemberListing = self.get(url).await?;
        Ok(listing.members)
    }

    /// Cumulative rankings across a league's meets.
    #[instrument(skip(self))]
    pub async fn league_rankings(
        &self,
        season: i32,
        region_code: &str,
        league_code: &str,
    ) -> Result<Vec<Ranking>, AppError> {
        let url = self.season_url(
            season,
            &["leagues", "rankings", region_code, league_code],
            &QueryParams::new(),
        )?;
        let listing: RankingListing = self.get(url).await?;
        Ok(listing.rankings)
    }
}
