use tracing::instrument;

use super::client::FtcClient;
use super::urls::QueryParams;
use crate::data_fetcher::models::{Advancement, AdvancementSource};
use crate::error::AppError;

impl FtcClient {
    /// Teams advancing from an event. With `exclude_skipped`, teams that
    /// were passed over for a slot are left out.
    #[instrument(skip(self))]
    pub async fn advancement(
        &self,
        season: i32,
        event_code: &str,
        exclude_skipped: bool,
    ) -> Result<Advancement, AppError> {
        let mut query = QueryParams::new();
        if exclude_skipped {
            query.push("excludeSkipped", true);
        }
        let url = self.season_url(season, &["advancement", event_code], &query)?;
        self.get(url).await
    }

    /// Where the teams attending an event advanced from.
    #[instrument(skip(self))]
    pub async fn advancement_source(
        &self,
        season: i32,
        event_code: &str,
    ) -> Result<AdvancementSource, AppError> {
        let url = self.season_url(
            season,
            &["advancement", event_code, "source"],
            &QueryParams::new(),
        )?;
        self.get(url).await
    }
}
