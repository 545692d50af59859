use tracing::{debug, instrument};

use super::client::FtcClient;
use super::queries::EventQuery;
use crate::data_fetcher::models::{Event, EventListing};
use crate::error::AppError;

impl FtcClient {
    /// Lists events of a season, optionally narrowed to one event code or
    /// the events a team attends.
    #[instrument(skip(self))]
    pub async fn events(&self, season: i32, query: &EventQuery) -> Result<Vec<Event>, AppError> {
        let url = self.season_url(season, &["events"], &query.to_query())?;
        let listing: EventListing = self.get(url).await?;
        debug!("Received {} events (eventCount={})", listing.events.len(), listing.event_count);
        Ok(listing.events)
    }
}
