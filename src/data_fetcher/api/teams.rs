use tracing::{debug, info, instrument};

use super::client::FtcClient;
use super::queries::TeamQuery;
use crate::data_fetcher::models::{Team, TeamListing};
use crate::error::AppError;

impl FtcClient {
    /// Fetches a single page of the team listing, including the paging
    /// counters. The page number is appended after the filters.
    #[instrument(skip(self))]
    pub async fn team_listing_page(
        &self,
        season: i32,
        query: &TeamQuery,
        page: u32,
    ) -> Result<TeamListing, AppError> {
        let mut params = query.to_query();
        params.push("page", page);
        let url = self.season_url(season, &["teams"], &params)?;
        self.get(url).await
    }

    /// Fetches every page of the team listing and concatenates the teams in
    /// page order. Pages are requested one after another; the first failure
    /// aborts the whole call.
    #[instrument(skip(self))]
    pub async fn teams(&self, season: i32, query: &TeamQuery) -> Result<Vec<Team>, AppError> {
        let first = self.team_listing_page(season, query, 1).await?;
        let page_total = first.page_total.max(1);
        let mut teams = first.teams;

        if page_total > 1 {
            info!("Team listing spans {page_total} pages ({} teams)", first.team_count_total);
        }

        for page in 2..=page_total {
            let listing = self.team_listing_page(season, query, page).await?;
            debug!("Page {page}/{page_total}: {} teams", listing.teams.len());
            teams.extend(listing.teams);
        }

        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::data_fetcher::api::{FtcClient, TeamQuery};
    use crate::error::AppError;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FtcClient {
        FtcClient::new(Config::new(server.uri(), "user", "key")).unwrap()
    }

    fn page_body(numbers: &[u32], page: u32, total: u32) -> serde_json::Value {
        let teams: Vec<_> = numbers.iter().map(|n| json!({ "teamNumber": n })).collect();
        json!({
            "teams": teams,
            "teamCountTotal": 5,
            "teamCountPage": numbers.len(),
            "pageCurrent": page,
            "pageTotal": total,
        })
    }

    #[tokio::test]
    async fn test_teams_concatenates_pages_in_order() {
        let mock_server = MockServer::start().await;

        for (page, numbers) in [(1u32, vec![1u32, 2]), (2, vec![3, 4]), (3, vec![5])] {
            Mock::given(method("GET"))
                .and(path("/2024/teams"))
                .and(query_param("page", page.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&numbers, page, 3)))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let teams = client_for(&mock_server)
            .teams(2024, &TeamQuery::default())
            .await
            .unwrap();

        let numbers: Vec<u32> = teams.iter().map(|t| t.team_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_teams_single_page_makes_one_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2024/teams"))
            .and(query_param("state", "CA"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[8393], 1, 1)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let query = TeamQuery {
            state: Some("CA".to_string()),
            ..TeamQuery::default()
        };
        let teams = client_for(&mock_server).teams(2024, &query).await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].team_number, 8393);
    }

    #[tokio::test]
    async fn test_teams_zero_page_total_treated_as_one() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2024/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "teams": [] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let teams = client_for(&mock_server)
            .teams(2024, &TeamQuery::default())
            .await
            .unwrap();
        assert!(teams.is_empty());
    }

    #[tokio::test]
    async fn test_teams_fails_when_a_later_page_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2024/teams"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[1, 2], 1, 3)))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/2024/teams"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/2024/teams"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[5], 3, 3)))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .teams(2024, &TeamQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::HttpStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_team_listing_page_returns_counters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2024/teams"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[3, 4], 2, 3)))
            .mount(&mock_server)
            .await;

        let listing = client_for(&mock_server)
            .team_listing_page(2024, &TeamQuery::default(), 2)
            .await
            .unwrap();
        assert_eq!(listing.page_current, 2);
        assert_eq!(listing.page_total, 3);
        assert_eq!(listing.team_count_total, 5);
    }
}
