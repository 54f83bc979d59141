//! Unit tests for the balldontlie HTTP client

use super::*;
use crate::DashError;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn team_json(id: u32, abbreviation: &str) -> serde_json::Value {
    json!({
        "id": id,
        "conference": "East",
        "division": "Southeast",
        "city": "Charlotte",
        "name": "Hornets",
        "full_name": "Charlotte Hornets",
        "abbreviation": abbreviation
    })
}

fn player_json(id: u64, first: &str, last: &str, position: &str) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": first,
        "last_name": last,
        "position": position,
        "height": "6-7",
        "weight": "180",
        "jersey_number": "1",
        "team": team_json(4, "CHA")
    })
}

async fn client_for(server: &MockServer) -> BdlClient {
    BdlClient::new("test-key", server.uri()).unwrap()
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_teams_sends_api_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams"))
            .and(header("authorization", "test-key"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [team_json(4, "CHA"), team_json(14, "LAL")]
            })))
            .mount(&mock_server)
            .await;

        let teams = client_for(&mock_server).await.teams().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[1].abbreviation, "LAL");
    }

    #[tokio::test]
    async fn test_team_by_id_unwraps_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams/4"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": team_json(4, "CHA") })),
            )
            .mount(&mock_server)
            .await;

        let team = client_for(&mock_server)
            .await
            .team(TeamId::HORNETS)
            .await
            .unwrap();
        assert_eq!(team.id, TeamId::HORNETS);
        assert_eq!(team.full_name, "Charlotte Hornets");
    }

    #[tokio::test]
    async fn test_team_players_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players"))
            .and(query_param("team_ids[]", "4"))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    player_json(1, "LaMelo", "Ball", "G"),
                    player_json(5, "Mark", "Williams", "C")
                ],
                "meta": { "per_page": 100 }
            })))
            .mount(&mock_server)
            .await;

        let players = client_for(&mock_server)
            .await
            .team_players(TeamId::HORNETS)
            .await
            .unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[1].position, "C");
    }

    #[tokio::test]
    async fn test_season_averages_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/season_averages"))
            .and(query_param("season", "2023"))
            .and(query_param("player_id", "237"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "player_id": 237,
                    "season": 2023,
                    "games_played": 71,
                    "min": "35:18",
                    "pts": 25.7,
                    "reb": 7.3,
                    "ast": 8.3,
                    "stl": 1.3,
                    "blk": 0.5,
                    "fg_pct": 0.54,
                    "fg3_pct": 0.41,
                    "ft_pct": 0.75
                }]
            })))
            .mount(&mock_server)
            .await;

        let averages = client_for(&mock_server)
            .await
            .season_averages(PlayerId::new(237), Season::new(2023))
            .await
            .unwrap();
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].pts, 25.7);
    }

    #[tokio::test]
    async fn test_tier_restriction_maps_to_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/standings"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "Unauthorized"
            })))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .await
            .standings(Season::new(2023))
            .await;
        match result {
            Err(DashError::Http(e)) => assert_eq!(e.status().map(|s| s.as_u16()), Some(401)),
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_games_page_with_filters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/games"))
            .and(query_param("seasons[]", "2023"))
            .and(query_param("team_ids[]", "4"))
            .and(query_param("per_page", "25"))
            .and(query_param("cursor", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": 1037593,
                    "date": "2024-01-05",
                    "season": 2023,
                    "status": "Final",
                    "period": 4,
                    "time": "Final",
                    "postseason": false,
                    "home_team_score": 109,
                    "visitor_team_score": 104,
                    "home_team": team_json(4, "CHA"),
                    "visitor_team": team_json(14, "LAL")
                }],
                "meta": { "next_cursor": 1037600, "per_page": 25 }
            })))
            .mount(&mock_server)
            .await;

        let query = GamesQuery {
            cursor: Some(2),
            ..GamesQuery::for_season(Season::new(2023)).with_team(Some(TeamId::HORNETS))
        };
        let page = client_for(&mock_server).await.games(&query).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.meta.next_cursor, Some(1037600));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/games/7"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).await.game(GameId::new(7)).await;
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn test_games_query_defaults_per_page() {
        let params = GamesQuery::default().to_params();
        assert_eq!(params, vec![("per_page", "25".to_string())]);
    }

    #[test]
    fn test_games_query_repeats_array_params() {
        let query = GamesQuery {
            per_page: Some(10),
            dates: vec!["2024-01-01".to_string(), "2024-01-31".to_string()],
            seasons: vec![Season::new(2023)],
            postseason: Some(false),
            ..GamesQuery::default()
        };
        let params = query.to_params();

        assert!(params.contains(&("per_page", "10".to_string())));
        assert_eq!(params.iter().filter(|(k, _)| *k == "dates[]").count(), 2);
        assert!(params.contains(&("seasons[]", "2023".to_string())));
        assert!(params.contains(&("postseason", "false".to_string())));
    }

    #[test]
    fn test_with_team_none_clears_filter() {
        let query = GamesQuery::for_season(Season::new(2023)).with_team(None);
        assert!(query.team_ids.is_empty());
    }

    #[test]
    fn test_common_headers_without_key() {
        let headers = common_headers("").unwrap();
        assert_eq!(headers.get("accept").unwrap(), "application/json");
        assert!(!headers.contains_key("authorization"));
    }

    #[test]
    fn test_common_headers_with_key() {
        let headers = common_headers("abc123").unwrap();
        assert_eq!(headers.get("authorization").unwrap(), "abc123");
    }

    #[test]
    fn test_common_headers_rejects_control_chars() {
        assert!(common_headers("bad\nkey").is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BdlClient::new("", "http://localhost:9999/v1/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999/v1");
    }

    #[test]
    fn test_bdl_base_url_constant() {
        assert_eq!(BDL_BASE_URL, "https://api.balldontlie.io/v1");
    }
}
