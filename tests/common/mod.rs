#![allow(dead_code)]

use httpmock::prelude::*;
use movie_page::application::services::MovieService;
use movie_page::infrastructure::omdb::OmdbClient;
use movie_page::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

pub const API_KEY: &str = "test-key";
pub const SEARCH: &str = "star wars";

pub fn search_body() -> Value {
    json!({
        "Search": [
            {
                "Title": "Star Wars: Episode IV - A New Hope",
                "Year": "1977",
                "imdbID": "tt0076759",
                "Type": "movie",
                "Poster": "https://m.media-amazon.com/images/M/new-hope.jpg"
            },
            {
                "Title": "Star Wars: Episode V - The Empire Strikes Back",
                "Year": "1980",
                "imdbID": "tt0080684",
                "Type": "movie",
                "Poster": "https://m.media-amazon.com/images/M/empire.jpg"
            },
            {
                "Title": "Star Wars: The Clone Wars",
                "Year": "2008–2020",
                "imdbID": "tt0458290",
                "Type": "series",
                "Poster": "N/A"
            }
        ],
        "totalResults": "3",
        "Response": "True"
    })
}

pub fn not_found_body() -> Value {
    json!({ "Response": "False", "Error": "Movie not found!" })
}

pub fn create_client(server: &MockServer) -> OmdbClient {
    OmdbClient::new(&server.url("/"), API_KEY, Duration::from_secs(5)).unwrap()
}

pub fn create_test_state(server: &MockServer) -> AppState {
    state_for_client(create_client(server))
}

/// State pointing at an arbitrary base URL, e.g. an address nothing listens on.
pub fn create_state_for_url(base_url: &str) -> AppState {
    let client = OmdbClient::new(base_url, API_KEY, Duration::from_secs(2)).unwrap();
    state_for_client(client)
}

fn state_for_client(client: OmdbClient) -> AppState {
    let service = MovieService::new(Arc::new(client), SEARCH);
    AppState::new(Arc::new(service))
}

/// Stubs the search endpoint for [`SEARCH`] with a JSON body.
pub async fn mock_search(server: &MockServer, status: u16, body: Value) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/")
                .query_param("apikey", API_KEY)
                .query_param("s", SEARCH);
            then.status(status)
                .header("content-type", "application/json")
                .json_body(body);
        })
        .await
}
