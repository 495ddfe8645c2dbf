use super::types::{ApiConfig, ApiError, MediaTitle};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const SEARCH_QUERY: &str = "\
query ($search: String) {
  Media(search: $search, type: ANIME) {
    title {
      romaji
      english
    }
  }
}";

/// AniList GraphQL client for canonical title lookups
pub struct AniListClient {
    client: Client,
    endpoint: String,
}

impl AniListClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.anilist_url.clone(),
        })
    }

    /// Search for an anime by title and return both title variants.
    /// `Ok(None)` means the provider had no match for the search string.
    pub fn search_title(&self, search: &str) -> Result<Option<MediaTitle>, ApiError> {
        debug!(query = %search, "AniList title search");

        let body = json!({
            "query": SEARCH_QUERY,
            "variables": { "search": search },
        });

        let response = self.client.post(&self.endpoint).json(&body).send()?;
        let status = response.status();

        debug!("AniList response status: {}", status);

        // AniList answers "no match" with a 404 carrying a null Media body
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let text = response.text()?;
        parse_search_response(&text)
    }
}

fn parse_search_response(body: &str) -> Result<Option<MediaTitle>, ApiError> {
    let parsed: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))?;

    Ok(parsed
        .data
        .and_then(|d| d.media)
        .and_then(|m| m.title)
        .map(|t| MediaTitle {
            romaji: t.romaji,
            english: t.english,
        }))
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<SearchData>,
}

#[derive(Deserialize)]
struct SearchData {
    #[serde(rename = "Media")]
    media: Option<Media>,
}

#[derive(Deserialize)]
struct Media {
    title: Option<TitleFields>,
}

#[derive(Deserialize)]
struct TitleFields {
    romaji: Option<String>,
    english: Option<String>,
}
