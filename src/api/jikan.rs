use super::types::{ApiConfig, ApiError};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Jikan (MyAnimeList) keyword-search client, capped to the first result
pub struct JikanClient {
    client: Client,
    endpoint: String,
}

impl JikanClient {
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
            endpoint: config.jikan_url.clone(),
        })
    }

    /// Keyword search; returns the best match's default title, if any.
    pub fn search_title(&self, query: &str) -> Result<Option<String>, ApiError> {
        debug!(query = %query, "Jikan keyword search");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("limit", "1")])
            .send()?;
        let status = response.status();

        debug!("Jikan response status: {}", status);

        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let text = response.text()?;
        parse_search_response(&text)
    }
}

fn parse_search_response(body: &str) -> Result<Option<String>, ApiError> {
    let parsed: SearchResponse =
        serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))?;

    Ok(parsed
        .data
        .into_iter()
        .next()
        .map(|entry| entry.title)
        .filter(|title| !title.is_empty()))
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchEntry>,
}

#[derive(Deserialize)]
struct SearchEntry {
    title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = JikanClient::new(&ApiConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_parse_response_first_result() {
        let body = r#"{
            "data": [
                { "title": "Shingeki no Kyojin" },
                { "title": "Shingeki no Kyojin Season 2" }
            ]
        }"#;

        let title = parse_search_response(body).unwrap();

        assert_eq!(title.as_deref(), Some("Shingeki no Kyojin"));
    }

    #[test]
    fn test_parse_response_empty_result_set() {
        let body = r#"{ "data": [] }"#;

        assert!(parse_search_response(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_response_missing_data_field() {
        let body = r#"{ "pagination": {} }"#;

        assert!(parse_search_response(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_response_empty_title() {
        let body = r#"{ "data": [ { "title": "" } ] }"#;

        assert!(parse_search_response(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_response_malformed() {
        let result = parse_search_response("<html>oops</html>");

        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }
}
