use thiserror::Error;

/// Which title variant provider responses should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePreference {
    English,
    Romaji,
}

/// Title fields returned by the canonical provider. Either field may be
/// missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
}

impl MediaTitle {
    /// Pick a title variant: the preferred field when present, then the
    /// English field, then the romanized field. Empty strings count as
    /// absent.
    pub fn select(&self, preference: TitlePreference) -> Option<String> {
        let preferred = match preference {
            TitlePreference::English => self.english.as_deref(),
            TitlePreference::Romaji => self.romaji.as_deref(),
        };

        non_empty(preferred)
            .or_else(|| non_empty(self.english.as_deref()))
            .or_else(|| non_empty(self.romaji.as_deref()))
            .map(str::to_string)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Provider endpoint configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub anilist_url: String,
    pub jikan_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            anilist_url: "https://graphql.anilist.co".to_string(),
            jikan_url: "https://api.jikan.moe/v4/anime".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Errors that can occur when talking to a title provider
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Provider returned HTTP status {0}")]
    HttpStatus(u16),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::NetworkError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(romaji: Option<&str>, english: Option<&str>) -> MediaTitle {
        MediaTitle {
            romaji: romaji.map(str::to_string),
            english: english.map(str::to_string),
        }
    }

    #[test]
    fn test_select_prefers_requested_field() {
        let t = titles(Some("Shingeki no Kyojin"), Some("Attack on Titan"));

        assert_eq!(
            t.select(TitlePreference::English).as_deref(),
            Some("Attack on Titan")
        );
        assert_eq!(
            t.select(TitlePreference::Romaji).as_deref(),
            Some("Shingeki no Kyojin")
        );
    }

    #[test]
    fn test_select_falls_back_to_english_then_romaji() {
        let t = titles(Some("Shingeki no Kyojin"), None);
        assert_eq!(
            t.select(TitlePreference::English).as_deref(),
            Some("Shingeki no Kyojin")
        );

        let t = titles(None, Some("Attack on Titan"));
        assert_eq!(
            t.select(TitlePreference::Romaji).as_deref(),
            Some("Attack on Titan")
        );
    }

    #[test]
    fn test_select_treats_empty_as_absent() {
        let t = titles(Some("Shingeki no Kyojin"), Some(""));
        assert_eq!(
            t.select(TitlePreference::English).as_deref(),
            Some("Shingeki no Kyojin")
        );
    }

    #[test]
    fn test_select_nothing_available() {
        let t = titles(None, None);
        assert!(t.select(TitlePreference::English).is_none());

        let t = titles(Some(""), Some(""));
        assert!(t.select(TitlePreference::Romaji).is_none());
    }

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();

        assert_eq!(config.anilist_url, "https://graphql.anilist.co");
        assert_eq!(config.jikan_url, "https://api.jikan.moe/v4/anime");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::HttpStatus(429);
        assert!(err.to_string().contains("429"));

        let err = ApiError::Timeout;
        assert!(err.to_string().contains("timeout"));
    }
}
