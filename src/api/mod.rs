mod anilist;
mod jikan;
mod types;

pub use anilist::AniListClient;
pub use jikan::JikanClient;
pub use types::{ApiConfig, ApiError, MediaTitle, TitlePreference};

use std::env;

/// Environment variable names for provider endpoint overrides
pub const ENV_ANILIST_URL: &str = "OPEDRENAMER_ANILIST_URL";
pub const ENV_JIKAN_URL: &str = "OPEDRENAMER_JIKAN_URL";
pub const ENV_TIMEOUT_SECS: &str = "OPEDRENAMER_TIMEOUT_SECS";

/// Load provider configuration from environment variables, falling back
/// to the public AniList and Jikan endpoints.
///
/// These can be set in a `.env` file in the working directory.
pub fn config_from_env() -> ApiConfig {
    let defaults = ApiConfig::default();

    ApiConfig {
        anilist_url: env::var(ENV_ANILIST_URL).unwrap_or(defaults.anilist_url),
        jikan_url: env::var(ENV_JIKAN_URL).unwrap_or(defaults.jikan_url),
        timeout_secs: env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to serialize env var tests (they share global state)
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_from_env_defaults() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        env::remove_var(ENV_ANILIST_URL);
        env::remove_var(ENV_JIKAN_URL);
        env::remove_var(ENV_TIMEOUT_SECS);

        let config = config_from_env();

        assert_eq!(config.anilist_url, "https://graphql.anilist.co");
        assert_eq!(config.jikan_url, "https://api.jikan.moe/v4/anime");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_from_env_with_overrides() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        env::set_var(ENV_ANILIST_URL, "http://localhost:9000/graphql");
        env::set_var(ENV_JIKAN_URL, "http://localhost:9000/anime");
        env::set_var(ENV_TIMEOUT_SECS, "5");

        let config = config_from_env();

        assert_eq!(config.anilist_url, "http://localhost:9000/graphql");
        assert_eq!(config.jikan_url, "http://localhost:9000/anime");
        assert_eq!(config.timeout_secs, 5);

        env::remove_var(ENV_ANILIST_URL);
        env::remove_var(ENV_JIKAN_URL);
        env::remove_var(ENV_TIMEOUT_SECS);
    }
}
