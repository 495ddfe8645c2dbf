//! Canonical-title resolution across the two providers.
//!
//! The chain order is fixed: AniList with the raw fragment, then Jikan
//! with a formatted query, then AniList again with Jikan's answer. When
//! the re-query succeeds, AniList's naming overrides Jikan's. A transport
//! failure on any call counts as "no result" for that call and never
//! aborts the batch.

use crate::api::{AniListClient, ApiConfig, ApiError, JikanClient, MediaTitle, TitlePreference};
use crate::normalize::format_for_provider_query;
use tracing::{debug, info, warn};

/// Canonical title lookup returning both language variants (provider A).
pub trait CanonicalLookup {
    fn search_title(&self, search: &str) -> Result<Option<MediaTitle>, ApiError>;
}

/// Keyword title search returning a single best-match title (provider B).
pub trait KeywordLookup {
    fn search_title(&self, query: &str) -> Result<Option<String>, ApiError>;
}

impl CanonicalLookup for AniListClient {
    fn search_title(&self, search: &str) -> Result<Option<MediaTitle>, ApiError> {
        AniListClient::search_title(self, search)
    }
}

impl KeywordLookup for JikanClient {
    fn search_title(&self, query: &str) -> Result<Option<String>, ApiError> {
        JikanClient::search_title(self, query)
    }
}

/// The seam the batch runner consumes.
pub trait ResolveTitle {
    fn resolve(&self, title_fragment: &str, preference: TitlePreference) -> Option<String>;
}

/// Resolves a raw title fragment to a canonical title via the fixed
/// provider chain.
pub struct TitleResolver<A = AniListClient, B = JikanClient> {
    canonical: A,
    keyword: B,
}

impl TitleResolver {
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            canonical: AniListClient::new(config)?,
            keyword: JikanClient::new(config)?,
        })
    }
}

impl<A: CanonicalLookup, B: KeywordLookup> TitleResolver<A, B> {
    pub fn new(canonical: A, keyword: B) -> Self {
        Self { canonical, keyword }
    }

    /// Step 1 (and step 3's re-query): ask the canonical provider.
    fn canonical_search(&self, search: &str, preference: TitlePreference) -> Option<String> {
        match self.canonical.search_title(search) {
            Ok(titles) => titles.and_then(|t| t.select(preference)),
            Err(e) => {
                warn!("Canonical title lookup failed for '{}': {}", search, e);
                None
            }
        }
    }

    /// Step 2: keyword search with the reformatted fragment.
    fn keyword_search(&self, title_fragment: &str) -> Option<String> {
        let query = format_for_provider_query(title_fragment);
        info!("Searching keyword provider with: {}", query);

        match self.keyword.search_title(&query) {
            Ok(title) => title,
            Err(e) => {
                warn!("Keyword title search failed for '{}': {}", query, e);
                None
            }
        }
    }

    /// Steps 2+3: keyword fallback, then cross-validate the hit against
    /// the canonical provider, whose naming wins when it answers.
    fn keyword_then_revalidate(
        &self,
        title_fragment: &str,
        preference: TitlePreference,
    ) -> Option<String> {
        let keyword_title = self.keyword_search(title_fragment)?;

        match self.canonical_search(&keyword_title, preference) {
            Some(revalidated) => {
                debug!(
                    "Cross-validation replaced '{}' with '{}'",
                    keyword_title, revalidated
                );
                Some(revalidated)
            }
            None => Some(keyword_title),
        }
    }
}

impl<A: CanonicalLookup, B: KeywordLookup> ResolveTitle for TitleResolver<A, B> {
    fn resolve(&self, title_fragment: &str, preference: TitlePreference) -> Option<String> {
        self.canonical_search(title_fragment, preference)
            .or_else(|| self.keyword_then_revalidate(title_fragment, preference))
    }
}
