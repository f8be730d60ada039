//! Web search providers
//!
//! When no installed app matches, the search surface can hand the query to
//! a public web search engine. A provider knows how to turn a query into a
//! results-page URL and, optionally, an OpenSearch suggestions URL.

use url::Url;

/// A web search engine the launcher can forward queries to
pub trait WebSearchProvider {
    /// Display name shown in the search surface
    fn name(&self) -> &str;

    /// Results-page URL for a query
    fn search_url(&self, query: &str) -> Result<Url, url::ParseError>;

    /// Suggestions endpoint for a query, if the engine offers one
    fn suggestions_url(&self, _query: &str) -> Result<Option<Url>, url::ParseError> {
        Ok(None)
    }
}

/// Qwant
pub struct QwantProvider {
    lang: String,
}

impl QwantProvider {
    /// Create a provider asking for suggestions in the given language
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into() }
    }
}

impl WebSearchProvider for QwantProvider {
    fn name(&self) -> &str {
        "Qwant"
    }

    fn search_url(&self, query: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params("https://www.qwant.com/", &[("q", query)])
    }

    fn suggestions_url(&self, query: &str) -> Result<Option<Url>, url::ParseError> {
        let url = Url::parse_with_params(
            "https://api.qwant.com/api/suggest/",
            &[("q", query), ("client", "opensearch"), ("lang", &self.lang)],
        )?;
        Ok(Some(url))
    }
}

/// DuckDuckGo
pub struct DuckDuckGoProvider;

impl WebSearchProvider for DuckDuckGoProvider {
    fn name(&self) -> &str {
        "DuckDuckGo"
    }

    fn search_url(&self, query: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params("https://duckduckgo.com/", &[("q", query)])
    }

    fn suggestions_url(&self, query: &str) -> Result<Option<Url>, url::ParseError> {
        let url = Url::parse_with_params(
            "https://duckduckgo.com/ac/",
            &[("q", query), ("type", "list")],
        )?;
        Ok(Some(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qwant_search_url() {
        let provider = QwantProvider::new("en");

        let url = provider.search_url("hello world").unwrap();

        assert_eq!(url.as_str(), "https://www.qwant.com/?q=hello+world");
    }

    #[test]
    fn test_qwant_suggestions_url() {
        let provider = QwantProvider::new("de");

        let url = provider.suggestions_url("rust").unwrap().unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.qwant.com/api/suggest/?q=rust&client=opensearch&lang=de"
        );
    }

    #[test]
    fn test_duckduckgo_urls() {
        let provider = DuckDuckGoProvider;

        let search = provider.search_url("grid launcher").unwrap();
        let suggest = provider.suggestions_url("grid").unwrap().unwrap();

        assert_eq!(search.as_str(), "https://duckduckgo.com/?q=grid+launcher");
        assert_eq!(suggest.as_str(), "https://duckduckgo.com/ac/?q=grid&type=list");
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let provider = DuckDuckGoProvider;

        let url = provider.search_url("a&b=c").unwrap();

        assert_eq!(url.as_str(), "https://duckduckgo.com/?q=a%26b%3Dc");
    }
}
