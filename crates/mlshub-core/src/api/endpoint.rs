//! Endpoint descriptions and request building.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Request, Url};

use super::NetworkError;

// ============================================================================
// Constants
// ============================================================================

/// Host serving the published stats feed
pub const STATS_BASE_URL: &str = "https://gist.githubusercontent.com";

/// Versioned path of the stats feed. Pinned to a revision so the shape never
/// changes underneath a released build.
pub const STATS_PATH: &str = "/dnTeixeira/b317ed413ca9dc17ddf01d307b923376/raw/1ab5fc269c0dcecbef5afbf31d25eca634a64bcb/mls_data.json";

/// A remote resource that can be turned into an HTTP request.
pub trait Endpoint: Send + Sync {
    fn base_url(&self) -> &str;
    fn path(&self) -> &str;

    fn method(&self) -> Method {
        Method::GET
    }

    fn headers(&self) -> Option<BTreeMap<String, String>> {
        None
    }

    fn parameters(&self) -> Option<BTreeMap<String, String>> {
        None
    }

    /// Build the request for this endpoint.
    fn make_request(&self) -> Result<Request, NetworkError> {
        let mut url = Url::parse(self.base_url())
            .map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", self.base_url(), e)))?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(NetworkError::InvalidUrl(self.base_url().to_string()));
        }

        url.set_path(self.path());
        if let Some(params) = self.parameters().filter(|p| !p.is_empty()) {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        let mut request = Request::new(self.method(), url);
        *request.headers_mut() = build_headers(self.headers())?;
        Ok(request)
    }
}

fn build_headers(headers: Option<BTreeMap<String, String>>) -> Result<HeaderMap, NetworkError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers.unwrap_or_default() {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| NetworkError::InvalidUrl(format!("invalid header name: {}", name)))?;
        let header_value = HeaderValue::from_str(&value)
            .map_err(|_| NetworkError::InvalidUrl(format!("invalid value for header {}", name)))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// The published per-team stats feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsEndpoint {
    base_url: String,
    path: String,
}

impl StatsEndpoint {
    pub fn team_stats() -> Self {
        Self {
            base_url: STATS_BASE_URL.to_string(),
            path: STATS_PATH.to_string(),
        }
    }

    /// Point the feed at another host, e.g. a mirror or a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

impl Default for StatsEndpoint {
    fn default() -> Self {
        Self::team_stats()
    }
}

impl Endpoint for StatsEndpoint {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn headers(&self) -> Option<BTreeMap<String, String>> {
        Some(BTreeMap::from([(
            "Accept".to_string(),
            "application/json".to_string(),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SearchEndpoint {
        base: &'static str,
        params: BTreeMap<String, String>,
    }

    impl Endpoint for SearchEndpoint {
        fn base_url(&self) -> &str {
            self.base
        }

        fn path(&self) -> &str {
            "/v1/search"
        }

        fn parameters(&self) -> Option<BTreeMap<String, String>> {
            Some(self.params.clone())
        }
    }

    #[test]
    fn test_stats_request() {
        let request = StatsEndpoint::team_stats()
            .make_request()
            .expect("Failed to build stats request");

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().host_str(), Some("gist.githubusercontent.com"));
        assert_eq!(request.url().path(), STATS_PATH);
        assert_eq!(request.url().query(), None);
        assert_eq!(
            request.headers().get("accept").and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_base_url_override() {
        let request = StatsEndpoint::team_stats()
            .with_base_url("http://127.0.0.1:8080")
            .with_path("/stats.json")
            .make_request()
            .expect("Failed to build overridden request");

        assert_eq!(request.url().as_str(), "http://127.0.0.1:8080/stats.json");
    }

    #[test]
    fn test_query_parameters_appended() {
        let endpoint = SearchEndpoint {
            base: "https://example.com",
            params: BTreeMap::from([
                ("team".to_string(), "Inter Miami".to_string()),
                ("season".to_string(), "2024".to_string()),
            ]),
        };

        let request = endpoint.make_request().expect("Failed to build search request");
        assert_eq!(request.url().query(), Some("season=2024&team=Inter+Miami"));
    }

    #[test]
    fn test_invalid_base_url() {
        let bad = [
            StatsEndpoint::team_stats().with_base_url("not a url"),
            StatsEndpoint::team_stats().with_base_url("mailto:someone@example.com"),
            StatsEndpoint::team_stats().with_base_url(""),
        ];

        for endpoint in bad {
            let result = endpoint.make_request();
            assert!(
                matches!(result, Err(NetworkError::InvalidUrl(_))),
                "expected InvalidUrl for {:?}",
                endpoint
            );
        }
    }
}
