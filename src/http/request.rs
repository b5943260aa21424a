//! Request simulation.
//!
//! # Responsibilities
//! - Normalize literal urls to the application-relative `~/` form
//! - Build an in-memory request the router can inspect
//! - Provide an empty base context for url generation
//!
//! # Design Decisions
//! - No server, no body: the request is `axum::http::Request<()>`
//! - Methods are upper-cased before parsing (`get` means `GET`)
//! - Query strings survive on the request but play no part in matching
//! - Characters a URI cannot carry are percent-encoded, so any literal url
//!   builds a request; matching decodes them again

use axum::http::uri::PathAndQuery;
use axum::http::{Method, Request, Uri};

use crate::error::{require_non_blank, ArgumentError};

/// Rewrite a literal url into the application-relative form:
/// `~/x` stays, `/x` becomes `~/x`, `x` becomes `~/x`.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("~/") {
        url.to_string()
    } else if url.starts_with('/') {
        format!("~{}", url)
    } else {
        format!("~/{}", url)
    }
}

/// Percent-encode characters a request target cannot carry literally.
/// Existing `%xx` escapes and url delimiters are left alone.
fn escape_request_target(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        if c.is_ascii_alphanumeric() || "-._~!$&'()*+,;=:@/?#%".contains(c) {
            escaped.push(c);
        } else {
            let mut buf = [0u8; 4];
            escaped.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    escaped
}

/// An in-memory request handed to the router.
#[derive(Debug)]
pub struct SimulatedRequest {
    app_relative_url: String,
    request: Request<()>,
}

impl SimulatedRequest {
    /// The normalized `~/...` url the request was built from.
    pub fn app_relative_url(&self) -> &str {
        &self.app_relative_url
    }

    pub fn method(&self) -> &Method {
        self.request.method()
    }

    /// Request path without the leading `/`, still percent-encoded.
    pub fn path(&self) -> &str {
        self.request.uri().path().trim_start_matches('/')
    }

    pub fn query(&self) -> Option<&str> {
        self.request.uri().query()
    }

    pub fn as_http(&self) -> &Request<()> {
        &self.request
    }
}

/// Builds simulated requests for route tests.
pub trait RequestSimulator {
    /// Request for an incoming route test.
    fn build_request(&self, url: &str, method: &str) -> Result<SimulatedRequest, ArgumentError>;

    /// Empty context used as ambient state for url generation.
    fn build_context(&self) -> SimulatedRequest;
}

/// Default simulator backed by `axum::http` types.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRequestSimulator;

impl HttpRequestSimulator {
    pub fn new() -> Self {
        Self
    }
}

impl RequestSimulator for HttpRequestSimulator {
    fn build_request(&self, url: &str, method: &str) -> Result<SimulatedRequest, ArgumentError> {
        require_non_blank(url, "url", "Url cannot be null or empty.")?;
        require_non_blank(method, "http_method", "Http method cannot be null or empty.")?;

        let app_relative_url = normalize_url(url);
        let invalid_url = |reason: String| ArgumentError::InvalidUrl {
            url: url.to_string(),
            reason,
        };

        // "~/a b?x=1" -> "/a%20b?x=1"
        let path_and_query = PathAndQuery::try_from(escape_request_target(&app_relative_url[1..]))
            .map_err(|e| invalid_url(e.to_string()))?;
        let uri = Uri::from(path_and_query);

        let method_name = method.trim().to_ascii_uppercase();
        let method = Method::from_bytes(method_name.as_bytes())
            .map_err(|_| ArgumentError::InvalidMethod { method: method.to_string() })?;

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .map_err(|e| invalid_url(e.to_string()))?;

        tracing::trace!(
            url = %app_relative_url,
            method = %request.method(),
            "Simulated request built"
        );

        Ok(SimulatedRequest {
            app_relative_url,
            request,
        })
    }

    fn build_context(&self) -> SimulatedRequest {
        // Request::new defaults to GET "/"
        SimulatedRequest {
            app_relative_url: "~/".to_string(),
            request: Request::new(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("~/home/index"), "~/home/index");
        assert_eq!(normalize_url("/home/index"), "~/home/index");
        assert_eq!(normalize_url("home/index"), "~/home/index");
        assert_eq!(normalize_url("~home"), "~/~home");
    }

    #[test]
    fn test_build_request() {
        let req = HttpRequestSimulator.build_request("/products/show/42?page=2", "post").unwrap();
        assert_eq!(req.app_relative_url(), "~/products/show/42?page=2");
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.path(), "products/show/42");
        assert_eq!(req.query(), Some("page=2"));
    }

    #[test]
    fn test_root_request_has_empty_path() {
        let req = HttpRequestSimulator.build_request("~/", "GET").unwrap();
        assert_eq!(req.path(), "");
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            HttpRequestSimulator.build_request("   ", "GET"),
            Err(ArgumentError::Blank { param: "url", .. })
        ));
        assert!(matches!(
            HttpRequestSimulator.build_request("home", "GE T"),
            Err(ArgumentError::InvalidMethod { .. })
        ));
    }

    #[test]
    fn test_literal_characters_are_escaped() {
        let req = HttpRequestSimulator.build_request("home/some page?q=a b", "GET").unwrap();
        assert_eq!(req.app_relative_url(), "~/home/some page?q=a b");
        assert_eq!(req.path(), "home/some%20page");
        assert_eq!(req.query(), Some("q=a%20b"));

        let req = HttpRequestSimulator.build_request("docs/a%2Fb/<x>|\\", "GET").unwrap();
        assert_eq!(req.path(), "docs/a%2Fb/%3Cx%3E%7C%5C");
    }

    #[test]
    fn test_context() {
        let ctx = HttpRequestSimulator.build_context();
        assert_eq!(ctx.app_relative_url(), "~/");
        assert_eq!(ctx.method(), Method::GET);
        assert_eq!(ctx.path(), "");
    }
}
