//! Hyperlink synthesis for `self` and related-resource links.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// Absolute URL of the current request, without its query string.
///
/// The scheme comes from `X-Forwarded-Proto` (default `http`) and the host from the `Host`
/// header, falling back to the URI authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    root: String,
    path: String,
}

impl RequestUrl {
    /// # Arguments
    /// - `root` - Scheme and authority, e.g. `http://localhost:8080`
    /// - `path` - Request path, e.g. `/businesses`
    pub fn new(root: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
        }
    }

    /// The request URL itself.
    pub fn base(&self) -> String {
        format!("{}{}", self.root, self.path)
    }

    /// The request URL extended by one `/<id>` segment.
    pub fn child(&self, id: i32) -> String {
        format!("{}/{}", self.base().trim_end_matches('/'), id)
    }

    /// Canonical URL of a resource in `collection`, independent of the request path.
    pub fn resource(&self, collection: &str, id: i32) -> String {
        format!("{}/{}/{}", self.root, collection, id)
    }
}

impl<S> FromRequestParts<S> for RequestUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("http");

        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| parts.uri.authority().map(|a| a.as_str()))
            .unwrap_or("localhost");

        Ok(Self::new(format!("{}://{}", scheme, host), parts.uri.path()))
    }
}
