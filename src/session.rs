//! HTTP client for the monitored application's session endpoints.

use reqwest::header::{COOKIE, HeaderMap};
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

pub const STATUS_ENDPOINT: &str = "/api/session/status";
pub const EXTEND_ENDPOINT: &str = "/api/session/extend";

const EXPIRING_HEADER: &str = "X-Session-Expiring";
const REMAINING_HEADER: &str = "X-Session-Remaining-Minutes";

/// Session state as reported by the status endpoint's response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub expiring: bool,
    pub remaining_minutes: Option<u32>,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server rejected the request with status {0}")]
    Rejected(StatusCode),

    #[error("invalid base URL: {0}")]
    BadUrl(String),
}

/// Client for the session status and extend endpoints. Every request carries
/// the operator's session cookie and the AJAX marker header the application
/// expects from its own scripts.
#[derive(Clone)]
pub struct SessionClient {
    http: Client,
    status_url: Url,
    extend_url: Url,
    cookie: String,
}

impl SessionClient {
    pub fn new(base: &Url, cookie: String) -> Result<Self, SessionError> {
        let status_url = base
            .join(STATUS_ENDPOINT)
            .map_err(|e| SessionError::BadUrl(e.to_string()))?;
        let extend_url = base
            .join(EXTEND_ENDPOINT)
            .map_err(|e| SessionError::BadUrl(e.to_string()))?;
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            status_url,
            extend_url,
            cookie,
        })
    }

    /// Check the session status. Returns the parsed expiration headers on any
    /// 2xx response; the response body is never inspected.
    pub async fn fetch_status(&self) -> Result<SessionStatus, SessionError> {
        let response = self
            .http
            .get(self.status_url.clone())
            .header(COOKIE, self.cookie.as_str())
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SessionError::Rejected(response.status()));
        }

        Ok(status_from_headers(response.headers()))
    }

    /// Ask the server to extend the session. Success is any 2xx status.
    pub async fn extend(&self) -> Result<(), SessionError> {
        let response = self
            .http
            .post(self.extend_url.clone())
            .header(COOKIE, self.cookie.as_str())
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(SessionError::Rejected(response.status()))
        }
    }
}

/// Parse the expiration headers. The expiring flag must be the literal string
/// "true"; the remaining-minutes header is an integer string, and anything
/// unparseable is treated as absent.
pub fn status_from_headers(headers: &HeaderMap) -> SessionStatus {
    let expiring = headers
        .get(EXPIRING_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == "true")
        .unwrap_or(false);

    let remaining_minutes = headers
        .get(REMAINING_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok());

    SessionStatus {
        expiring,
        remaining_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_expiring_with_minutes() {
        let status = status_from_headers(&headers(&[
            ("X-Session-Expiring", "true"),
            ("X-Session-Remaining-Minutes", "5"),
        ]));
        assert_eq!(
            status,
            SessionStatus {
                expiring: true,
                remaining_minutes: Some(5),
            }
        );
    }

    #[test]
    fn test_absent_headers_mean_not_expiring() {
        let status = status_from_headers(&headers(&[]));
        assert_eq!(
            status,
            SessionStatus {
                expiring: false,
                remaining_minutes: None,
            }
        );
    }

    #[test]
    fn test_expiring_flag_must_be_literal_true() {
        let status = status_from_headers(&headers(&[("X-Session-Expiring", "TRUE")]));
        assert!(!status.expiring);

        let status = status_from_headers(&headers(&[("X-Session-Expiring", "1")]));
        assert!(!status.expiring);
    }

    #[test]
    fn test_malformed_minutes_treated_as_absent() {
        let status = status_from_headers(&headers(&[
            ("X-Session-Expiring", "true"),
            ("X-Session-Remaining-Minutes", "soon"),
        ]));
        assert!(status.expiring);
        assert_eq!(status.remaining_minutes, None);
    }

    #[test]
    fn test_minutes_with_whitespace() {
        let status = status_from_headers(&headers(&[("X-Session-Remaining-Minutes", " 12 ")]));
        assert_eq!(status.remaining_minutes, Some(12));
    }

    #[test]
    fn test_client_rejects_unjoinable_base() {
        let base = Url::parse("mailto:ops@example.com").unwrap();
        assert!(SessionClient::new(&base, String::new()).is_err());
    }
}
