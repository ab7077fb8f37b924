//! HTTP session shared by every request of a run
//!
//! A [`Session`] is a cookie-retaining `reqwest` client that presents itself
//! as a desktop browser. Opening one visits the site's landing page so any
//! cookies it hands out are carried to the shelf requests.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

use crate::core::{FetchOutcome, HttpConfig, Result};

/// Stateful HTTP client for one run
#[derive(Clone)]
pub struct Session {
    client: Client,
    init_status: StatusCode,
}

impl Session {
    /// Build the client and issue one GET to `base_url`
    ///
    /// A non-200 answer is logged and the session is returned anyway; only a
    /// transport failure or an unusable URL yields `Err`.
    pub async fn open(base_url: &str, http: &HttpConfig) -> Result<Self> {
        let client = build_client(http)?;
        let outcome = get(&client, base_url).await?;

        match &outcome {
            FetchOutcome::FetchedOk { .. } => {
                info!(url = base_url, "Success! Connected to the website.");
            }
            FetchOutcome::FetchedWithWarning { status, .. } => {
                error!(url = base_url, "Failed with error: {}", status.as_u16());
            }
        }

        Ok(Self {
            client,
            init_status: outcome.status(),
        })
    }

    /// Issue one GET through this session
    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        get(&self.client, url).await
    }

    /// Status returned by the landing page
    pub fn init_status(&self) -> StatusCode {
        self.init_status
    }

    /// Whether the landing page answered 200
    pub fn is_connected(&self) -> bool {
        self.init_status == StatusCode::OK
    }
}

fn build_client(http: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .cookie_store(true)
        .user_agent(http.user_agent.as_str());

    if let Some(secs) = http.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

async fn get(client: &Client, url: &str) -> Result<FetchOutcome> {
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    debug!(url, status = status.as_u16(), bytes = body.len(), "fetched page");
    Ok(FetchOutcome::new(status, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_USER_AGENT;
    use crate::core::ShelfError;
    use crate::core::logging::capture::capture;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_open_connected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let session = Session::open(&server.uri(), &HttpConfig::default())
            .await
            .unwrap();

        assert!(session.is_connected());
        assert_eq!(session.init_status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_open_returns_session_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let session = Session::open(&server.uri(), &HttpConfig::default())
            .await
            .unwrap();

        assert!(!session.is_connected());
        assert_eq!(session.init_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_open_sends_browser_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let session = Session::open(&server.uri(), &HttpConfig::default())
            .await
            .unwrap();
        assert!(session.is_connected());

        let requests = server.received_requests().await.unwrap();
        let agent = requests[0]
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok());
        assert_eq!(agent, Some(DEFAULT_USER_AGENT));
    }

    #[tokio::test]
    async fn test_open_logs_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/down"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let (_guard, logs) = capture();

        Session::open(&server.uri(), &HttpConfig::default())
            .await
            .unwrap();
        Session::open(&format!("{}/down", server.uri()), &HttpConfig::default())
            .await
            .unwrap();

        assert!(logs.has("INFO", "Success! Connected to the website."));
        assert!(logs.has("ERROR", "Failed with error: 503"));
    }

    #[tokio::test]
    async fn test_fetch_keeps_body_of_non_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<p>not here</p>"))
            .mount(&server)
            .await;

        let session = Session::open(&server.uri(), &HttpConfig::default())
            .await
            .unwrap();
        let outcome = session
            .fetch(&format!("{}/gone", server.uri()))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            FetchOutcome::FetchedWithWarning {
                body: "<p>not here</p>".to_string(),
                status: StatusCode::NOT_FOUND,
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_url_is_an_error() {
        let err = Session::open("not a url", &HttpConfig::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ShelfError::Http(_)));
    }

    #[tokio::test]
    async fn test_empty_url_is_an_error() {
        let result = Session::open("", &HttpConfig::default()).await;
        assert!(result.is_err());
    }
}
