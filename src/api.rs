//! Admin API Client
//!
//! HTTP bindings to the backend. The endpoint of a request decides the
//! type its body is decoded into.

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::{Summary, Work};

/// Backend endpoints the dashboard reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Summary,
    Works,
}

impl Endpoint {
    pub const ALL: [Endpoint; 2] = [Endpoint::Summary, Endpoint::Works];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Summary => "/api/admin/summary",
            Endpoint::Works => "/api/works",
        }
    }
}

/// A fully resolved GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub url: String,
    /// Value of the `Authorization` header
    pub authorization: String,
}

impl ApiRequest {
    pub fn new(config: &ApiConfig, endpoint: Endpoint, token: &str) -> Self {
        Self {
            endpoint,
            url: config.endpoint(endpoint.path()),
            authorization: format!("Bearer {}", token),
        }
    }
}

/// Requests to issue for `token`. An empty token issues nothing.
pub fn plan_requests(config: &ApiConfig, token: &str) -> Vec<ApiRequest> {
    if token.is_empty() {
        return Vec::new();
    }
    Endpoint::ALL
        .iter()
        .map(|&endpoint| ApiRequest::new(config, endpoint, token))
        .collect()
}

/// Decoded outcome of one request, tagged by endpoint
#[derive(Debug)]
pub enum Fetched {
    Summary(Result<Summary, FetchError>),
    Works(Result<Vec<Work>, FetchError>),
}

/// Thin wrapper over a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct AdminClient {
    http: reqwest::Client,
}

impl AdminClient {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn direct() -> Self {
        // Tests talk to 127.0.0.1; ignore any proxy in the environment.
        Self {
            http: reqwest::Client::builder().no_proxy().build().unwrap(),
        }
    }

    /// Issue `request`, decoding the body as its endpoint's response type
    pub async fn fetch(&self, request: &ApiRequest) -> Fetched {
        match request.endpoint {
            Endpoint::Summary => Fetched::Summary(self.send(request).await),
            Endpoint::Works => Fetched::Works(self.send(request).await),
        }
    }

    /// GET `request` and decode the JSON body as `T`
    async fn send<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, FetchError> {
        log::debug!("[API] GET {}", request.url);
        let response = self
            .http
            .get(&request.url)
            .header(AUTHORIZATION, &request.authorization)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}


#[cfg(test)]
mod tests {
    use super::test_server::serve_once;
    use super::*;

    #[test]
    fn test_empty_token_plans_nothing() {
        let config = ApiConfig::default();
        assert!(plan_requests(&config, "").is_empty());
    }

    #[test]
    fn test_token_plans_two_bearer_requests() {
        let config = ApiConfig::from_value(Some("http://backend:9000/"));
        let plan = plan_requests(&config, "abc123");

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].endpoint, Endpoint::Summary);
        assert_eq!(plan[0].url, "http://backend:9000/api/admin/summary");
        assert_eq!(plan[1].endpoint, Endpoint::Works);
        assert_eq!(plan[1].url, "http://backend:9000/api/works");
        for request in &plan {
            assert_eq!(request.authorization, "Bearer abc123");
        }
    }

    #[test]
    fn test_token_used_verbatim() {
        let plan = plan_requests(&ApiConfig::default(), " spaced token ");
        assert!(plan.iter().all(|r| r.authorization == "Bearer  spaced token "));
    }

    #[tokio::test]
    async fn test_send_carries_bearer_header() {
        let (base, server) = serve_once("200 OK", "[]").await;
        let config = ApiConfig::from_value(Some(&base));
        let request = plan_requests(&config, "abc123").remove(1);

        let works: Vec<Work> = AdminClient::direct().send(&request).await.unwrap();
        assert!(works.is_empty());

        let head = server.await.unwrap().to_lowercase();
        assert!(head.starts_with("get /api/works "));
        assert!(head.contains("authorization: bearer abc123"));
    }

    #[tokio::test]
    async fn test_send_non_success_status() {
        let (base, _server) = serve_once("403 Forbidden", r#"{"detail":"Admins only"}"#).await;
        let config = ApiConfig::from_value(Some(&base));
        let request = plan_requests(&config, "abc123").remove(0);

        let result = AdminClient::direct().send::<Vec<Work>>(&request).await;
        assert!(matches!(result, Err(FetchError::Status { status: 403 })));
    }

    #[tokio::test]
    async fn test_send_wrong_shape_is_decode_error() {
        let (base, _server) = serve_once("200 OK", r#"{"not":"a list"}"#).await;
        let config = ApiConfig::from_value(Some(&base));
        let request = plan_requests(&config, "abc123").remove(1);

        let result = AdminClient::direct().send::<Vec<Work>>(&request).await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_send_unreachable_is_network_error() {
        let config = ApiConfig::from_value(Some("http://127.0.0.1:1"));
        let request = plan_requests(&config, "abc123").remove(0);

        let result = AdminClient::direct().send::<Vec<Work>>(&request).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_fetch_summary_endpoint() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"total_tasks":10,"submitted":4,"accepted":3,"rejected":3}"#,
        )
        .await;
        let config = ApiConfig::from_value(Some(&base));
        let request = ApiRequest::new(&config, Endpoint::Summary, "abc123");

        match AdminClient::direct().fetch(&request).await {
            Fetched::Summary(Ok(summary)) => {
                assert_eq!(summary.total_tasks, Some(10));
                assert_eq!(summary.rejected, Some(3));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let head = server.await.unwrap().to_lowercase();
        assert!(head.starts_with("get /api/admin/summary "));
        assert!(head.contains("authorization: bearer abc123"));
    }

    #[tokio::test]
    async fn test_fetch_summary_rejects_array_body() {
        let (base, _server) = serve_once("200 OK", "[1,2,3]").await;
        let config = ApiConfig::from_value(Some(&base));
        let request = ApiRequest::new(&config, Endpoint::Summary, "abc123");

        let outcome = AdminClient::direct().fetch(&request).await;
        assert!(matches!(outcome, Fetched::Summary(Err(FetchError::Decode(_)))));
    }

    #[tokio::test]
    async fn test_fetch_works_endpoint() {
        let (base, _server) = serve_once(
            "200 OK",
            r#"[{"id":1,"name":"Poster A","role_name":"Artist"}]"#,
        )
        .await;
        let config = ApiConfig::from_value(Some(&base));
        let request = ApiRequest::new(&config, Endpoint::Works, "abc123");

        match AdminClient::direct().fetch(&request).await {
            Fetched::Works(Ok(works)) => assert_eq!(
                works,
                vec![Work {
                    id: 1,
                    name: "Poster A".to_string(),
                    role_name: "Artist".to_string(),
                }]
            ),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_summary_server_error() {
        let (base, _server) = serve_once("500 Internal Server Error", "oops").await;
        let config = ApiConfig::from_value(Some(&base));
        let request = ApiRequest::new(&config, Endpoint::Summary, "abc123");

        let outcome = AdminClient::direct().fetch(&request).await;
        assert!(matches!(outcome, Fetched::Summary(Err(FetchError::Status { status: 500 }))));
    }
}
