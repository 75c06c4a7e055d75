//! The blocking GraphQL client.

use std::time::Duration;

use blogroll_core::config::SyncConfig;
use blogroll_core::types::PostList;

use crate::error::FetchError;
use crate::response::{into_post_list, GraphQlResponse};

const TRACE_APP_HEADER: &str = "blogroll";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query for the latest posts of a publication, newest first.
const LATEST_POSTS_QUERY: &str = "\
query LatestPosts($host: String!, $first: Int!) {
  publication(host: $host) {
    posts(first: $first) {
      edges {
        node {
          id
          title
          brief
          url
          publishedAt
          coverImage { url }
        }
      }
    }
  }
}";

/// Client for one content-API endpoint.
///
/// Holds its own [`ureq::Agent`]; construct once per run from the config and
/// pass by reference.
pub struct HashnodeClient {
    endpoint: String,
    access_token: Option<String>,
    agent: ureq::Agent,
}

impl HashnodeClient {
    pub fn new(endpoint: impl Into<String>, access_token: Option<String>) -> Self {
        HashnodeClient {
            endpoint: endpoint.into(),
            access_token,
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.endpoint.clone(), config.access_token.clone())
    }

    /// Fetch up to `first` latest posts for the publication at `host`.
    pub fn latest_posts(&self, host: &str, first: usize) -> Result<PostList, FetchError> {
        let payload = serde_json::json!({
            "query": LATEST_POSTS_QUERY,
            "variables": { "host": host, "first": first },
        });

        let mut request = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .set("hn-trace-app", TRACE_APP_HEADER);
        if let Some(token) = &self.access_token {
            request = request.set("Authorization", token);
        }

        let response = request.send_json(payload).map_err(map_transport_error)?;
        let decoded: GraphQlResponse = response.into_json().map_err(|e| FetchError::Malformed {
            message: e.to_string(),
        })?;
        into_post_list(decoded, host, first)
    }
}

fn map_transport_error(err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::Status(code, response) => FetchError::Status {
            code,
            message: response
                .into_string()
                .unwrap_or_else(|_| "unreadable response body".to_string()),
        },
        ureq::Error::Transport(transport) => FetchError::Transport {
            message: transport.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_copies_endpoint_and_token() {
        let mut config = SyncConfig::new("blog.example.dev");
        config.endpoint = "https://gql.example.test".to_string();
        config.access_token = Some("secret".to_string());
        let client = HashnodeClient::from_config(&config);
        assert_eq!(client.endpoint, "https://gql.example.test");
        assert_eq!(client.access_token.as_deref(), Some("secret"));
    }

    #[test]
    fn query_requests_the_fields_the_renderer_needs() {
        for field in ["title", "brief", "url", "publishedAt", "coverImage"] {
            assert!(
                LATEST_POSTS_QUERY.contains(field),
                "query must select {field}"
            );
        }
    }
}
