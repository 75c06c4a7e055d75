//! Wire shapes of the Hashnode GraphQL response.
//!
//! Kept separate from the domain types: these mirror the API's camelCase
//! edges/nodes verbatim and are flattened into [`PostList`] in one place.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use blogroll_core::types::{PostList, PostRecord};

use crate::error::FetchError;

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseData {
    pub publication: Option<Publication>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Publication {
    pub posts: PostConnection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostConnection {
    #[serde(default)]
    pub edges: Vec<PostEdge>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostEdge {
    pub node: PostNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostNode {
    pub id: String,
    pub title: String,
    pub brief: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub cover_image: Option<CoverImage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CoverImage {
    pub url: String,
}

impl From<PostNode> for PostRecord {
    fn from(node: PostNode) -> Self {
        PostRecord {
            id: node.id,
            title: node.title,
            summary: node.brief,
            published_at: node.published_at,
            url: node.url,
            cover_image: node.cover_image.map(|c| c.url),
        }
    }
}

/// Turn a decoded response into a bounded [`PostList`], surfacing GraphQL
/// errors and the missing-publication case as typed failures.
pub(crate) fn into_post_list(
    response: GraphQlResponse,
    host: &str,
    max: usize,
) -> Result<PostList, FetchError> {
    if !response.errors.is_empty() {
        let message = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FetchError::Api { message });
    }

    let data = response.data.ok_or_else(|| FetchError::Malformed {
        message: "response carried neither data nor errors".to_string(),
    })?;
    let publication = data.publication.ok_or_else(|| FetchError::PublicationNotFound {
        host: host.to_string(),
    })?;

    let records: Vec<PostRecord> = publication
        .posts
        .edges
        .into_iter()
        .map(|edge| edge.node.into())
        .collect();
    Ok(PostList::bounded(records, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> GraphQlResponse {
        serde_json::from_str(json).expect("decode fixture")
    }

    const FULL_PAYLOAD: &str = r#"{
        "data": {
            "publication": {
                "posts": {
                    "edges": [
                        {
                            "node": {
                                "id": "p1",
                                "title": "First",
                                "brief": "Short brief",
                                "url": "https://blog.example.dev/first",
                                "publishedAt": "2024-05-01T09:30:00Z",
                                "coverImage": { "url": "https://cdn.example.dev/first.png" }
                            }
                        },
                        {
                            "node": {
                                "id": "p2",
                                "title": "Second",
                                "brief": null,
                                "url": null,
                                "publishedAt": null,
                                "coverImage": null
                            }
                        }
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn full_payload_flattens_to_ordered_posts() {
        let list = into_post_list(decode(FULL_PAYLOAD), "blog.example.dev", 5).expect("posts");
        assert_eq!(list.len(), 2);

        let first = &list.posts()[0];
        assert_eq!(first.id, "p1");
        assert_eq!(first.title, "First");
        assert_eq!(first.summary.as_deref(), Some("Short brief"));
        assert_eq!(first.url.as_deref(), Some("https://blog.example.dev/first"));
        assert_eq!(
            first.cover_image.as_deref(),
            Some("https://cdn.example.dev/first.png")
        );
        assert!(first.published_at.is_some());

        let second = &list.posts()[1];
        assert_eq!(second.title, "Second");
        assert!(second.summary.is_none());
        assert!(second.url.is_none());
        assert!(second.cover_image.is_none());
    }

    #[test]
    fn post_cap_applies_even_when_api_over_delivers() {
        let list = into_post_list(decode(FULL_PAYLOAD), "blog.example.dev", 1).expect("posts");
        assert_eq!(list.len(), 1);
        assert_eq!(list.posts()[0].title, "First");
    }

    #[test]
    fn graphql_errors_surface_as_api_error() {
        let payload = r#"{
            "data": null,
            "errors": [
                { "message": "rate limited" },
                { "message": "try later" }
            ]
        }"#;
        let err = into_post_list(decode(payload), "blog.example.dev", 5).expect_err("api error");
        match err {
            FetchError::Api { message } => assert_eq!(message, "rate limited; try later"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn missing_publication_is_its_own_error() {
        let payload = r#"{ "data": { "publication": null } }"#;
        let err = into_post_list(decode(payload), "gone.example.dev", 5).expect_err("not found");
        match err {
            FetchError::PublicationNotFound { host } => assert_eq!(host, "gone.example.dev"),
            other => panic!("expected PublicationNotFound, got {other:?}"),
        }
    }

    #[test]
    fn empty_response_is_malformed() {
        let payload = r#"{ "data": null }"#;
        let err = into_post_list(decode(payload), "blog.example.dev", 5).expect_err("malformed");
        assert!(matches!(err, FetchError::Malformed { .. }));
    }

    #[test]
    fn publication_with_no_posts_yields_empty_list() {
        let payload = r#"{ "data": { "publication": { "posts": { "edges": [] } } } }"#;
        let list = into_post_list(decode(payload), "blog.example.dev", 5).expect("empty list");
        assert!(list.is_empty());
    }
}
