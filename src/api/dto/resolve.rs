//! DTOs for the resolve endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// JSON view of a link. The default value serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBody {
    #[serde(rename = "Path", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "Created", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl From<Link> for LinkBody {
    fn from(link: Link) -> Self {
        Self {
            path: Some(link.path),
            url: Some(link.url),
            created: Some(link.created_at),
        }
    }
}

/// Body of every resolve response, hit or miss.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolveResponse {
    pub success: bool,
    pub result: LinkBody,
}

impl ResolveResponse {
    pub fn found(link: Link) -> Self {
        Self {
            success: true,
            result: link.into(),
        }
    }

    pub fn unresolved() -> Self {
        Self {
            success: false,
            result: LinkBody::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_serializes_empty_result() {
        let json = serde_json::to_value(ResolveResponse::unresolved()).unwrap();
        assert_eq!(json, serde_json::json!({"Success": false, "Result": {}}));
    }

    #[test]
    fn test_found_serializes_link_fields() {
        let created = "2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let link = Link::new("abcd".into(), "https://example.com/".into(), created);

        let json = serde_json::to_value(ResolveResponse::found(link)).unwrap();

        assert_eq!(json["Success"], true);
        assert_eq!(json["Result"]["Path"], "abcd");
        assert_eq!(json["Result"]["URL"], "https://example.com/");
        assert_eq!(json["Result"]["Created"], "2024-05-01T12:00:00Z");
    }
}
