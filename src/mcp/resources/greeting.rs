//! Personalized greeting, addressed as `greeting://{name}`.

use rmcp::model::{ReadResourceResult, ResourceContents, ResourceTemplate};
use serde_json::json;

use crate::mcp::error::LeaveError;

pub const URI_SCHEME: &str = "greeting://";
pub const URI_TEMPLATE: &str = "greeting://{name}";

#[must_use]
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}! How can I assist you with leave management today?")
}

pub fn template() -> Result<ResourceTemplate, LeaveError> {
    let template = serde_json::from_value(json!({
        "uriTemplate": URI_TEMPLATE,
        "name": "greeting",
        "description": "Get a personalized greeting",
        "mimeType": "text/plain",
    }))?;
    Ok(template)
}

/// Extracts `{name}` from a `greeting://` URI. The name must be one
/// non-empty path segment.
pub fn name_from_uri(uri: &str) -> Result<&str, LeaveError> {
    let name = uri
        .strip_prefix(URI_SCHEME)
        .ok_or_else(|| LeaveError::ResourceNotFound(uri.to_string()))?;

    if name.is_empty() || name.contains('/') {
        return Err(LeaveError::InvalidParams(format!(
            "'{uri}' does not match {URI_TEMPLATE}"
        )));
    }
    Ok(name)
}

pub fn read(uri: &str) -> Result<ReadResourceResult, LeaveError> {
    let name = name_from_uri(uri)?;
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(greeting(name), uri)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!(
            greeting("Alice"),
            "Hello, Alice! How can I assist you with leave management today?"
        );
    }

    #[test]
    fn greets_empty_name() {
        assert_eq!(
            greeting(""),
            "Hello, ! How can I assist you with leave management today?"
        );
    }

    #[test]
    fn name_is_the_single_segment() {
        assert!(matches!(name_from_uri("greeting://Alice"), Ok("Alice")));
        assert!(matches!(name_from_uri("greeting://E001"), Ok("E001")));
    }

    #[test]
    fn other_schemes_are_not_found() {
        assert!(matches!(
            name_from_uri("leave://E001"),
            Err(LeaveError::ResourceNotFound(_))
        ));
        assert!(matches!(
            name_from_uri("Alice"),
            Err(LeaveError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn empty_or_nested_names_do_not_fill_the_template() {
        assert!(matches!(
            name_from_uri("greeting://"),
            Err(LeaveError::InvalidParams(_))
        ));
        assert!(matches!(
            name_from_uri("greeting://a/b"),
            Err(LeaveError::InvalidParams(_))
        ));
    }

    #[test]
    fn read_returns_text_content_for_the_uri() {
        let value = read("greeting://Bob")
            .ok()
            .and_then(|r| serde_json::to_value(r).ok())
            .unwrap_or_default();
        assert_eq!(value["contents"][0]["uri"], "greeting://Bob");
        assert_eq!(
            value["contents"][0]["text"],
            "Hello, Bob! How can I assist you with leave management today?"
        );
    }

    #[test]
    fn template_describes_the_uri() {
        let template = template().ok().map(|t| t.raw);
        assert_eq!(
            template.as_ref().map(|t| t.uri_template.as_str()),
            Some(URI_TEMPLATE)
        );
        assert_eq!(template.as_ref().map(|t| t.name.as_str()), Some("greeting"));
        assert_eq!(
            template.and_then(|t| t.mime_type),
            Some("text/plain".to_string())
        );
    }
}
