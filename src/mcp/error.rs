//! Error types for the leave MCP server.
//!
//! Leave outcomes (unknown employee, insufficient balance) are not errors:
//! they are returned to the agent as text. `LeaveError` only covers failures
//! of the server itself and of malformed protocol requests:
//! - configuration that cannot be parsed
//! - resource URIs that match no template
//! - serialization failures
//!
//! It converts into RMCP's `ErrorData` for MCP protocol compliance.

use rmcp::{ErrorData, model::ErrorCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaveError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<LeaveError> for ErrorData {
    fn from(err: LeaveError) -> Self {
        match err {
            LeaveError::InvalidParams(msg) => Self::new(ErrorCode::INVALID_PARAMS, msg, None),
            LeaveError::ResourceNotFound(uri) => Self::new(
                ErrorCode::RESOURCE_NOT_FOUND,
                format!("Resource not found: {uri}"),
                None,
            ),
            LeaveError::InvalidConfig(msg) => Self::new(ErrorCode::INTERNAL_ERROR, msg, None),
            LeaveError::Serialization(e) => Self::new(ErrorCode::INTERNAL_ERROR, e.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_resource_maps_to_resource_not_found() {
        let data = ErrorData::from(LeaveError::ResourceNotFound("greeting://".to_string()));
        assert_eq!(data.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert_eq!(data.message, "Resource not found: greeting://");
    }

    #[test]
    fn invalid_params_keep_their_message() {
        let data = ErrorData::from(LeaveError::InvalidParams("bad uri".to_string()));
        assert_eq!(data.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(data.message, "bad uri");
    }

    #[test]
    fn config_errors_are_internal() {
        let data = ErrorData::from(LeaveError::InvalidConfig("LEAVE_MCP_PATH".to_string()));
        assert_eq!(data.code, ErrorCode::INTERNAL_ERROR);
    }
}
