//! MCP resource templates served by the leave server.
//!
//! - `greeting`: personalized greeting at `greeting://{name}`

pub mod greeting;

use rmcp::model::{ReadResourceResult, ResourceTemplate};

use crate::mcp::error::LeaveError;

pub fn templates() -> Result<Vec<ResourceTemplate>, LeaveError> {
    Ok(vec![greeting::template()?])
}

/// Resolves `uri` against the known templates.
pub fn read(uri: &str) -> Result<ReadResourceResult, LeaveError> {
    if uri.starts_with(greeting::URI_SCHEME) {
        return greeting::read(uri);
    }
    Err(LeaveError::ResourceNotFound(uri.to_string()))
}
