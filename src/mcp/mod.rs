//! Leave management Model Context Protocol implementation.
//!
//! This crate serves an in-memory leave store to MCP clients.
//! The implementation is organized into:
//!
//! - `config`: Environment-based settings
//! - `error`: Error types and conversions
//! - `resources`: Resource templates (the greeting)
//! - `store`: Employee leave records and the operations on them
//! - `tools`: Individual MCP tools for leave operations
//!
//! The main entry point is the `LeaveMCPFactory` which provides the MCP server
//! implementation and manages all tools and resources.

pub mod config;
pub mod error;
pub mod resources;
pub mod store;
pub mod tools;

use std::sync::Arc;

use axum::http::request;
use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Implementation, InitializeRequestParam, InitializeResult,
        ListResourceTemplatesResult, PaginatedRequestParam, ProtocolVersion,
        ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use tracing::{debug, info};

use crate::mcp::{
    store::LeaveStore,
    tools::{
        apply_leave::{self, LeaveApplication},
        leave_balance::{self, Employee},
        leave_history,
    },
};

#[derive(Clone)]
pub struct LeaveMCPFactory {
    store: Arc<LeaveStore>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LeaveMCPFactory {
    /// Every session built from the same `store` handle sees the same records.
    pub fn new(store: Arc<LeaveStore>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    // Thin delegating methods so the `tool_router` proc-macro (which scans
    // this impl block) can discover and register the tools. These forward to
    // the implementations in `mcp::tools::*`.

    #[tool(description = "Check how many leave days are left for the employee")]
    async fn get_leave_balance(
        &self,
        params: Parameters<Employee>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(leave_balance::get_leave_balance(&self.store, params))
    }

    #[tool(
        description = "Apply leave for specific dates (e.g., [\"2025-04-17\", \"2025-05-01\"]). Each date uses one day of the employee's balance; the whole request is rejected if the balance is too low."
    )]
    async fn apply_leave(
        &self,
        params: Parameters<LeaveApplication>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(apply_leave::apply_leave(&self.store, params))
    }

    #[tool(description = "Get leave history for the employee")]
    async fn get_leave_history(
        &self,
        params: Parameters<Employee>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(leave_history::get_leave_history(&self.store, params))
    }
}

#[tool_handler]
impl ServerHandler for LeaveMCPFactory {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Leave management MCP server: check leave balances, apply leave for specific dates and review leave history by employee ID. Greetings are available at greeting://{name}."
                    .to_string(),
            ),
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult::with_all_items(
            resources::templates()?,
        ))
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        debug!(%uri, "read resource");
        resources::read(&uri).map_err(ErrorData::from)
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        if let Some(http_request_part) = context.extensions.get::<request::Parts>() {
            let initialize_headers = &http_request_part.headers;
            let initialize_uri = &http_request_part.uri;
            info!(?initialize_headers, %initialize_uri, "initialize from http server");
        }
        Ok(self.get_info())
    }
}
