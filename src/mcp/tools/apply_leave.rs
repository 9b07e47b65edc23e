//! Tool for applying leave on specific dates.
//!
//! Each date costs one day of balance. The request is all-or-nothing: when
//! the balance cannot cover every date, nothing is deducted or recorded and
//! the reply states how many days were requested and how many remain.
//! Dates are recorded verbatim; duplicates and ordering are not checked.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mcp::store::LeaveStore;

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct LeaveApplication {
    #[schemars(description = "Employee ID, e.g. E001")]
    pub employee_id: String,
    #[schemars(
        description = "Dates to take as leave in YYYY-MM-DD format, one day each, e.g. [\"2025-04-17\", \"2025-05-01\"]"
    )]
    pub leave_dates: Vec<String>,
}

pub fn apply_leave(
    store: &LeaveStore,
    Parameters(LeaveApplication {
        employee_id,
        leave_dates,
    }): Parameters<LeaveApplication>,
) -> CallToolResult {
    let outcome = store.apply_leave(&employee_id, leave_dates);
    CallToolResult::success(vec![Content::text(outcome.to_string())])
}
