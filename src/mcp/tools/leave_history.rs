//! Tool for listing the dates an employee has already taken as leave.
//!
//! Dates are returned in the order they were applied, comma separated.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};

use crate::mcp::{store::LeaveStore, tools::leave_balance::Employee};

pub fn get_leave_history(
    store: &LeaveStore,
    Parameters(args): Parameters<Employee>,
) -> CallToolResult {
    let outcome = store.history(&args.employee_id);
    CallToolResult::success(vec![Content::text(outcome.to_string())])
}
