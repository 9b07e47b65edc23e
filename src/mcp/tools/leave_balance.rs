//! Tool for checking how many leave days an employee has left.

use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mcp::store::LeaveStore;

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct Employee {
    #[schemars(description = "Employee ID, e.g. E001")]
    pub employee_id: String,
}

pub fn get_leave_balance(
    store: &LeaveStore,
    Parameters(args): Parameters<Employee>,
) -> CallToolResult {
    let outcome = store.balance(&args.employee_id);
    CallToolResult::success(vec![Content::text(outcome.to_string())])
}
