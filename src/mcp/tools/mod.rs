//! MCP tools for reading and updating employee leave.
//!
//! Each module implements a specific tool:
//! - `leave_balance`: Check remaining leave days
//! - `apply_leave`: Deduct leave for a list of dates
//! - `leave_history`: List dates already taken
//!
//! All tools work against the shared `LeaveStore` and reply with plain text.

pub mod apply_leave;
pub mod leave_balance;
pub mod leave_history;
