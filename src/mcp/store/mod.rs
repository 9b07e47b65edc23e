//! In-memory leave store.
//!
//! The set of employees is fixed when the store is built, so the map itself is
//! never written after construction. Each record sits behind its own mutex:
//! applying leave holds that lock from the balance check until the history
//! append, which serializes requests against one employee while requests for
//! different employees run in parallel.
//!
//! Every operation is total. Unknown employees and insufficient balances are
//! ordinary outcomes that render to the plain-text replies agents read.

mod seed;

use std::{collections::HashMap, fmt};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

const NOT_FOUND: &str = "Employee ID not found.";
const NO_LEAVES_TAKEN: &str = "No leaves taken.";

/// Remaining leave days and the dates already taken by one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub balance: u32,
    /// Dates in the order they were applied; kept verbatim.
    pub history: Vec<String>,
}

impl EmployeeRecord {
    #[must_use]
    pub fn new<I, S>(balance: u32, history: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            balance,
            history: history.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceOutcome {
    Found { employee_id: String, balance: u32 },
    NotFound,
}

impl fmt::Display for BalanceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found {
                employee_id,
                balance,
            } => write!(f, "{employee_id} has {balance} leave days remaining."),
            Self::NotFound => f.write_str(NOT_FOUND),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied { days: u32, remaining: u32 },
    /// Nothing was changed; `requested` is the number of dates submitted.
    InsufficientBalance { requested: usize, available: u32 },
    NotFound,
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied { days, remaining } => write!(
                f,
                "Leave applied for {days} day(s). Remaining balance: {remaining}."
            ),
            Self::InsufficientBalance {
                requested,
                available,
            } => write!(
                f,
                "Insufficient leave balance. You requested {requested} day(s) but have only {available}."
            ),
            Self::NotFound => f.write_str(NOT_FOUND),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOutcome {
    Found {
        employee_id: String,
        history: Vec<String>,
    },
    NotFound,
}

impl fmt::Display for HistoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found {
                employee_id,
                history,
            } if history.is_empty() => {
                write!(f, "Leave history for {employee_id}: {NO_LEAVES_TAKEN}")
            }
            Self::Found {
                employee_id,
                history,
            } => write!(f, "Leave history for {employee_id}: {}", history.join(", ")),
            Self::NotFound => f.write_str(NOT_FOUND),
        }
    }
}

/// Registry of employee leave records, keyed by employee id.
#[derive(Debug, Default)]
pub struct LeaveStore {
    records: HashMap<String, Mutex<EmployeeRecord>>,
}

impl LeaveStore {
    /// Builds the store from the built-in employee seed.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_records(seed::records())
    }

    /// Builds a store from arbitrary records. A repeated id replaces the
    /// earlier record.
    #[must_use]
    pub fn from_records<I, K>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, EmployeeRecord)>,
        K: Into<String>,
    {
        Self {
            records: records
                .into_iter()
                .map(|(id, record)| (id.into(), Mutex::new(record)))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Copy of one record as it is right now.
    #[cfg(test)]
    pub fn snapshot(&self, employee_id: &str) -> Option<EmployeeRecord> {
        self.records
            .get(employee_id)
            .map(|record| record.lock().clone())
    }

    #[must_use]
    pub fn balance(&self, employee_id: &str) -> BalanceOutcome {
        let Some(record) = self.records.get(employee_id) else {
            debug!(%employee_id, "balance lookup for unknown employee");
            return BalanceOutcome::NotFound;
        };

        let balance = record.lock().balance;
        debug!(%employee_id, balance, "balance lookup");
        BalanceOutcome::Found {
            employee_id: employee_id.to_string(),
            balance,
        }
    }

    /// Deducts one day per date and appends the dates to the employee's
    /// history, or changes nothing if the balance cannot cover every date.
    pub fn apply_leave(&self, employee_id: &str, leave_dates: Vec<String>) -> ApplyOutcome {
        let Some(record) = self.records.get(employee_id) else {
            debug!(%employee_id, "leave application for unknown employee");
            return ApplyOutcome::NotFound;
        };

        let requested = leave_dates.len();
        let mut record = record.lock();

        let days = match u32::try_from(requested) {
            Ok(days) if days <= record.balance => days,
            _ => {
                warn!(
                    %employee_id,
                    requested,
                    available = record.balance,
                    "leave application rejected"
                );
                return ApplyOutcome::InsufficientBalance {
                    requested,
                    available: record.balance,
                };
            }
        };

        record.balance -= days;
        record.history.extend(leave_dates);

        info!(%employee_id, days, remaining = record.balance, "leave applied");
        ApplyOutcome::Applied {
            days,
            remaining: record.balance,
        }
    }

    #[must_use]
    pub fn history(&self, employee_id: &str) -> HistoryOutcome {
        let Some(record) = self.records.get(employee_id) else {
            debug!(%employee_id, "history lookup for unknown employee");
            return HistoryOutcome::NotFound;
        };

        let history = record.lock().history.clone();
        debug!(%employee_id, entries = history.len(), "history lookup");
        HistoryOutcome::Found {
            employee_id: employee_id.to_string(),
            history,
        }
    }
}
