//! Employee records the store is populated with at startup.

use super::EmployeeRecord;

/// `(employee id, remaining days, dates already taken)`
const SEED: &[(&str, u32, &[&str])] = &[
    ("E001", 18, &["2024-12-25", "2025-01-01"]),
    ("E002", 20, &[]),
    ("E003", 15, &["2025-03-10", "2025-03-11"]),
    ("E004", 12, &["2025-02-20"]),
    ("E005", 10, &[]),
    ("E006", 22, &["2024-11-05"]),
    ("E007", 19, &["2025-01-15", "2025-01-16", "2025-01-17"]),
    ("E008", 25, &[]),
    ("E009", 17, &["2024-12-31"]),
    ("E010", 13, &["2025-05-01"]),
];

pub fn records() -> impl Iterator<Item = (String, EmployeeRecord)> {
    SEED.iter().map(|(id, balance, history)| {
        (
            (*id).to_string(),
            EmployeeRecord::new(*balance, history.iter().copied()),
        )
    })
}
