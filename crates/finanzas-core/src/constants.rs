//! Constants shared across the finanzas crates.

/// Months in a year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Longest accrual the calculator accepts (100 years).
pub const MAX_MONTHS: u32 = 1200;

/// Number of entries kept in each local history.
pub const HISTORY_LIMIT: usize = 10;

/// Required monthly saving above which a goal is flagged as hard to reach.
pub const HIGH_MONTHLY_SAVING: f64 = 5000.0;

/// Tolerance used when deciding whether a month count is integral.
pub const MONTH_EPSILON: f64 = 1e-9;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Rejected or malformed user input.
    pub const ERROR_INPUT: i32 = 2;
    /// The remote finance API failed or returned garbage.
    pub const ERROR_REMOTE: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
