pub mod boundary;
pub mod payments;
pub mod rule;
pub mod savings;

// Flat public surface for domain types and functions.
pub use boundary::{compute_from_value, evaluate_request, SavingsRequest};
pub use payments::{
    filter_month, read_payments_csv, read_payments_json, Month, Payment, PaymentInput,
};
pub use rule::{RuleError, TaxRule, DEFAULT_RATE, DEFAULT_THRESHOLD};
pub use savings::{
    calculate_savings, compute_monthly_savings, compute_monthly_savings_with, FailureReason,
    PaymentLine, SavingsReport, SavingsResult,
};
