//! Monthly savings after a flat tax on large payments.
//!
//! [`compute_monthly_savings`] is the typed entry point. Untyped input, such as
//! a JSON request body, goes through [`compute_from_value`] so that malformed
//! arguments surface as [`FailureReason::InvalidInput`].

pub mod core;

pub use crate::core::{
    calculate_savings, compute_from_value, compute_monthly_savings, compute_monthly_savings_with,
    FailureReason, Payment, SavingsReport, SavingsResult, TaxRule,
};
