//! Runtime-checked entry point for input that arrives untyped, such as a JSON
//! request body. Type violations map to [`FailureReason::InvalidInput`].

use super::rule::TaxRule;
use super::savings::{compute_monthly_savings_with, FailureReason, SavingsResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::io::Read;
use std::str::FromStr;

/// Raw savings request. Fields are kept untyped until validated; a missing
/// field reads as `null`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SavingsRequest {
    /// Sequence of numeric payment amounts
    #[serde(default)]
    #[schemars(with = "Vec<f64>")]
    pub payments: Value,
    /// Fixed monthly expenses
    #[serde(default)]
    #[schemars(with = "f64")]
    pub living_cost: Value,
}

impl SavingsRequest {
    pub fn evaluate(&self, rule: &TaxRule) -> SavingsResult {
        compute_from_value(&self.payments, &self.living_cost, rule)
    }
}

/// Parse a JSON request body and evaluate it.
///
/// A body that is not JSON is an error; a JSON body with the wrong shape is
/// an `InvalidInput` outcome.
pub fn evaluate_request<R: Read>(reader: R, rule: &TaxRule) -> anyhow::Result<SavingsResult> {
    let body: Value = serde_json::from_reader(reader)?;
    let request = match body {
        Value::Object(_) => serde_json::from_value::<SavingsRequest>(body)?,
        _ => {
            log::debug!("Request body is not an object");
            return Ok(Err(FailureReason::InvalidInput));
        }
    };
    Ok(request.evaluate(rule))
}

/// Validate untyped arguments, then compute savings.
///
/// Checks run in order and the first failure wins: `payments` must be an
/// array, `living_cost` must be a number, and each payment must be a number.
/// Payments after the first non-numeric one are not inspected.
pub fn compute_from_value(payments: &Value, living_cost: &Value, rule: &TaxRule) -> SavingsResult {
    let Value::Array(items) = payments else {
        log::debug!("payments is not an array: {}", payments);
        return Err(FailureReason::InvalidInput);
    };
    let Value::Number(living_cost) = living_cost else {
        log::debug!("living_cost is not a number: {}", living_cost);
        return Err(FailureReason::InvalidInput);
    };
    let living_cost = to_decimal(living_cost)?;

    let amounts = items
        .iter()
        .map(|item| match item {
            Value::Number(n) => to_decimal(n),
            other => {
                log::debug!("payment is not a number: {}", other);
                Err(FailureReason::InvalidInput)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    compute_monthly_savings_with(&amounts, living_cost, rule)
}

/// Numbers too large for a `Decimal` are treated as invalid input. Numbers
/// finer than its 28 decimal places are rounded.
fn to_decimal(n: &Number) -> Result<Decimal, FailureReason> {
    if let Some(i) = n.as_i64() {
        return Ok(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Decimal::from(u));
    }
    let s = n.to_string();
    Decimal::from_str(&s)
        .or_else(|_| Decimal::from_scientific(&s))
        .ok()
        .or_else(|| n.as_f64().and_then(Decimal::from_f64))
        .ok_or_else(|| {
            log::debug!("number out of range: {}", s);
            FailureReason::InvalidInput
        })
}
