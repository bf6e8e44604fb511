use super::payments::Payment;
use super::rule::TaxRule;
use rust_decimal::Decimal;

/// Why a savings calculation produced no amount.
///
/// `EarnMore` is an expected outcome of a valid calculation, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FailureReason {
    /// Arguments were malformed or could not be represented
    #[error("invalid input")]
    InvalidInput,
    /// Net income does not cover the living cost
    #[error("earn more")]
    EarnMore,
}

pub type SavingsResult = Result<Decimal, FailureReason>;

/// Savings left after the default tax rule and living cost.
pub fn compute_monthly_savings(payments: &[Decimal], living_cost: Decimal) -> SavingsResult {
    compute_monthly_savings_with(payments, living_cost, &TaxRule::default())
}

/// Savings left after `rule` and living cost.
///
/// Returns `Ok` with a non-negative amount, `EarnMore` when the total is short
/// of the living cost, or `InvalidInput` if the arithmetic overflows.
pub fn compute_monthly_savings_with(
    payments: &[Decimal],
    living_cost: Decimal,
    rule: &TaxRule,
) -> SavingsResult {
    let mut total = Decimal::ZERO;

    for &payment in payments {
        let net = rule.net(payment);
        if rule.applies_to(payment) {
            log::debug!("Taxed payment {} -> {}", payment, net);
        }
        total = total.checked_add(net).ok_or(FailureReason::InvalidInput)?;
    }

    let savings = total
        .checked_sub(living_cost)
        .ok_or(FailureReason::InvalidInput)?;

    if savings >= Decimal::ZERO {
        Ok(savings)
    } else {
        log::debug!("Total {} short of living cost {}", total, living_cost);
        Err(FailureReason::EarnMore)
    }
}

/// One payment in a savings breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentLine {
    pub payment: Payment,
    pub taxed: bool,
    pub tax: Decimal,
    pub net: Decimal,
}

/// Per-payment breakdown of a savings calculation
#[derive(Debug, Clone)]
pub struct SavingsReport {
    pub rule: TaxRule,
    pub lines: Vec<PaymentLine>,
    pub living_cost: Decimal,
    pub outcome: SavingsResult,
}

impl SavingsReport {
    /// Totals are `None` when the sum overflows, in which case `outcome` is `InvalidInput`
    pub fn total_gross(&self) -> Option<Decimal> {
        checked_sum(self.lines.iter().map(|l| l.payment.amount))
    }

    pub fn total_tax(&self) -> Option<Decimal> {
        checked_sum(self.lines.iter().map(|l| l.tax))
    }

    pub fn total_net(&self) -> Option<Decimal> {
        checked_sum(self.lines.iter().map(|l| l.net))
    }

    pub fn taxed_count(&self) -> usize {
        self.lines.iter().filter(|l| l.taxed).count()
    }
}

fn checked_sum<I: Iterator<Item = Decimal>>(mut values: I) -> Option<Decimal> {
    values.try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
}

/// Calculate savings from payment records, keeping the per-payment detail.
pub fn calculate_savings(
    payments: &[Payment],
    living_cost: Decimal,
    rule: &TaxRule,
) -> SavingsReport {
    let amounts: Vec<Decimal> = payments.iter().map(|p| p.amount).collect();
    let outcome = compute_monthly_savings_with(&amounts, living_cost, rule);

    let lines = payments
        .iter()
        .map(|payment| PaymentLine {
            payment: payment.clone(),
            taxed: rule.applies_to(payment.amount),
            tax: rule.tax_on(payment.amount),
            net: rule.net(payment.amount),
        })
        .collect();

    SavingsReport {
        rule: *rule,
        lines,
        living_cost,
        outcome,
    }
}
