use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Payments at or above this amount are taxed
pub const DEFAULT_THRESHOLD: Decimal = dec!(3000);

/// Flat rate applied to taxed payments
pub const DEFAULT_RATE: Decimal = dec!(0.20);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("tax threshold must not be negative: {0}")]
    NegativeThreshold(Decimal),
    #[error("tax rate must be between 0 and 1: {0}")]
    RateOutOfRange(Decimal),
}

/// Flat tax applied to every individual payment at or above a threshold.
/// Payments below the threshold are untaxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRule {
    threshold: Decimal,
    rate: Decimal,
}

impl Default for TaxRule {
    fn default() -> Self {
        TaxRule {
            threshold: DEFAULT_THRESHOLD,
            rate: DEFAULT_RATE,
        }
    }
}

impl TaxRule {
    pub fn new(threshold: Decimal, rate: Decimal) -> Result<Self, RuleError> {
        if threshold < Decimal::ZERO {
            return Err(RuleError::NegativeThreshold(threshold));
        }
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(RuleError::RateOutOfRange(rate));
        }
        Ok(TaxRule { threshold, rate })
    }

    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Threshold is inclusive
    pub fn applies_to(&self, payment: Decimal) -> bool {
        payment >= self.threshold
    }

    /// Tax due on a single payment. A rate within `[0, 1]` keeps the tax no
    /// larger than the payment, so this cannot overflow.
    pub fn tax_on(&self, payment: Decimal) -> Decimal {
        if self.applies_to(payment) {
            payment * self.rate
        } else {
            Decimal::ZERO
        }
    }

    /// Amount kept from a single payment after tax
    pub fn net(&self, payment: Decimal) -> Decimal {
        payment - self.tax_on(payment)
    }
}

impl std::fmt::Display for TaxRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}% on payments >= {}",
            (self.rate * dec!(100)).normalize(),
            self.threshold.normalize()
        )
    }
}
