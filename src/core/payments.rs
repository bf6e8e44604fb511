use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::str::FromStr;

/// Input root for payment JSON
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PaymentInput {
    pub payments: Vec<Payment>,
}

/// A single income payment, e.g. one salary installment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Payment {
    /// Gross amount received
    #[schemars(with = "f64")]
    pub amount: Decimal,
    /// Date the payment was received (YYYY-MM-DD)
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Read payments from CSV with an `amount,date,description` header
pub fn read_payments_csv<R: Read>(reader: R) -> anyhow::Result<Vec<Payment>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut payments = Vec::new();
    for result in rdr.deserialize() {
        let payment: Payment = result?;
        payments.push(payment);
    }
    log::info!("Read {} csv payments", payments.len());
    Ok(payments)
}

/// Read payments from JSON
pub fn read_payments_json<R: Read>(reader: R) -> anyhow::Result<Vec<Payment>> {
    let input: PaymentInput = serde_json::from_reader(reader)?;
    log::info!("Read {} json payments", input.payments.len());
    Ok(input.payments)
}

/// A calendar month, written `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    year: i32,
    month: u32,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid month '{0}', expected YYYY-MM")]
pub struct ParseMonthError(String);

impl Month {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|_| ParseMonthError(s.to_string()))?;
        Ok(Month {
            year: date.year(),
            month: date.month(),
        })
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Keep only payments dated within `month`. Undated payments are dropped.
pub fn filter_month(payments: Vec<Payment>, month: Month) -> Vec<Payment> {
    payments
        .into_iter()
        .filter(|p| p.date.is_some_and(|d| month.contains(d)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn csv_with_optional_columns() {
        let data = "\
amount,date,description
1000,2024-06-01,Salary part 1
2999.99,,
3000,2024-06-28,Bonus
";
        let payments = read_payments_csv(data.as_bytes()).unwrap();
        assert_eq!(payments.len(), 3);
        assert_eq!(payments[0].amount, dec!(1000));
        assert_eq!(payments[0].date, Some(date("2024-06-01")));
        assert_eq!(payments[0].description.as_deref(), Some("Salary part 1"));
        assert_eq!(payments[1].amount, dec!(2999.99));
        assert_eq!(payments[1].date, None);
        assert_eq!(payments[1].description, None);
        assert_eq!(payments[2].description.as_deref(), Some("Bonus"));
    }

    #[test]
    fn csv_rejects_non_numeric_amount() {
        let data = "amount,date,description\nlots,2024-06-01,\n";
        assert!(read_payments_csv(data.as_bytes()).is_err());
    }

    #[test]
    fn json_payments() {
        let data = r#"{"payments": [
            {"amount": 1000},
            {"amount": "3400.50", "date": "2024-07-01", "description": "Contract"}
        ]}"#;
        let payments = read_payments_json(data.as_bytes()).unwrap();
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].amount, dec!(1000));
        assert_eq!(payments[0].date, None);
        assert_eq!(payments[1].amount, dec!(3400.50));
        assert_eq!(payments[1].date, Some(date("2024-07-01")));
    }

    #[test]
    fn json_missing_root_is_error() {
        assert!(read_payments_json(r#"[1000, 2000]"#.as_bytes()).is_err());
    }

    #[test]
    fn month_parse_and_display() {
        let month: Month = "2024-06".parse().unwrap();
        assert_eq!(month.to_string(), "2024-06");
        assert!(month.contains(date("2024-06-30")));
        assert!(!month.contains(date("2024-07-01")));
        assert!(!month.contains(date("2023-06-15")));
    }

    #[test]
    fn month_parse_errors() {
        assert_eq!(
            "2024-13".parse::<Month>(),
            Err(ParseMonthError("2024-13".to_string()))
        );
        assert!("June".parse::<Month>().is_err());
        assert!("2024-06-01".parse::<Month>().is_err());
    }

    #[test]
    fn filter_by_month() {
        let payments = vec![
            Payment {
                amount: dec!(1000),
                date: Some(date("2024-06-01")),
                description: None,
            },
            Payment {
                amount: dec!(2000),
                date: Some(date("2024-07-01")),
                description: None,
            },
            Payment {
                amount: dec!(3000),
                date: None,
                description: None,
            },
        ];
        let june = filter_month(payments, "2024-06".parse().unwrap());
        assert_eq!(june.len(), 1);
        assert_eq!(june[0].amount, dec!(1000));
    }
}
