pub mod calculate;
pub mod evaluate;
pub mod schema;

use clap::Args;
use rust_decimal::Decimal;
use savc::core::{read_payments_csv, read_payments_json, Payment, RuleError, TaxRule};
use savc::core::{DEFAULT_RATE, DEFAULT_THRESHOLD};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Tax rule parameters shared by the calculating commands
#[derive(Args, Debug, Clone, Copy)]
pub struct RuleArgs {
    /// Payments at or above this amount are taxed
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: Decimal,

    /// Flat tax rate applied to taxed payments (0.2 = 20%)
    #[arg(long, default_value_t = DEFAULT_RATE)]
    rate: Decimal,
}

impl RuleArgs {
    pub fn rule(&self) -> Result<TaxRule, RuleError> {
        TaxRule::new(self.threshold, self.rate)
    }
}

/// Read payments from a CSV or JSON file (or JSON from stdin with "-")
pub fn read_payments(path: &Path) -> anyhow::Result<Vec<Payment>> {
    if path.as_os_str() == "-" {
        let buffer = read_stdin()?;
        return read_payments_json(io::Cursor::new(buffer));
    }

    let reader = BufReader::new(File::open(path)?);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        read_payments_json(reader)
    } else {
        read_payments_csv(reader)
    }
}

/// Open a file for reading, or stdin with "-"
pub fn open_input(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::Cursor::new(read_stdin()?)))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }
    Ok(buffer)
}

fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
