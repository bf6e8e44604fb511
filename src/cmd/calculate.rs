//! Calculate command - savings from a payment ledger

use super::{format_amount, read_payments, RuleArgs};
use clap::Args;
use rust_decimal::Decimal;
use savc::core::{calculate_savings, filter_month, FailureReason, Month, SavingsReport};
use serde::Serialize;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CalculateCommand {
    /// CSV or JSON file containing payments ("-" reads JSON from stdin)
    #[arg(short, long)]
    payments: PathBuf,

    /// Fixed monthly living cost
    #[arg(short, long, allow_negative_numbers = true)]
    living_cost: Decimal,

    /// Only include payments dated in this month (YYYY-MM)
    #[arg(short, long)]
    month: Option<Month>,

    #[command(flatten)]
    rule: RuleArgs,

    /// Show the per-payment breakdown
    #[arg(short, long)]
    breakdown: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SavingsSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<String>,
    tax_rule: String,
    payment_count: usize,
    taxed_count: usize,
    total_gross: Option<String>,
    total_tax: Option<String>,
    total_net: Option<String>,
    living_cost: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    savings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<String>,
}

/// Row for the breakdown table
#[derive(Debug, Clone, Tabled)]
struct PaymentRow {
    #[tabled(rename = "#")]
    row_num: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Gross")]
    gross: String,
    #[tabled(rename = "Tax")]
    tax: String,
    #[tabled(rename = "Net")]
    net: String,
}

impl CalculateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rule = self.rule.rule()?;
        let mut payments = read_payments(&self.payments)?;
        if let Some(month) = self.month {
            payments = filter_month(payments, month);
            log::info!("{} payments in {}", payments.len(), month);
        }

        let report = calculate_savings(&payments, self.living_cost, &rule);

        if self.json {
            self.print_json(&report)?;
        } else {
            self.print_summary(&report);
        }

        if report.outcome == Err(FailureReason::InvalidInput) {
            std::process::exit(1);
        }
        Ok(())
    }

    fn print_summary(&self, report: &SavingsReport) {
        let month_str = self.month.map_or("All Payments".to_string(), |m| m.to_string());

        println!();
        println!("SAVINGS ({}) - {}", month_str, report.rule);
        println!();

        if self.breakdown {
            print_breakdown(report);
            println!();
        }

        println!(
            "  Payments: {} ({} taxed)",
            report.lines.len(),
            report.taxed_count()
        );
        println!(
            "  Gross: {} | Tax: {} | Net: {}",
            format_total(report.total_gross()),
            format_total(report.total_tax()),
            format_total(report.total_net())
        );
        println!("  Living cost: {}", format_amount(report.living_cost));
        println!();

        match report.outcome {
            Ok(savings) => println!("SAVINGS: {}", format_amount(savings)),
            Err(reason) => println!("SAVINGS: {}", reason),
        }
        println!();
    }

    fn print_json(&self, report: &SavingsReport) -> anyhow::Result<()> {
        let (savings, failure) = match report.outcome {
            Ok(savings) => (Some(format_amount(savings)), None),
            Err(reason) => (None, Some(reason.to_string())),
        };

        let data = SavingsSummary {
            month: self.month.map(|m| m.to_string()),
            tax_rule: report.rule.to_string(),
            payment_count: report.lines.len(),
            taxed_count: report.taxed_count(),
            total_gross: report.total_gross().map(format_amount),
            total_tax: report.total_tax().map(format_amount),
            total_net: report.total_net().map(format_amount),
            living_cost: format_amount(report.living_cost),
            savings,
            failure,
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

fn print_breakdown(report: &SavingsReport) {
    if report.lines.is_empty() {
        println!("No payments found");
        return;
    }

    let rows: Vec<PaymentRow> = report
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| PaymentRow {
            row_num: format!("#{}", i + 1),
            date: line
                .payment
                .date
                .map_or("-".to_string(), |d| d.format("%Y-%m-%d").to_string()),
            description: line.payment.description.clone().unwrap_or_default(),
            gross: format_amount(line.payment.amount),
            tax: if line.taxed {
                format_amount(line.tax)
            } else {
                "-".to_string()
            },
            net: format_amount(line.net),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

fn format_total(total: Option<Decimal>) -> String {
    total.map_or("overflow".to_string(), format_amount)
}
