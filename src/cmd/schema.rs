//! Schema command - print expected input formats

use clap::Args;
use savc::core::{PaymentInput, SavingsRequest};
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the payments file
    JsonSchema,
    /// JSON Schema for the `evaluate` request body
    RequestSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                let schema = schema_for!(PaymentInput);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::RequestSchema => {
                let schema = schema_for!(SavingsRequest);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::CsvHeader => {
                let names: Vec<&str> = CSV_FIELDS.iter().map(|(name, _, _)| *name).collect();
                println!("{}", names.join(","));
            }
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
        Ok(())
    }

    fn print_csv_fields(&self) {
        println!("CSV Input Format");
        println!("================");
        println!();
        for (name, required, description) in CSV_FIELDS {
            let req = if *required { "required" } else { "optional" };
            println!("{:12} ({:8})  {}", name, req, description);
        }
    }
}

const CSV_FIELDS: &[(&str, bool, &str)] = &[
    ("amount", true, "Gross payment amount"),
    ("date", false, "Payment date (YYYY-MM-DD), needed for --month"),
    ("description", false, "Optional description"),
];
