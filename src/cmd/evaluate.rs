//! Evaluate command - validate and compute a raw JSON savings request

use super::{open_input, RuleArgs};
use clap::Args;
use savc::core::{evaluate_request, FailureReason};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct EvaluateCommand {
    /// JSON request file `{"payments": [...], "living_cost": ...}` ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    #[command(flatten)]
    rule: RuleArgs,

    /// Output as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct EvaluateOutput {
    ok: bool,
    result: String,
}

impl EvaluateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rule = self.rule.rule()?;
        let outcome = evaluate_request(open_input(&self.input)?, &rule)?;

        let output = match outcome {
            Ok(savings) => EvaluateOutput {
                ok: true,
                result: savings.normalize().to_string(),
            },
            Err(reason) => EvaluateOutput {
                ok: false,
                result: reason.to_string(),
            },
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", output.result);
        }

        if outcome == Err(FailureReason::InvalidInput) {
            std::process::exit(1);
        }
        Ok(())
    }
}
