use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser, Debug)]
#[command(
    name = "savc",
    version,
    author,
    about = "Calculate monthly savings after tax and living costs"
)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate savings from a payments file
    Calculate(cmd::calculate::CalculateCommand),
    /// Validate and evaluate a raw JSON savings request
    Evaluate(cmd::evaluate::EvaluateCommand),
    /// Print the expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.command {
        Command::Calculate(calculate) => calculate.exec(),
        Command::Evaluate(evaluate) => evaluate.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
